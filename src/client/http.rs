//! HTTP-backed Actual Budget client
//!
//! Talks to an actual-server instance: password login for a session
//! token, then token-authenticated calls returning `{data: ...}`
//! envelopes. The server's sync protocol proper lives behind these
//! endpoints and is not reimplemented here; the downloaded budget file is
//! parked in the session's data directory for the server to reconcile.

use super::api::{BudgetClient, Connector};
use super::types::{Account, Budget, Category, NewTransaction, Payee};
use crate::credentials::Credentials;
use async_trait::async_trait;
use eyre::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

const TOKEN_HEADER: &str = "X-ACTUAL-TOKEN";
const FILE_HEADER: &str = "X-ACTUAL-FILE-ID";

/// Connector that logs into an actual-server over HTTP.
#[derive(Debug, Default)]
pub struct HttpConnector;

#[async_trait]
impl Connector for HttpConnector {
    async fn connect(
        &self,
        credentials: &Credentials,
        data_dir: &Path,
    ) -> Result<Arc<dyn BudgetClient>> {
        let client = ActualHttpClient::try_new(credentials, data_dir).await?;
        Ok(Arc::new(client))
    }
}

/// Token-authenticated client for one actual-server instance.
pub struct ActualHttpClient {
    client: reqwest::Client,
    url: Url,
    data_dir: PathBuf,
    /// Sync id of the downloaded budget, set by `download_budget`
    budget: RwLock<Option<String>>,
}

impl ActualHttpClient {
    /// Log in with the server password and build a token-bearing client.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid, the server is unreachable,
    /// or the password is rejected.
    pub async fn try_new(credentials: &Credentials, data_dir: &Path) -> Result<Self> {
        let url = Url::parse(&credentials.server_url)
            .wrap_err_with(|| format!("Invalid server URL: {}", credentials.server_url))?;

        log::debug!("Logging in to {url}");
        let response = reqwest::Client::new()
            .post(url.join("account/login")?)
            .json(&json!({"password": credentials.password}))
            .send()
            .await
            .wrap_err("Failed to reach Actual Budget server")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            eyre::bail!("Login failed ({status}): {body}");
        }

        let body: Value = response.json().await.wrap_err("Invalid login response")?;
        let token = body["data"]["token"]
            .as_str()
            .ok_or_else(|| eyre::eyre!("Login response carried no token"))?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(TOKEN_HEADER, token.parse()?);
        let client = reqwest::Client::builder().default_headers(headers).build()?;

        log::info!("Connected to Actual Budget server at {url}");
        Ok(Self {
            client,
            url,
            data_dir: data_dir.to_path_buf(),
            budget: RwLock::new(None),
        })
    }

    /// GET a `{data: ...}` envelope and deserialize its payload.
    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.client.get(self.url.join(path)?);
        let request = match self.budget.read().await.as_deref() {
            Some(sync_id) => request.header(FILE_HEADER, sync_id),
            None => request,
        };
        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            eyre::bail!("GET {path} failed ({status}): {body}");
        }
        let mut envelope: Value = response.json().await?;
        serde_json::from_value(envelope["data"].take())
            .wrap_err_with(|| format!("Unexpected payload from {path}"))
    }

    /// POST a JSON body scoped to the downloaded budget.
    async fn post_data(&self, path: &str, body: &Value) -> Result<Value> {
        let sync_id = self.budget_id().await?;
        let response = self
            .client
            .post(self.url.join(path)?)
            .header(FILE_HEADER, sync_id)
            .json(body)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            eyre::bail!("POST {path} failed ({status}): {body}");
        }
        Ok(response.json().await.unwrap_or(Value::Null))
    }

    async fn budget_id(&self) -> Result<String> {
        self.budget
            .read()
            .await
            .clone()
            .ok_or_else(|| eyre::eyre!("No budget downloaded; select a budget first"))
    }
}

#[async_trait]
impl BudgetClient for ActualHttpClient {
    async fn download_budget(&self, sync_id: &str) -> Result<()> {
        log::debug!("Downloading budget file {sync_id}");
        let response = self
            .client
            .get(self.url.join("sync/download-user-file")?)
            .header(FILE_HEADER, sync_id)
            .send()
            .await
            .wrap_err("Failed to download budget file")?;
        if !response.status().is_success() {
            let status = response.status();
            eyre::bail!("Budget download failed ({status})");
        }

        let bytes = response.bytes().await?;
        let path = self.data_dir.join(format!("{sync_id}.blob"));
        std::fs::write(&path, &bytes)
            .wrap_err_with(|| format!("Failed to cache budget file at {}", path.display()))?;

        *self.budget.write().await = Some(sync_id.to_string());
        log::info!("Downloaded budget {sync_id} ({} bytes)", bytes.len());
        Ok(())
    }

    async fn get_budgets(&self) -> Result<Vec<Budget>> {
        self.get_data("sync/list-user-files").await
    }

    async fn get_accounts(&self) -> Result<Vec<Account>> {
        self.get_data("data/accounts").await
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        self.get_data("data/categories").await
    }

    async fn get_payees(&self) -> Result<Vec<Payee>> {
        self.get_data("data/payees").await
    }

    async fn add_transactions(
        &self,
        account_id: &str,
        transactions: &[NewTransaction],
    ) -> Result<()> {
        log::debug!(
            "Adding {} transaction(s) to account {account_id}",
            transactions.len()
        );
        self.post_data(
            "data/transactions/add",
            &json!({"accountId": account_id, "transactions": transactions}),
        )
        .await?;
        Ok(())
    }

    async fn sync(&self) -> Result<()> {
        log::debug!("Syncing pending changes");
        self.post_data("sync/sync", &json!({})).await?;
        Ok(())
    }
}

impl std::fmt::Display for ActualHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn data_calls_require_a_downloaded_budget() {
        let client = ActualHttpClient {
            client: reqwest::Client::new(),
            url: Url::parse("http://localhost:5006").unwrap(),
            data_dir: std::env::temp_dir(),
            budget: RwLock::new(None),
        };
        let result = client.budget_id().await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No budget"));
    }
}
