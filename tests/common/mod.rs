//! Shared mock collaborators for integration tests
#![allow(dead_code)]

use actual_budget_node::client::{
    Account, Budget, BudgetClient, BudgetState, Category, Connector, NewTransaction, Payee,
};
use actual_budget_node::credentials::Credentials;
use async_trait::async_trait;
use eyre::Result;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn test_credentials() -> Credentials {
    Credentials {
        server_url: "http://localhost:5006".to_string(),
        password: "hunter2".to_string(),
    }
}

/// In-memory stand-in for the remote client, with call counters.
#[derive(Default)]
pub struct MockClient {
    pub budgets: Vec<Budget>,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub payees: Vec<Payee>,
    /// Make every read accessor fail
    pub fail_reads: bool,
    pub downloads: AtomicUsize,
    pub syncs: AtomicUsize,
    pub added: Mutex<Vec<(String, Vec<NewTransaction>)>>,
}

impl MockClient {
    pub fn with_budgets(budgets: Vec<Budget>) -> Self {
        Self {
            budgets,
            ..Self::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    fn check_reads(&self) -> Result<()> {
        if self.fail_reads {
            eyre::bail!("Remote read failed");
        }
        Ok(())
    }
}

#[async_trait]
impl BudgetClient for MockClient {
    async fn download_budget(&self, _sync_id: &str) -> Result<()> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get_budgets(&self) -> Result<Vec<Budget>> {
        self.check_reads()?;
        Ok(self.budgets.clone())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>> {
        self.check_reads()?;
        Ok(self.accounts.clone())
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        self.check_reads()?;
        Ok(self.categories.clone())
    }

    async fn get_payees(&self) -> Result<Vec<Payee>> {
        self.check_reads()?;
        Ok(self.payees.clone())
    }

    async fn add_transactions(
        &self,
        account_id: &str,
        transactions: &[NewTransaction],
    ) -> Result<()> {
        self.added
            .lock()
            .unwrap()
            .push((account_id.to_string(), transactions.to_vec()));
        Ok(())
    }

    async fn sync(&self) -> Result<()> {
        self.syncs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Connector handing out one shared [`MockClient`].
pub struct MockConnector {
    pub client: Arc<MockClient>,
    pub connects: AtomicUsize,
    pub fail: bool,
}

impl MockConnector {
    pub fn new(client: MockClient) -> Self {
        Self {
            client: Arc::new(client),
            connects: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(MockClient::default())
        }
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(
        &self,
        _credentials: &Credentials,
        _data_dir: &Path,
    ) -> Result<Arc<dyn BudgetClient>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            eyre::bail!("Connection refused");
        }
        Ok(self.client.clone() as Arc<dyn BudgetClient>)
    }
}

pub fn budget(name: &str, group_id: &str, state: BudgetState) -> Budget {
    Budget {
        name: name.to_string(),
        group_id: group_id.to_string(),
        state,
    }
}

pub fn account(id: &str, name: &str) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        offbudget: false,
        closed: false,
    }
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        group_id: None,
        is_income: false,
    }
}

pub fn payee(id: &str, name: &str, transfer_acct: Option<&str>) -> Payee {
    Payee {
        id: id.to_string(),
        name: name.to_string(),
        transfer_acct: transfer_acct.map(|a| a.to_string()),
    }
}
