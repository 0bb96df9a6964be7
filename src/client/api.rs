//! Remote collaborator traits
//!
//! [`BudgetClient`] is the seam between the workflow nodes and the Actual
//! Budget client library. The wire protocol, authentication handshake, and
//! local cache format all live behind it; the nodes only ever see these
//! calls. [`Connector`] produces a ready client from credentials, which is
//! what lets the session layer be tested with spies.

use super::types::{Account, Budget, Category, NewTransaction, Payee};
use crate::credentials::Credentials;
use async_trait::async_trait;
use eyre::Result;
use std::path::Path;
use std::sync::Arc;

/// Read and write access to a connected Actual Budget instance.
///
/// All read accessors require a prior [`BudgetClient::download_budget`]
/// call; the session layer guarantees that ordering.
#[async_trait]
pub trait BudgetClient: Send + Sync {
    /// Download the budget with the given sync group id into the local cache
    async fn download_budget(&self, sync_id: &str) -> Result<()>;

    /// List budget files known to the server
    async fn get_budgets(&self) -> Result<Vec<Budget>>;

    /// List accounts in the downloaded budget
    async fn get_accounts(&self) -> Result<Vec<Account>>;

    /// List categories in the downloaded budget
    async fn get_categories(&self) -> Result<Vec<Category>>;

    /// List payees in the downloaded budget
    async fn get_payees(&self) -> Result<Vec<Payee>>;

    /// Add transactions to an account
    async fn add_transactions(
        &self,
        account_id: &str,
        transactions: &[NewTransaction],
    ) -> Result<()>;

    /// Push pending local changes to the server
    async fn sync(&self) -> Result<()>;
}

/// Factory that performs the initial connection handshake.
///
/// Implementations own the `init` step of the remote client: given
/// credentials and a scratch directory for the local cache, return a
/// client that is ready for [`BudgetClient::download_budget`].
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        credentials: &Credentials,
        data_dir: &Path,
    ) -> Result<Arc<dyn BudgetClient>>;
}
