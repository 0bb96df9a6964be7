//! Lazy remote-session initialization
//!
//! Connecting to the Actual Budget server and downloading a budget
//! snapshot are both expensive, and the host fires several option lookups
//! in parallel while a user edits a node. [`Session`] guarantees each
//! happens at most once: the first caller starts the work, every caller
//! (concurrent or later) awaits the same attempt and observes the same
//! settled outcome — success or failure.

use crate::client::{BudgetClient, Connector};
use crate::credentials::CREDENTIAL_TYPE;
use crate::host::NodeContext;
use eyre::Result;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// A settled session failure, replayed to every caller.
///
/// `eyre::Report` is not `Clone`, so the memoization slots store the
/// original failure behind an `Arc` and hand each caller this wrapper.
#[derive(Debug, Clone)]
pub struct SessionError(Arc<eyre::Report>);

impl SessionError {
    fn new(report: eyre::Report) -> Self {
        Self(Arc::new(report))
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.0)
    }
}

impl std::error::Error for SessionError {}

/// Parameter holding the budget sync id to download.
const BUDGET_ID_PARAMETER: &str = "budgetId";

/// Memoized connect-and-download state for one host process.
///
/// Holds two independent slots: the connection attempt and the budget
/// download attempt. Connect strictly precedes download, and a settled
/// failure is permanent for the life of the session — there is no retry.
///
/// The host constructs one `Session` and shares it (via `Arc`) between
/// every node that talks to the same server.
pub struct Session {
    connector: Arc<dyn Connector>,
    data_dir: PathBuf,
    connect: OnceCell<Result<Arc<dyn BudgetClient>, SessionError>>,
    download: OnceCell<Result<(), SessionError>>,
}

impl Session {
    /// Create a session using the process temp directory for the local
    /// budget cache
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self::with_data_dir(connector, std::env::temp_dir())
    }

    /// Create a session with an explicit local cache directory
    pub fn with_data_dir(connector: Arc<dyn Connector>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            connector,
            data_dir: data_dir.into(),
            connect: OnceCell::new(),
            download: OnceCell::new(),
        }
    }

    /// Connect and download exactly once, then return the ready client.
    ///
    /// The first caller reads credentials from `ctx` and starts the
    /// connect attempt; once that settles successfully, the first caller
    /// past that point reads the `budgetId` parameter (item 0) and starts
    /// the download. An absent or empty `budgetId` skips the download and
    /// is recorded as success.
    ///
    /// Concurrent callers converge on the same in-flight work; no caller
    /// triggers a second connect or download, even after a failure.
    pub async fn ensure_ready(&self, ctx: &dyn NodeContext) -> Result<Arc<dyn BudgetClient>> {
        let connected = self
            .connect
            .get_or_init(|| async {
                log::debug!("Starting Actual Budget connection");
                let attempt = async {
                    let credentials = ctx.credentials(CREDENTIAL_TYPE).await?;
                    self.connector.connect(&credentials, &self.data_dir).await
                };
                attempt.await.map_err(SessionError::new)
            })
            .await;
        let client = connected.clone()?;

        let downloaded = self
            .download
            .get_or_init(|| async {
                let budget_id = ctx
                    .string_parameter(BUDGET_ID_PARAMETER, 0)
                    .filter(|id| !id.is_empty());
                match budget_id {
                    Some(sync_id) => {
                        log::debug!("Downloading budget {sync_id}");
                        client.download_budget(&sync_id).await.map_err(SessionError::new)
                    }
                    None => {
                        log::debug!("No budgetId parameter set, skipping budget download");
                        Ok(())
                    }
                }
            })
            .await;
        downloaded.clone()?;

        Ok(client)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("data_dir", &self.data_dir)
            .field("connected", &self.connect.initialized())
            .field("downloaded", &self.download.initialized())
            .finish()
    }
}
