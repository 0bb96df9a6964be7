//! Actual Budget workflow nodes
//!
//! A plugin package for a workflow-automation host: one credential
//! definition and two node definitions exposing the Actual Budget API as
//! drag-and-drop steps. The host renders the declarative metadata, calls
//! the option providers to fill dropdowns, and runs the nodes; a shared
//! [`session::Session`] makes sure the server connection and budget
//! download happen exactly once per process no matter how many of those
//! calls race.

pub mod client;
pub mod credentials;
pub mod host;
pub mod node;
pub mod options;
pub mod session;

// Re-exports for convenience
pub use client::{BudgetClient, Connector, HttpConnector};
pub use credentials::{CREDENTIAL_TYPE, Credentials};
pub use node::{BudgetNode, TransactionNode, WorkflowNode};
pub use options::OptionRecord;
pub use session::Session;
