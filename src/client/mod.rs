//! Remote collaborator seam
//!
//! The [`BudgetClient`] trait is everything the nodes know about the
//! Actual Budget client; [`HttpConnector`] provides the real
//! implementation, tests provide spies.

mod api;
mod http;
mod types;

pub use api::{BudgetClient, Connector};
pub use http::{ActualHttpClient, HttpConnector};
pub use types::{Account, Budget, BudgetState, Category, NewTransaction, Payee};
