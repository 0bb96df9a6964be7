//! Option providers for selection dropdowns
//!
//! The host calls these to populate the budget, account, category, and
//! payee pickers while a user edits a node. Each provider waits for the
//! shared session, reads one accessor, and normalizes the entities into
//! `{name, value}` records.
//!
//! Providers fail soft: any error — a bad password, an unreachable
//! server, a failed download — is logged and rendered as an empty
//! dropdown. The host tolerates an empty list; it would not tolerate a
//! thrown fault during UI rendering.

use crate::client::BudgetState;
use crate::host::NodeContext;
use crate::session::Session;
use eyre::Result;
use serde::Serialize;

/// A display-name/identifier pair for a selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionRecord {
    pub name: String,
    pub value: String,
}

impl OptionRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Synthetic record letting the user opt out of a selection
    fn none_sentinel(label: &str) -> Self {
        Self::new(label, "")
    }
}

/// Budgets selectable for download.
///
/// Only server-synced budgets are offered; local-only budgets cannot be
/// downloaded by id and are filtered out.
pub async fn budget_options(session: &Session, ctx: &dyn NodeContext) -> Vec<OptionRecord> {
    soft_fail("getBudgets", load_budgets(session, ctx).await)
}

/// Accounts in the downloaded budget, plus a "No account" sentinel.
pub async fn account_options(session: &Session, ctx: &dyn NodeContext) -> Vec<OptionRecord> {
    soft_fail("getAccounts", load_accounts(session, ctx).await)
}

/// Categories in the downloaded budget, plus a "No category" sentinel.
pub async fn category_options(session: &Session, ctx: &dyn NodeContext) -> Vec<OptionRecord> {
    soft_fail("getCategories", load_categories(session, ctx).await)
}

/// Payees in the downloaded budget, plus a "No payee" sentinel.
///
/// Transfer payees are labeled `Transfer: <name>` so they stand apart
/// from regular payees in the dropdown.
pub async fn payee_options(session: &Session, ctx: &dyn NodeContext) -> Vec<OptionRecord> {
    soft_fail("getPayees", load_payees(session, ctx).await)
}

/// Convert provider errors into an empty dropdown.
fn soft_fail(method: &str, result: Result<Vec<OptionRecord>>) -> Vec<OptionRecord> {
    match result {
        Ok(records) => records,
        Err(error) => {
            log::warn!("{method} failed, returning no options: {error:#}");
            Vec::new()
        }
    }
}

async fn load_budgets(session: &Session, ctx: &dyn NodeContext) -> Result<Vec<OptionRecord>> {
    let client = session.ensure_ready(ctx).await?;
    let budgets = client.get_budgets().await?;
    Ok(budgets
        .into_iter()
        .filter(|budget| budget.state == BudgetState::Remote)
        .map(|budget| OptionRecord::new(budget.name, budget.group_id))
        .collect())
}

async fn load_accounts(session: &Session, ctx: &dyn NodeContext) -> Result<Vec<OptionRecord>> {
    let client = session.ensure_ready(ctx).await?;
    let accounts = client.get_accounts().await?;
    let mut records: Vec<_> = accounts
        .into_iter()
        .map(|account| OptionRecord::new(account.name, account.id))
        .collect();
    records.push(OptionRecord::none_sentinel("No account"));
    Ok(records)
}

async fn load_categories(session: &Session, ctx: &dyn NodeContext) -> Result<Vec<OptionRecord>> {
    let client = session.ensure_ready(ctx).await?;
    let categories = client.get_categories().await?;
    let mut records: Vec<_> = categories
        .into_iter()
        .map(|category| OptionRecord::new(category.name, category.id))
        .collect();
    records.push(OptionRecord::none_sentinel("No category"));
    Ok(records)
}

async fn load_payees(session: &Session, ctx: &dyn NodeContext) -> Result<Vec<OptionRecord>> {
    let client = session.ensure_ready(ctx).await?;
    let payees = client.get_payees().await?;
    let mut records: Vec<_> = payees
        .into_iter()
        .map(|payee| {
            let name = match payee.transfer_acct {
                Some(_) => format!("Transfer: {}", payee.name),
                None => payee.name,
            };
            OptionRecord::new(name, payee.id)
        })
        .collect();
    records.push(OptionRecord::none_sentinel("No payee"));
    Ok(records)
}
