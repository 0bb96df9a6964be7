//! Entity types returned by the Actual Budget API
//!
//! These mirror the shapes the remote client hands back for budgets,
//! accounts, categories, and payees, plus the transaction record shape
//! accepted by the create call.

use serde::{Deserialize, Serialize};

/// Sync state of a budget file on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetState {
    /// Budget exists only in a local cache and has never been synced
    Local,
    /// Budget is synced with the server and selectable for download
    Remote,
    /// Anything the server reports that we don't recognize
    #[serde(other)]
    Unknown,
}

/// A budget file known to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub name: String,
    /// Sync group identifier, used as the budget's selection value
    #[serde(rename = "groupId")]
    pub group_id: String,
    pub state: BudgetState,
}

/// An account within the downloaded budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub offbudget: bool,
    #[serde(default)]
    pub closed: bool,
}

/// A spending category within the downloaded budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub is_income: bool,
}

/// A payee within the downloaded budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payee {
    pub id: String,
    pub name: String,
    /// Set when this payee represents a transfer to another account
    #[serde(default)]
    pub transfer_acct: Option<String>,
}

/// A transaction record to submit via the add-transactions call.
///
/// `payee` and `payee_name` are mutually exclusive: a known payee is
/// referenced by id, a new payee is created from the free-text name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub account: String,
    /// Transaction date in `YYYY-MM-DD` format
    pub date: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn budget_state_deserializes_unknown_values() {
        let budget: Budget = serde_json::from_value(json!({
            "name": "Household",
            "groupId": "abc-123",
            "state": "broken"
        }))
        .unwrap();
        assert_eq!(budget.state, BudgetState::Unknown);

        let budget: Budget = serde_json::from_value(json!({
            "name": "Household",
            "groupId": "abc-123",
            "state": "remote"
        }))
        .unwrap();
        assert_eq!(budget.state, BudgetState::Remote);
    }

    #[test]
    fn new_transaction_skips_absent_fields() {
        let transaction = NewTransaction {
            account: "acct-1".to_string(),
            date: "2024-02-29".to_string(),
            amount: -12.5,
            payee: None,
            payee_name: Some("Coffee Shop".to_string()),
            category: None,
            notes: None,
        };
        let value = serde_json::to_value(&transaction).unwrap();
        assert_eq!(
            value,
            json!({
                "account": "acct-1",
                "date": "2024-02-29",
                "amount": -12.5,
                "payee_name": "Coffee Shop"
            })
        );
    }
}
