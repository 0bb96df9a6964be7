//! Transaction node
//!
//! Creates transactions in the downloaded budget. The `operation`
//! parameter selects between list/create/update/delete, but only create
//! is implemented; the others return error-shaped payloads so the
//! workflow keeps running instead of aborting.

use super::{
    CredentialRequirement, NodeDefaults, NodeDescription, WorkflowNode, budget_id_property,
    operation_property,
};
use crate::client::NewTransaction;
use crate::credentials::CREDENTIAL_TYPE;
use crate::host::{ExecutionData, ExecutionResult, NodeContext, NodeProperty, PropertyKind};
use crate::options::{
    OptionRecord, account_options, budget_options, category_options, payee_options,
};
use crate::session::Session;
use async_trait::async_trait;
use eyre::Result;
use regex::Regex;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

/// Strict `YYYY-MM-DD`: month 01-12, day 01-31, no calendar check beyond
/// that.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").expect("valid date pattern")
});

/// UUID v1-v5 textual form, case-insensitive.
static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("valid uuid pattern")
});

/// Operation selected by the node's discriminator parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl FromStr for Operation {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(Self::List),
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => eyre::bail!("Unsupported operation '{other}'"),
        }
    }
}

impl Operation {
    fn label(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }
}

pub struct TransactionNode {
    session: Arc<Session>,
    description: NodeDescription,
}

impl TransactionNode {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            description: description(),
        }
    }

    async fn create(&self, ctx: &dyn NodeContext) -> Result<ExecutionResult> {
        let client = self.session.ensure_ready(ctx).await?;
        let transaction = build_transaction(ctx);
        let account = transaction.account.clone();
        client.add_transactions(&account, &[transaction]).await?;
        client.sync().await?;
        Ok(vec![vec![ExecutionData::success()]])
    }
}

fn description() -> NodeDescription {
    NodeDescription {
        display_name: "Actual Budget Transaction".to_string(),
        name: "actualBudgetTransactionNode".to_string(),
        group: vec!["transform".to_string()],
        version: 1,
        description: "Actual Budget API integration for listing and creating transactions"
            .to_string(),
        defaults: NodeDefaults {
            name: "Actual Budget Transaction".to_string(),
        },
        inputs: vec!["main".to_string()],
        outputs: vec!["main".to_string()],
        usable_as_tool: true,
        credentials: vec![CredentialRequirement::required(CREDENTIAL_TYPE)],
        properties: vec![
            budget_id_property(),
            operation_property(),
            NodeProperty::new("Transaction ID", "transactionId", PropertyKind::String)
                .with_description("ID of the transaction to update or delete")
                .show_when("operation", &["update", "delete"]),
            NodeProperty::new("Account Name or ID", "accountId", PropertyKind::Options)
                .with_description("ID of the account for the transaction")
                .load_options("getAccounts")
                .show_when("operation", &["create", "update"]),
            NodeProperty::new("Date", "date", PropertyKind::String)
                .with_description(
                    "Date of the transaction in YYYY-MM-DD format. Defaults to today if not provided.",
                )
                .show_when("operation", &["create", "update"]),
            NodeProperty::new("Amount", "amount", PropertyKind::Number)
                .with_default(serde_json::json!(0))
                .with_description("Amount of the transaction")
                .show_when("operation", &["create", "update"]),
            NodeProperty::new("Notes", "notes", PropertyKind::String)
                .with_description("Description of the transaction")
                .show_when("operation", &["create", "update"]),
            NodeProperty::new("Category Name or ID", "categoryId", PropertyKind::Options)
                .with_description("ID of the category for the transaction")
                .load_options("getCategories")
                .show_when("operation", &["create", "update"]),
            NodeProperty::new("Payee Name or ID", "payeeId", PropertyKind::Options)
                .with_description("ID of the payee for the transaction")
                .load_options("getPayees")
                .show_when("operation", &["create", "update"]),
        ],
    }
}

#[async_trait]
impl WorkflowNode for TransactionNode {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    async fn load_options(&self, method: &str, ctx: &dyn NodeContext) -> Vec<OptionRecord> {
        match method {
            "getBudgets" => budget_options(&self.session, ctx).await,
            "getAccounts" => account_options(&self.session, ctx).await,
            "getCategories" => category_options(&self.session, ctx).await,
            "getPayees" => payee_options(&self.session, ctx).await,
            other => {
                log::warn!("Unknown load-options method '{other}' on transaction node");
                Vec::new()
            }
        }
    }

    async fn execute(&self, ctx: &dyn NodeContext) -> Result<ExecutionResult> {
        let operation: Operation = ctx
            .string_parameter("operation", 0)
            .unwrap_or_default()
            .parse()?;
        match operation {
            Operation::Create => self.create(ctx).await,
            // Deliberately data-level errors, not faults: the workflow
            // continues and downstream steps see the payload
            unimplemented => Ok(vec![vec![ExecutionData::error(format!(
                "{} operation is not implemented yet",
                unimplemented.label()
            ))]]),
        }
    }
}

/// Map the node's flat parameters into a transaction record.
///
/// The date falls back to today when missing or malformed. The payee
/// parameter is a single string that is either a payee id (UUID form) or
/// free text; free text routes to `payee_name` so the remote client
/// creates the payee.
pub fn build_transaction(ctx: &dyn NodeContext) -> NewTransaction {
    let account = ctx.string_parameter("accountId", 0).unwrap_or_default();
    let date = match ctx.string_parameter("date", 0) {
        Some(date) if is_date(&date) => date,
        _ => chrono::Local::now().format("%Y-%m-%d").to_string(),
    };
    let amount = ctx.number_parameter("amount", 0).unwrap_or(0.0);
    let notes = ctx.string_parameter("notes", 0).filter(|n| !n.is_empty());
    let category = ctx
        .string_parameter("categoryId", 0)
        .filter(|c| !c.is_empty());

    let (payee, payee_name) = match ctx.string_parameter("payeeId", 0).filter(|p| !p.is_empty()) {
        Some(value) if is_uuid(&value) => (Some(value), None),
        Some(value) => (None, Some(value)),
        None => (None, None),
    };

    NewTransaction {
        account,
        date,
        amount,
        payee,
        payee_name,
        category,
        notes,
    }
}

fn is_date(value: &str) -> bool {
    DATE_PATTERN.is_match(value)
}

fn is_uuid(value: &str) -> bool {
    UUID_PATTERN.is_match(value)
}
