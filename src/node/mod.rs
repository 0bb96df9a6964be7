//! Workflow node definitions
//!
//! Two nodes share one [`Session`]: the budget node (pick and pass
//! through) and the transaction node (create transactions). Each node is
//! a [`WorkflowNode`]: declarative metadata the host renders, a
//! load-options dispatcher for its dropdowns, and an async execute entry
//! point.

mod budget;
mod transaction;

pub use budget::BudgetNode;
pub use transaction::{Operation, TransactionNode, build_transaction};

use crate::host::{ExecutionResult, NodeContext, NodeProperty, PropertyKind, PropertyOption};
use crate::options::OptionRecord;
use async_trait::async_trait;
use eyre::Result;
use serde::Serialize;

/// A node the host can render and run.
#[async_trait]
pub trait WorkflowNode: Send + Sync {
    /// Declarative metadata: identity, credentials, properties
    fn description(&self) -> &NodeDescription;

    /// Populate an options dropdown by load-options method name.
    ///
    /// Unknown method names log a warning and produce an empty dropdown,
    /// matching the soft-fail policy of the providers themselves.
    async fn load_options(&self, method: &str, ctx: &dyn NodeContext) -> Vec<OptionRecord>;

    /// Run the node against the given execution context
    async fn execute(&self, ctx: &dyn NodeContext) -> Result<ExecutionResult>;
}

/// Declarative node metadata, serialized to JSON for the host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: String,
    pub name: String,
    pub group: Vec<String>,
    pub version: u32,
    pub description: String,
    pub defaults: NodeDefaults,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub usable_as_tool: bool,
    pub credentials: Vec<CredentialRequirement>,
    pub properties: Vec<NodeProperty>,
}

/// Defaults applied when a node is dropped onto the canvas.
#[derive(Debug, Clone, Serialize)]
pub struct NodeDefaults {
    pub name: String,
}

/// A credential type a node needs before it can run.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialRequirement {
    pub name: String,
    pub required: bool,
}

impl CredentialRequirement {
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: true,
        }
    }
}

/// Budget picker shared by both nodes.
pub(crate) fn budget_id_property() -> NodeProperty {
    NodeProperty::new("Budget Name or ID", "budgetId", PropertyKind::Options)
        .with_description("Choose from the list, or specify an ID using an expression")
        .load_options("getBudgets")
        .required()
}

/// Operation selector for the transaction node.
pub(crate) fn operation_property() -> NodeProperty {
    NodeProperty::new("Operation", "operation", PropertyKind::Options)
        .no_data_expression()
        .with_options(vec![
            PropertyOption::new("List", "list")
                .with_description("List objects")
                .with_action("List objects"),
            PropertyOption::new("Create", "create")
                .with_description("Create a new object")
                .with_action("Create a new object"),
            PropertyOption::new("Update", "update")
                .with_description("Update a object")
                .with_action("Update a object"),
            PropertyOption::new("Delete", "delete")
                .with_description("Delete a object")
                .with_action("Delete a object"),
        ])
        .with_default(serde_json::Value::String("list".to_string()))
        .required()
}
