//! Budget node
//!
//! A minimal node exposing the budget picker. Execution passes the input
//! items through untouched; the node exists so workflows can reference a
//! budget selection and so its dropdown exercises the shared session.

use super::{CredentialRequirement, NodeDefaults, NodeDescription, WorkflowNode, budget_id_property};
use crate::credentials::CREDENTIAL_TYPE;
use crate::host::{ExecutionData, ExecutionResult, NodeContext};
use crate::options::{OptionRecord, budget_options};
use crate::session::Session;
use async_trait::async_trait;
use eyre::Result;
use std::sync::Arc;

pub struct BudgetNode {
    session: Arc<Session>,
    description: NodeDescription,
}

impl BudgetNode {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            description: description(),
        }
    }
}

fn description() -> NodeDescription {
    NodeDescription {
        display_name: "Actual Budget".to_string(),
        name: "actualBudgetNode".to_string(),
        group: vec!["transform".to_string()],
        version: 1,
        description: "Actual Budget API integration".to_string(),
        defaults: NodeDefaults {
            name: "Actual Budget".to_string(),
        },
        inputs: vec!["main".to_string()],
        outputs: vec!["main".to_string()],
        usable_as_tool: true,
        credentials: vec![CredentialRequirement::required(CREDENTIAL_TYPE)],
        properties: vec![budget_id_property()],
    }
}

#[async_trait]
impl WorkflowNode for BudgetNode {
    fn description(&self) -> &NodeDescription {
        &self.description
    }

    async fn load_options(&self, method: &str, ctx: &dyn NodeContext) -> Vec<OptionRecord> {
        match method {
            "getBudgets" => budget_options(&self.session, ctx).await,
            other => {
                log::warn!("Unknown load-options method '{other}' on budget node");
                Vec::new()
            }
        }
    }

    async fn execute(&self, ctx: &dyn NodeContext) -> Result<ExecutionResult> {
        let items = ctx
            .input()
            .iter()
            .map(|json| ExecutionData::from_json(json.clone()))
            .collect();
        Ok(vec![items])
    }
}
