//! Execution context handed to nodes by the host
//!
//! The host resolves credentials and parameter expressions before a node
//! runs; nodes only read the resolved values through [`NodeContext`].

use crate::credentials::Credentials;
use async_trait::async_trait;
use eyre::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Access to resolved credentials, parameters, and input items.
///
/// Implemented by the host adapter; [`StaticContext`] is a ready-made
/// implementation over already-resolved values.
#[async_trait]
pub trait NodeContext: Send + Sync {
    /// Look up the credential record of the given type
    async fn credentials(&self, credential_type: &str) -> Result<Credentials>;

    /// Read a node parameter for the given input item, if set
    fn parameter(&self, name: &str, item_index: usize) -> Option<Value>;

    /// Input items flowing into the node from the previous step
    fn input(&self) -> &[Value];

    /// Read a parameter as a string, coercing scalars
    fn string_parameter(&self, name: &str, item_index: usize) -> Option<String> {
        match self.parameter(name, item_index)? {
            Value::String(s) => Some(s),
            Value::Null => None,
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Read a parameter as a number
    fn number_parameter(&self, name: &str, item_index: usize) -> Option<f64> {
        self.parameter(name, item_index)?.as_f64()
    }
}

/// A [`NodeContext`] over pre-resolved values.
///
/// Host adapters that materialize parameters up front can hand nodes one
/// of these; tests use it the same way.
///
/// # Example
/// ```
/// use actual_budget_node::host::{NodeContext, StaticContext};
/// use actual_budget_node::credentials::Credentials;
/// use serde_json::json;
///
/// let ctx = StaticContext::new(Credentials {
///     server_url: "http://localhost:5006".to_string(),
///     password: "hunter2".to_string(),
/// })
/// .with_parameter("budgetId", json!("abc-123"));
///
/// assert_eq!(ctx.string_parameter("budgetId", 0).as_deref(), Some("abc-123"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticContext {
    credentials: Option<Credentials>,
    parameters: HashMap<String, Value>,
    input: Vec<Value>,
}

impl StaticContext {
    /// Create a context carrying the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
            parameters: HashMap::new(),
            input: Vec::new(),
        }
    }

    /// Create a context with no credential record.
    ///
    /// Credential lookups will fail, which is how a misconfigured host
    /// behaves.
    pub fn without_credentials() -> Self {
        Self::default()
    }

    /// Set a parameter value
    pub fn with_parameter(mut self, name: &str, value: Value) -> Self {
        self.parameters.insert(name.to_string(), value);
        self
    }

    /// Set the input items
    pub fn with_input(mut self, input: Vec<Value>) -> Self {
        self.input = input;
        self
    }
}

#[async_trait]
impl NodeContext for StaticContext {
    async fn credentials(&self, credential_type: &str) -> Result<Credentials> {
        self.credentials.clone().ok_or_else(|| {
            eyre::eyre!("No credentials of type '{}' configured", credential_type)
        })
    }

    fn parameter(&self, name: &str, _item_index: usize) -> Option<Value> {
        self.parameters.get(name).cloned()
    }

    fn input(&self) -> &[Value] {
        &self.input
    }
}
