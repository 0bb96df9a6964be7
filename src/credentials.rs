//! Credential definition for the Actual Budget server
//!
//! One host-managed credential record per server: the base URL and the
//! server password. The declarative schema tells the host what form to
//! render; [`Credentials`] is the resolved record handed to nodes.

use crate::host::{NodeProperty, PropertyKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credential type identifier nodes request from the host.
pub const CREDENTIAL_TYPE: &str = "actualBudgetApi";

/// Resolved credential record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub server_url: String,
    pub password: String,
}

/// Declarative credential-type schema for the host UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialType {
    pub name: String,
    pub display_name: String,
    pub documentation_url: String,
    pub properties: Vec<NodeProperty>,
}

/// The `actualBudgetApi` credential type.
pub fn credential_type() -> CredentialType {
    CredentialType {
        name: CREDENTIAL_TYPE.to_string(),
        display_name: "Actual Budget API".to_string(),
        documentation_url: "https://actualbudget.org/docs/api/".to_string(),
        properties: vec![
            NodeProperty::new("Server URL", "serverUrl", PropertyKind::String)
                .with_default(Value::String("http://localhost:5006".to_string()))
                .required(),
            NodeProperty::new("Password", "password", PropertyKind::String)
                .masked()
                .required(),
        ],
    }
}

impl Credentials {
    /// Parse a credential record from the host's JSON shape
    pub fn from_value(value: Value) -> eyre::Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| eyre::eyre!("Invalid actualBudgetApi credential record: {e}"))
    }
}
