//! Declarative property metadata
//!
//! Nodes and credential types describe their UI as a list of
//! [`NodeProperty`] records; the host serializes them to JSON and renders
//! the matching form controls. Nothing here executes — it is schema only.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Control type a property renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    String,
    Number,
    /// Selection dropdown, populated statically or by a load-options method
    Options,
}

/// Extra rendering hints for a property.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeOptions {
    /// Name of the node method that populates an options dropdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_options_method: Option<String>,
    /// Mask the input as a password field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<bool>,
}

/// One static choice in an options dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyOption {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl PropertyOption {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            description: None,
            action: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }
}

/// Conditions controlling when a property is shown.
///
/// `show` maps a parameter name to the values that make this property
/// visible, e.g. only show `transactionId` when `operation` is `update`
/// or `delete`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplayOptions {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub show: BTreeMap<String, Vec<Value>>,
}

impl DisplayOptions {
    /// Show only when `parameter` holds one of `values`
    pub fn show_when(parameter: &str, values: &[&str]) -> Self {
        let mut show = BTreeMap::new();
        show.insert(
            parameter.to_string(),
            values.iter().map(|v| Value::String(v.to_string())).collect(),
        );
        Self { show }
    }
}

/// A single field in a node or credential form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub no_data_expression: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_options: Option<TypeOptions>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl NodeProperty {
    /// Create a property with the given control type and empty default
    pub fn new(display_name: &str, name: &str, kind: PropertyKind) -> Self {
        Self {
            display_name: display_name.to_string(),
            name: name.to_string(),
            kind,
            default: Value::String(String::new()),
            description: None,
            required: false,
            no_data_expression: false,
            type_options: None,
            options: Vec::new(),
            display_options: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = default;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn no_data_expression(mut self) -> Self {
        self.no_data_expression = true;
        self
    }

    /// Populate an options dropdown from a node load-options method
    pub fn load_options(mut self, method: &str) -> Self {
        self.type_options = Some(TypeOptions {
            load_options_method: Some(method.to_string()),
            password: None,
        });
        self
    }

    /// Mask the field as a password input
    pub fn masked(mut self) -> Self {
        self.type_options = Some(TypeOptions {
            load_options_method: None,
            password: Some(true),
        });
        self
    }

    pub fn with_options(mut self, options: Vec<PropertyOption>) -> Self {
        self.options = options;
        self
    }

    pub fn show_when(mut self, parameter: &str, values: &[&str]) -> Self {
        self.display_options = Some(DisplayOptions::show_when(parameter, values));
        self
    }
}
