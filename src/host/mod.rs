//! Host-facing surface
//!
//! Everything the workflow-automation host touches when it loads this
//! plugin: the execution context it hands to nodes, the declarative
//! property metadata it renders as UI, and the execution-data shapes it
//! passes between workflow steps.

mod context;
mod data;
mod properties;

pub use context::{NodeContext, StaticContext};
pub use data::{ExecutionData, ExecutionResult};
pub use properties::{
    DisplayOptions, NodeProperty, PropertyKind, PropertyOption, TypeOptions,
};
