//! Node launch configuration resolution.
//!
//! Resolves a hierarchical single-node configuration document into the
//! pieces a process launcher consumes:
//! - a namespace derived from the document's nesting chain
//! - a validated parameter map with path URIs expanded to filesystem paths
//! - an explicit, ordered list of endpoint remappings
//!
//! The three transformations are independent and composable. Orchestration
//! (document loading, the filesystem-backed package index, launch-plan
//! assembly, CLI) lives in nl-core.

pub mod error;
pub mod execution;
pub mod namespace;
pub mod paths;
pub mod remap;

pub use error::{Error, Result};
pub use execution::ExecutionOptions;
pub use namespace::{resolve_node, NodeEntry};
pub use paths::{expand_paths, PackageIndex, StaticPackageIndex};
pub use remap::{expand_remappings, Remapping, ACTION_SUFFIXES};

/// Reserved key marking a node's parameter block.
pub const PARAMETER_BLOCK_KEY: &str = "ros__parameters";

/// Reserved parameter key holding the execution options.
pub const EXECUTION_KEY: &str = "ros_execution";

/// Reserved parameter key holding the remapping spec.
pub const REMAPPINGS_KEY: &str = "ros_remappings";

/// Short name for a YAML value's kind, used in error messages.
pub(crate) fn value_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a list",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
