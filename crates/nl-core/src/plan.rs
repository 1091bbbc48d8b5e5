//! Launch plan assembly.
//!
//! Runs the transformation components in their fixed order and packages the
//! result for the process launcher.

use crate::error::LaunchError;
use crate::load::load_document;
use nl_config::{
    expand_paths, expand_remappings, resolve_node, ExecutionOptions, PackageIndex, Remapping,
    REMAPPINGS_KEY,
};
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Everything the process launcher needs to start one node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeLaunchPlan {
    pub package: String,
    pub executable: String,
    pub namespace: String,
    pub name: String,

    /// The node's full parameter map with path URIs expanded. The reserved
    /// `ros_execution` and `ros_remappings` keys ride along unchanged.
    pub parameters: Mapping,

    pub remappings: Vec<Remapping>,
    pub output: String,
    pub emulate_tty: bool,
    pub respawn: bool,
    pub respawn_delay: f64,

    /// The launcher should bring the whole system down when this process
    /// exits. Event registration happens in the launcher, not here.
    pub shutdown_on_exit: bool,
}

/// Resolves a loaded document into a launch plan.
///
/// Steps, in order: locate the node and namespace, validate the execution
/// block, expand remappings, expand path URIs. Any failure aborts the whole
/// resolution; there is no partial success.
pub fn resolve_plan(
    document: &Value,
    index: &dyn PackageIndex,
) -> Result<NodeLaunchPlan, LaunchError> {
    let entry = resolve_node(document)?;
    debug!(namespace = %entry.namespace, node = %entry.name, "resolved node entry");

    let options = ExecutionOptions::from_parameters(&entry.parameters)?;

    let remappings = match entry.parameters.get(REMAPPINGS_KEY) {
        Some(spec) => expand_remappings(spec)?,
        None => Vec::new(),
    };

    let parameters = expand_paths(&entry.parameters, index)?;

    Ok(NodeLaunchPlan {
        package: options.node_package,
        executable: options.node_executable,
        namespace: entry.namespace,
        name: entry.name,
        parameters,
        remappings,
        output: options.output,
        emulate_tty: options.emulate_tty,
        respawn: options.respawn,
        respawn_delay: options.respawn_delay,
        shutdown_on_exit: options.shutdown_on_exit,
    })
}

/// Loads a document from disk and resolves it into a launch plan.
pub fn resolve_plan_from_path(
    path: &Path,
    index: &dyn PackageIndex,
) -> Result<NodeLaunchPlan, LaunchError> {
    let document = load_document(path)?;
    resolve_plan(&document, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl_config::StaticPackageIndex;

    fn doc(text: &str) -> Value {
        serde_yaml::from_str(text).expect("test document parses")
    }

    #[test]
    fn test_plan_carries_execution_defaults() {
        let plan = resolve_plan(
            &doc("node:\n  ros__parameters:\n    ros_execution:\n      node_package: p\n      \
                  node_executable: e\n"),
            &StaticPackageIndex::new(),
        )
        .expect("resolves");
        assert_eq!(plan.package, "p");
        assert_eq!(plan.executable, "e");
        assert_eq!(plan.namespace, "");
        assert_eq!(plan.name, "node");
        assert_eq!(plan.output, "screen");
        assert!(plan.remappings.is_empty());
        assert!(!plan.shutdown_on_exit);
    }

    #[test]
    fn test_missing_execution_block_fails() {
        let err = resolve_plan(
            &doc("node:\n  ros__parameters:\n    a: 1\n"),
            &StaticPackageIndex::new(),
        )
        .expect_err("no execution block");
        assert_eq!(err.code(), 20);
    }

    #[test]
    fn test_null_remapping_spec_yields_no_remappings() {
        let plan = resolve_plan(
            &doc("node:\n  ros__parameters:\n    ros_execution:\n      node_package: p\n      \
                  node_executable: e\n    ros_remappings:\n"),
            &StaticPackageIndex::new(),
        )
        .expect("resolves");
        assert!(plan.remappings.is_empty());
    }

    #[test]
    fn test_plan_serializes_to_json() {
        let plan = resolve_plan(
            &doc("node:\n  ros__parameters:\n    ros_execution:\n      node_package: p\n      \
                  node_executable: e\n"),
            &StaticPackageIndex::new(),
        )
        .expect("resolves");
        let json = serde_json::to_string(&plan).expect("serializes");
        assert!(json.contains("\"namespace\":\"\""));
        assert!(json.contains("\"package\":\"p\""));
    }
}
