//! Execution options read from a node's parameter map.

use crate::error::{Error, Result};
use crate::EXECUTION_KEY;
use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// Options from the `ros_execution` block, controlling how the launcher
/// runs the node's process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOptions {
    /// Package providing the executable. Required, non-empty.
    #[serde(default)]
    pub node_package: String,

    /// Executable name inside the package. Required, non-empty.
    #[serde(default)]
    pub node_executable: String,

    /// Output handling for the launched process.
    #[serde(default = "default_output")]
    pub output: String,

    /// Allocate a pseudo-terminal for the process.
    #[serde(default)]
    pub emulate_tty: bool,

    /// Restart the process when it exits.
    #[serde(default)]
    pub respawn: bool,

    /// Delay in seconds before a respawn.
    #[serde(default)]
    pub respawn_delay: f64,

    /// Ask the launcher to shut the whole system down when this process
    /// exits.
    #[serde(default, alias = "on_node_exit_shutdown_system")]
    pub shutdown_on_exit: bool,
}

fn default_output() -> String {
    "screen".to_string()
}

impl ExecutionOptions {
    /// Reads and validates the `ros_execution` block of a parameter map.
    ///
    /// The block must be present and a mapping; `node_package` and
    /// `node_executable` must be present and non-empty. Unknown keys are
    /// ignored.
    pub fn from_parameters(parameters: &Mapping) -> Result<Self> {
        let block = match parameters.get(EXECUTION_KEY) {
            Some(value) if value.is_mapping() => value,
            _ => return Err(Error::ExecutionBlockMissing),
        };

        let options: Self = serde_yaml::from_value(block.clone())
            .map_err(|e| Error::ExecutionBlockInvalid(e.to_string()))?;

        if options.node_package.is_empty() {
            return Err(Error::ExecutionFieldMissing {
                field: "node_package",
            });
        }
        if options.node_executable.is_empty() {
            return Err(Error::ExecutionFieldMissing {
                field: "node_executable",
            });
        }
        Ok(options)
    }
}
