//! Error types for node launch configuration resolution.
//!
//! A single unified error enum covers the three failure classes of a
//! resolution call, with stable codes for machine parsing:
//! - 10-19: document structure (nesting and marker rules)
//! - 20-29: validation (execution block, remapping entries)
//! - 30-39: package lookup

use thiserror::Error;

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for configuration resolution.
#[derive(Debug, Error)]
pub enum Error {
    // Document structure errors (10-19)
    #[error("expected a mapping at every level of the document, got {found}")]
    ExpectedMapping { found: &'static str },

    #[error("expected exactly one key per level, found {count}: [{keys}]")]
    AmbiguousLevel { count: usize, keys: String },

    #[error("expected a string key in the namespace chain, got {found}")]
    NonStringKey { found: &'static str },

    #[error("expected a mapping under key '{key}', got {found}")]
    ExpectedMappingUnder { key: String, found: &'static str },

    #[error("'ros__parameters' under node '{node}' must be a mapping")]
    ParameterBlockNotMapping { node: String },

    // Validation errors (20-29)
    #[error("the 'ros_execution' block is required and must be a mapping")]
    ExecutionBlockMissing,

    #[error("the field '{field}' is required in the 'ros_execution' block")]
    ExecutionFieldMissing { field: &'static str },

    #[error("invalid 'ros_execution' block: {0}")]
    ExecutionBlockInvalid(String),

    #[error("expected 'ros_remappings' to be a mapping, got {found}")]
    RemapSpecNotMapping { found: &'static str },

    #[error("expected a list for '{section}' remappings, got {found}")]
    RemapSectionNotList {
        section: &'static str,
        found: &'static str,
    },

    #[error("each remapping in '{section}' must be a string, got {found}")]
    RemapEntryNotString {
        section: &'static str,
        found: &'static str,
    },

    #[error("invalid format in '{section}' remapping: '{entry}' (expected 'from:to')")]
    RemapEntryMalformed {
        section: &'static str,
        entry: String,
    },

    #[error("empty 'from' or 'to' side in '{section}' remapping: '{entry}'")]
    RemapEntryEmptySide {
        section: &'static str,
        entry: String,
    },

    // Package lookup errors (30-39)
    #[error("package '{0}' not found in the package index")]
    PackageNotFound(String),
}

impl Error {
    /// Returns the stable error code for this error.
    ///
    /// Codes are grouped by failure class:
    /// - 10-19: document structure
    /// - 20-29: validation
    /// - 30-39: package lookup
    pub fn code(&self) -> u32 {
        match self {
            Error::ExpectedMapping { .. } => 10,
            Error::AmbiguousLevel { .. } => 11,
            Error::NonStringKey { .. } => 12,
            Error::ExpectedMappingUnder { .. } => 13,
            Error::ParameterBlockNotMapping { .. } => 14,
            Error::ExecutionBlockMissing => 20,
            Error::ExecutionFieldMissing { .. } => 21,
            Error::ExecutionBlockInvalid(_) => 22,
            Error::RemapSpecNotMapping { .. } => 23,
            Error::RemapSectionNotList { .. } => 24,
            Error::RemapEntryNotString { .. } => 25,
            Error::RemapEntryMalformed { .. } => 26,
            Error::RemapEntryEmptySide { .. } => 27,
            Error::PackageNotFound(_) => 30,
        }
    }

    /// Whether the error came from the document itself (as opposed to the
    /// environment the document is resolved against).
    pub fn is_document_error(&self) -> bool {
        !matches!(self, Error::PackageNotFound(_))
    }
}
