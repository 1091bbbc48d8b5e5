//! Configuration document loading.

use crate::error::LaunchError;
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Yaml,
    Json,
}

/// Pick the parser by extension; YAML is the default for anything that is
/// not explicitly `.json`.
fn detect_format(path: &Path) -> DocumentFormat {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "json" => DocumentFormat::Json,
        _ => DocumentFormat::Yaml,
    }
}

/// Loads a configuration document from disk.
///
/// The path must exist and be a regular file. An empty or null document, or
/// one whose top level is not a mapping, is rejected here so the resolver
/// only ever sees a mapping.
pub fn load_document(path: &Path) -> Result<Value, LaunchError> {
    if !path.exists() {
        return Err(LaunchError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(LaunchError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| LaunchError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document: Value = match detect_format(path) {
        DocumentFormat::Yaml => {
            serde_yaml::from_str(&content).map_err(|e| LaunchError::Yaml {
                path: path.to_path_buf(),
                source: e,
            })?
        }
        DocumentFormat::Json => {
            serde_json::from_str(&content).map_err(|e| LaunchError::Json {
                path: path.to_path_buf(),
                source: e,
            })?
        }
    };

    if document.is_null() {
        return Err(LaunchError::Empty {
            path: path.to_path_buf(),
        });
    }
    if !document.is_mapping() {
        return Err(LaunchError::NotAMapping {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loaded configuration document");
    Ok(document)
}
