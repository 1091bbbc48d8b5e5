//! Namespace resolution over the nested document.
//!
//! A configuration document nests exactly one key per level until the node
//! name, whose value carries the `ros__parameters` block:
//!
//! ```yaml
//! robot:
//!   arm:
//!     arm_node:
//!       ros__parameters:
//!         rate_hz: 50
//! ```
//!
//! The chain of keys above the node becomes the namespace (`robot/arm`
//! here). Two keys at any level make the namespace ambiguous and fail
//! resolution.

use crate::error::{Error, Result};
use crate::{value_kind, PARAMETER_BLOCK_KEY};
use serde_yaml::{Mapping, Value};

/// A node definition located in a configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeEntry {
    /// "/"-joined chain of keys above the node; empty at the top level.
    pub namespace: String,

    /// The node name (the single key at the level carrying the block).
    pub name: String,

    /// The node's `ros__parameters` mapping, owned.
    pub parameters: Mapping,
}

/// Descends the document to the parameter block, accumulating the namespace.
///
/// Every level above the node must be a mapping with exactly one string key.
/// The node level is the first one whose value contains `ros__parameters`;
/// sibling keys next to the marker are allowed and ignored here. The
/// traversal is read-only.
pub fn resolve_node(doc: &Value) -> Result<NodeEntry> {
    resolve_level(doc, String::new())
}

fn resolve_level(level: &Value, namespace: String) -> Result<NodeEntry> {
    let mapping = level.as_mapping().ok_or(Error::ExpectedMapping {
        found: value_kind(level),
    })?;

    let mut entries = mapping.iter();
    let (key, inner) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(Error::AmbiguousLevel {
                count: mapping.len(),
                keys: key_list(mapping),
            })
        }
    };

    let name = key.as_str().ok_or(Error::NonStringKey {
        found: value_kind(key),
    })?;

    let inner_mapping = inner
        .as_mapping()
        .ok_or_else(|| Error::ExpectedMappingUnder {
            key: name.to_string(),
            found: value_kind(inner),
        })?;

    if let Some(block) = inner_mapping.get(PARAMETER_BLOCK_KEY) {
        let parameters = block
            .as_mapping()
            .ok_or_else(|| Error::ParameterBlockNotMapping {
                node: name.to_string(),
            })?;
        return Ok(NodeEntry {
            namespace,
            name: name.to_string(),
            parameters: parameters.clone(),
        });
    }

    let next = if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}/{name}")
    };
    resolve_level(inner, next)
}

fn key_list(mapping: &Mapping) -> String {
    mapping
        .keys()
        .map(|key| match key.as_str() {
            Some(s) => s.to_string(),
            None => format!("<{}>", value_kind(key)),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
