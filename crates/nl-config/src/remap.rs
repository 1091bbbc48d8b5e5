//! Remapping expansion.
//!
//! A remapping spec carries up to three sections of compact `"from:to"`
//! entries:
//!
//! ```yaml
//! ros_remappings:
//!   topics:
//!     - "js:joint_states"
//!   services:
//!     - "reset:arm/reset"
//!   actions:
//!     - "grasp:arm/grasp"
//! ```
//!
//! Topics and services map one entry to one pair. Each action entry fans out
//! into the five fixed sub-endpoints an action interface is built from.
//! Sections are processed in a fixed order so the resulting list is
//! reproducible downstream.

use crate::error::{Error, Result};
use crate::value_kind;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// The five sub-endpoints behind one action interface, in expansion order.
pub const ACTION_SUFFIXES: [&str; 5] = [
    "/_action/feedback",
    "/_action/status",
    "/_action/cancel_goal",
    "/_action/get_result",
    "/_action/send_goal",
];

/// One source → destination endpoint remapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remapping {
    pub from: String,
    pub to: String,
}

/// Expands a remapping spec into an ordered list of explicit pairs.
///
/// Section order is topics, services, actions. A null spec, or a spec whose
/// sections are all absent or null, yields an empty list.
pub fn expand_remappings(spec: &Value) -> Result<Vec<Remapping>> {
    let mapping = match spec {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(Error::RemapSpecNotMapping {
                found: value_kind(other),
            })
        }
    };

    let mut remappings = Vec::new();
    remappings.extend(parse_section(mapping, "topics")?);
    remappings.extend(parse_section(mapping, "services")?);
    for pair in parse_section(mapping, "actions")? {
        for suffix in ACTION_SUFFIXES {
            remappings.push(Remapping {
                from: format!("{}{}", pair.from, suffix),
                to: format!("{}{}", pair.to, suffix),
            });
        }
    }
    Ok(remappings)
}

fn parse_section(spec: &Mapping, section: &'static str) -> Result<Vec<Remapping>> {
    let entries = match spec.get(section) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Sequence(entries)) => entries,
        Some(other) => {
            return Err(Error::RemapSectionNotList {
                section,
                found: value_kind(other),
            })
        }
    };

    let mut pairs = Vec::with_capacity(entries.len());
    for entry in entries {
        let raw = entry.as_str().ok_or_else(|| Error::RemapEntryNotString {
            section,
            found: value_kind(entry),
        })?;
        pairs.push(parse_pair(section, raw)?);
    }
    Ok(pairs)
}

fn parse_pair(section: &'static str, raw: &str) -> Result<Remapping> {
    let parts: Vec<&str> = raw.split(':').collect();
    let (from, to) = match parts.as_slice() {
        [from, to] => (from.trim(), to.trim()),
        _ => {
            return Err(Error::RemapEntryMalformed {
                section,
                entry: raw.to_string(),
            })
        }
    };
    if from.is_empty() || to.is_empty() {
        return Err(Error::RemapEntryEmptySide {
            section,
            entry: raw.to_string(),
        });
    }
    Ok(Remapping {
        from: from.to_string(),
        to: to.to_string(),
    })
}
