//! Path expansion for parameter values.
//!
//! Two URI schemes inside string parameter values are rewritten to
//! filesystem paths:
//! - `package://<pkg>/<rest>` resolves `<pkg>` through a [`PackageIndex`]
//!   and joins the rest onto the package share directory
//! - `file:///absolute/path` strips the scheme, keeping the path verbatim
//!
//! The match is a search, not an anchor: a URI anywhere in a value rewrites
//! the whole value, text before the scheme included. Kept for compatibility
//! with configurations that rely on it.
//!
//! List elements are copied through untouched, URIs included.

use crate::error::{Error, Result};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

/// Resolves a package name to its share directory.
///
/// The sole seam over the external package index; implementations that do
/// filesystem I/O live with the orchestration layer.
pub trait PackageIndex {
    /// Returns the absolute share directory for `package`.
    ///
    /// Fails with [`Error::PackageNotFound`] for unknown names.
    fn share_directory(&self, package: &str) -> Result<PathBuf>;
}

/// In-memory package index backed by an explicit name → directory table.
#[derive(Debug, Clone, Default)]
pub struct StaticPackageIndex {
    packages: HashMap<String, PathBuf>,
}

impl StaticPackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the share directory for a package.
    pub fn insert(&mut self, package: impl Into<String>, dir: impl Into<PathBuf>) {
        self.packages.insert(package.into(), dir.into());
    }
}

impl PackageIndex for StaticPackageIndex {
    fn share_directory(&self, package: &str) -> Result<PathBuf> {
        self.packages
            .get(package)
            .cloned()
            .ok_or_else(|| Error::PackageNotFound(package.to_string()))
    }
}

fn package_uri() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"package://([^/]+)/(.+)").expect("package URI pattern"))
}

fn file_uri() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"file://(/.+)").expect("file URI pattern"))
}

/// Expands path URIs across a parameter mapping, returning a new mapping.
///
/// Nested mappings are expanded recursively; non-string scalars and lists
/// are copied unchanged. A failed package lookup aborts the expansion;
/// nothing is promised about values visited before the failure.
pub fn expand_paths(parameters: &Mapping, index: &dyn PackageIndex) -> Result<Mapping> {
    let mut expanded = Mapping::new();
    for (key, value) in parameters {
        let value = match value {
            Value::Mapping(nested) => Value::Mapping(expand_paths(nested, index)?),
            Value::String(raw) => Value::String(expand_value(raw, index)?),
            other => other.clone(),
        };
        expanded.insert(key.clone(), value);
    }
    Ok(expanded)
}

fn expand_value(raw: &str, index: &dyn PackageIndex) -> Result<String> {
    if let Some(caps) = package_uri().captures(raw) {
        let package = &caps[1];
        let share = index.share_directory(package)?;
        let joined = share.join(&caps[2]).to_string_lossy().into_owned();
        debug!(package, from = raw, to = %joined, "expanded package uri");
        return Ok(joined);
    }
    if let Some(caps) = file_uri().captures(raw) {
        return Ok(caps[1].to_string());
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> StaticPackageIndex {
        let mut index = StaticPackageIndex::new();
        index.insert("foo", "/opt/foo");
        index
    }

    fn params(text: &str) -> Mapping {
        serde_yaml::from_str(text).expect("test parameters parse")
    }

    fn get_str<'a>(mapping: &'a Mapping, key: &str) -> &'a str {
        mapping
            .get(key)
            .and_then(Value::as_str)
            .expect("string parameter")
    }

    #[test]
    fn test_expands_package_uri() {
        let out = expand_paths(&params("p: package://foo/bar/baz.txt\n"), &index())
            .expect("expands");
        assert_eq!(get_str(&out, "p"), "/opt/foo/bar/baz.txt");
    }

    #[test]
    fn test_expands_file_uri() {
        let out = expand_paths(&params("p: file:///etc/x.yaml\n"), &index()).expect("expands");
        assert_eq!(get_str(&out, "p"), "/etc/x.yaml");
    }

    #[test]
    fn test_plain_strings_are_unchanged() {
        let out = expand_paths(&params("p: just a value\n"), &index()).expect("expands");
        assert_eq!(get_str(&out, "p"), "just a value");
    }

    #[test]
    fn test_relative_file_uri_is_not_expanded() {
        // file:// requires an absolute path; anything else passes through.
        let out = expand_paths(&params("p: file://etc/x.yaml\n"), &index()).expect("expands");
        assert_eq!(get_str(&out, "p"), "file://etc/x.yaml");
    }

    #[test]
    fn test_recurses_into_nested_mappings() {
        let out = expand_paths(
            &params("outer:\n  inner:\n    p: package://foo/cfg.yaml\n"),
            &index(),
        )
        .expect("expands");
        let inner = out
            .get("outer")
            .and_then(Value::as_mapping)
            .and_then(|m| m.get("inner"))
            .and_then(Value::as_mapping)
            .expect("nested mapping");
        assert_eq!(get_str(inner, "p"), "/opt/foo/cfg.yaml");
    }

    #[test]
    fn test_list_elements_are_not_descended_into() {
        let source = params("p:\n  - package://foo/bar\n");
        let out = expand_paths(&source, &index()).expect("expands");
        assert_eq!(out, source);
    }

    #[test]
    fn test_non_string_scalars_are_unchanged() {
        let source = params("a: 1\nb: true\nc: 2.5\n");
        let out = expand_paths(&source, &index()).expect("expands");
        assert_eq!(out, source);
    }

    #[test]
    fn test_mid_string_match_rewrites_whole_value() {
        // The pattern is searched, not anchored; the leading text is dropped.
        let out = expand_paths(&params("p: see package://foo/bar\n"), &index())
            .expect("expands");
        assert_eq!(get_str(&out, "p"), "/opt/foo/bar");
    }

    #[test]
    fn test_unknown_package_aborts_expansion() {
        let err = expand_paths(&params("p: package://ghost/bar\n"), &index())
            .expect_err("unknown package");
        assert!(matches!(err, Error::PackageNotFound(name) if name == "ghost"));
    }

    #[test]
    fn test_expansion_is_idempotent_on_expanded_values() {
        let once = expand_paths(&params("p: package://foo/bar\n"), &index()).expect("expands");
        let twice = expand_paths(&once, &index()).expect("expands again");
        assert_eq!(once, twice);
    }
}
