//! Ament-style package index.
//!
//! Packages are discovered the way the ament resource index lays them out:
//! each install prefix carries one marker file per package under
//! `share/ament_index/resource_index/packages/`, and the package's share
//! directory is `<prefix>/share/<package>`.

use nl_config::{Error, PackageIndex, Result};
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable listing the install prefixes, highest priority
/// first.
pub const AMENT_PREFIX_PATH: &str = "AMENT_PREFIX_PATH";

const RESOURCE_INDEX: &str = "share/ament_index/resource_index/packages";

/// Package index over a list of ament install prefixes; first match wins.
#[derive(Debug, Clone, Default)]
pub struct AmentPackageIndex {
    prefixes: Vec<PathBuf>,
}

impl AmentPackageIndex {
    /// Index over an explicit prefix list.
    pub fn with_prefixes(prefixes: Vec<PathBuf>) -> Self {
        Self { prefixes }
    }

    /// Index over the prefixes in `AMENT_PREFIX_PATH`, in order. An unset
    /// variable yields an empty index, which fails every lookup.
    pub fn from_env() -> Self {
        let prefixes = env::var_os(AMENT_PREFIX_PATH)
            .map(|raw| env::split_paths(&raw).collect())
            .unwrap_or_default();
        Self { prefixes }
    }
}

impl PackageIndex for AmentPackageIndex {
    fn share_directory(&self, package: &str) -> Result<PathBuf> {
        for prefix in &self.prefixes {
            let marker = prefix.join(RESOURCE_INDEX).join(package);
            if marker.is_file() {
                debug!(package, prefix = %prefix.display(), "package found in index");
                return Ok(prefix.join("share").join(package));
            }
        }
        Err(Error::PackageNotFound(package.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Lay out `<prefix>/share/<pkg>` plus its resource-index marker.
    fn install_package(prefix: &TempDir, package: &str) {
        let marker_dir = prefix.path().join(RESOURCE_INDEX);
        fs::create_dir_all(&marker_dir).expect("create resource index");
        fs::write(marker_dir.join(package), "").expect("write marker");
        fs::create_dir_all(prefix.path().join("share").join(package))
            .expect("create share dir");
    }

    #[test]
    fn test_finds_package_share_directory() {
        let prefix = TempDir::new().expect("temp prefix");
        install_package(&prefix, "arm_pkg");

        let index = AmentPackageIndex::with_prefixes(vec![prefix.path().to_path_buf()]);
        let share = index.share_directory("arm_pkg").expect("found");
        assert_eq!(share, prefix.path().join("share").join("arm_pkg"));
    }

    #[test]
    fn test_share_directory_without_marker_is_not_found() {
        let prefix = TempDir::new().expect("temp prefix");
        fs::create_dir_all(prefix.path().join("share").join("ghost_pkg"))
            .expect("create share dir");

        let index = AmentPackageIndex::with_prefixes(vec![prefix.path().to_path_buf()]);
        let err = index.share_directory("ghost_pkg").expect_err("no marker");
        assert!(matches!(err, Error::PackageNotFound(name) if name == "ghost_pkg"));
    }

    #[test]
    fn test_first_prefix_wins() {
        let first = TempDir::new().expect("temp prefix");
        let second = TempDir::new().expect("temp prefix");
        install_package(&first, "arm_pkg");
        install_package(&second, "arm_pkg");

        let index = AmentPackageIndex::with_prefixes(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        let share = index.share_directory("arm_pkg").expect("found");
        assert!(share.starts_with(first.path()));
    }

    #[test]
    fn test_empty_index_fails_every_lookup() {
        let index = AmentPackageIndex::with_prefixes(Vec::new());
        assert!(index.share_directory("anything").is_err());
    }
}
