//! Build root resolvers backed by the filesystem

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::interfaces::BuildRootResolver;

/// Environment variable that pins the build root, skipping discovery
pub const BUILDROOT_OVERRIDE_ENV: &str = "PANTS_BUILDROOT_OVERRIDE";

/// Files whose presence marks a directory as the build root
pub const BUILD_ROOT_MARKERS: &[&str] = &["pants.toml", "pants.ini", "BUILDROOT", "pants"];

/// Walks up from a start directory until a build root marker is found
#[derive(Debug, Clone)]
pub struct MarkerBuildRootResolver {
    start: PathBuf,
}

impl MarkerBuildRootResolver {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
        }
    }

    /// Start from the process working directory
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| Error::ConfigError(format!("Failed to get current directory: {e}")))?;
        Ok(Self::new(cwd))
    }

    fn find_marked_ancestor(&self) -> Option<PathBuf> {
        let mut current: &Path = &self.start;

        loop {
            if BUILD_ROOT_MARKERS
                .iter()
                .any(|marker| current.join(marker).exists())
            {
                return Some(current.to_path_buf());
            }
            current = current.parent()?;
        }
    }
}

impl BuildRootResolver for MarkerBuildRootResolver {
    fn build_root(&self) -> Result<PathBuf> {
        if let Some(root) = std::env::var_os(BUILDROOT_OVERRIDE_ENV) {
            tracing::debug!("Using build root from {}: {:?}", BUILDROOT_OVERRIDE_ENV, root);
            return absolutize(PathBuf::from(root));
        }

        let root = self
            .find_marked_ancestor()
            .ok_or_else(|| Error::BuildRootNotFound(self.start.clone()))?;
        tracing::debug!("Found build root at {:?}", root);
        Ok(root)
    }
}

/// A build root given up front, from `--build-root` or a test fixture
#[derive(Debug, Clone)]
pub struct FixedBuildRoot(PathBuf);

impl FixedBuildRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }
}

impl BuildRootResolver for FixedBuildRoot {
    fn build_root(&self) -> Result<PathBuf> {
        absolutize(self.0.clone())
    }
}

/// Relative roots are taken from the process working directory.
fn absolutize(root: PathBuf) -> Result<PathBuf> {
    if root.is_absolute() {
        return Ok(root);
    }
    let cwd = std::env::current_dir()
        .map_err(|e| Error::ConfigError(format!("Failed to get current directory: {e}")))?;
    Ok(cwd.join(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_marker_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("pants.toml"), "").unwrap();
        let nested = root.join("src/python/app");
        fs::create_dir_all(&nested).unwrap();

        let resolver = MarkerBuildRootResolver::new(&nested);
        assert_eq!(resolver.find_marked_ancestor(), Some(root.to_path_buf()));
    }

    #[test]
    fn test_nearest_marker_wins() {
        let temp_dir = TempDir::new().unwrap();
        let outer = temp_dir.path();
        fs::write(outer.join("pants.toml"), "").unwrap();
        let inner = outer.join("vendored");
        fs::create_dir_all(inner.join("lib")).unwrap();
        fs::write(inner.join("BUILDROOT"), "").unwrap();

        let resolver = MarkerBuildRootResolver::new(inner.join("lib"));
        assert_eq!(resolver.find_marked_ancestor(), Some(inner));
    }

    #[test]
    fn test_relative_root_is_made_absolute() {
        let root = absolutize(PathBuf::from("repo")).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, std::env::current_dir().unwrap().join("repo"));

        let relative = FixedBuildRoot::new("repo").build_root().unwrap();
        assert!(relative.is_absolute());
    }

    #[test]
    fn test_fixed_build_root_is_returned_as_is() {
        let resolver = FixedBuildRoot::new("/srv/repo");
        assert_eq!(resolver.build_root().unwrap(), PathBuf::from("/srv/repo"));
    }
}
