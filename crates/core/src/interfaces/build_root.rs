//! Build root resolution interface
//!
//! Every spec directory is relative to the build root, so it is resolved once
//! per invocation and handed to the parser, normalizer and exporter.

use std::path::PathBuf;

use crate::error::Result;

/// Trait for locating the absolute build root
pub trait BuildRootResolver: Send + Sync {
    /// Return the absolute filesystem root all spec directories are relative to
    fn build_root(&self) -> Result<PathBuf>;
}
