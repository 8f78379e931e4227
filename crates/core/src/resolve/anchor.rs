//! Anchor directory selection
//!
//! The generated project is focused on wherever the first requested target
//! lives. Only the position of a spec matters here, never its variant: `a::`
//! anchors at `a` just like `a:name` does.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::AddressSpec;

/// Directory of the first spec, build-root relative.
pub fn select_anchor(specs: &[AddressSpec]) -> Result<&str> {
    specs
        .first()
        .map(AddressSpec::directory)
        .ok_or(Error::EmptySpecList)
}

/// [`select_anchor`] joined onto the build root.
///
/// A root anchor yields the build root itself, without a trailing separator.
pub fn absolute_anchor(build_root: &Path, specs: &[AddressSpec]) -> Result<PathBuf> {
    let anchor = select_anchor(specs)?;
    if anchor.is_empty() {
        Ok(build_root.to_path_buf())
    } else {
        Ok(build_root.join(anchor))
    }
}
