use std::path::Path;

use crate::types::AddressSpec;

/// The spec with its directory made absolute, e.g. `/repo/a/b:`.
pub fn absolute_spec(build_root: &Path, spec: &AddressSpec) -> String {
    build_root
        .join(spec.to_spec_string())
        .to_string_lossy()
        .into_owned()
}

/// Absolute form of every spec, index-aligned with `specs`.
///
/// Duplicates are kept and nothing is expanded into concrete targets; the
/// IDE host does the expansion itself.
pub fn normalize_specs(build_root: &Path, specs: &[AddressSpec]) -> Vec<String> {
    specs
        .iter()
        .map(|spec| absolute_spec(build_root, spec))
        .collect()
}
