//! Command-line address spec parsing
//!
//! Accepted forms, checked in this order:
//! - `dir::`      every target in `dir` and its subdirectories
//! - `dir:`       every target declared directly in `dir`
//! - `dir:name`   the single target `name` in `dir`
//! - `dir`        the target named after the last segment of `dir`
//!
//! `dir` may be build-root relative, prefixed with `//`, or an absolute path
//! inside the build root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{AddressSpec, ParsedSpecList};

/// How a spec without any `:` is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarePathPolicy {
    /// `a/b/c` means `a/b/c:c`
    #[default]
    #[serde(alias = "directory_basename")]
    Basename,
    /// A bare path is a `MalformedSpec`
    Reject,
}

/// Fails with `EmptySpecList` when no spec was given on the command line.
pub fn ensure_specs_given<S: AsRef<str>>(raw_specs: &[S]) -> Result<()> {
    if raw_specs.is_empty() {
        return Err(Error::EmptySpecList);
    }
    Ok(())
}

/// Parses command-line specs against a fixed build root
#[derive(Debug, Clone)]
pub struct CmdLineSpecParser {
    build_root: PathBuf,
    bare_path: BarePathPolicy,
}

impl CmdLineSpecParser {
    pub fn new(build_root: impl Into<PathBuf>) -> Self {
        Self {
            build_root: build_root.into(),
            bare_path: BarePathPolicy::default(),
        }
    }

    pub fn with_bare_path_policy(mut self, policy: BarePathPolicy) -> Self {
        self.bare_path = policy;
        self
    }

    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    /// Parse every raw spec, keeping command-line order.
    ///
    /// Fails with `EmptySpecList` before looking at anything when `raw_specs`
    /// is empty, and with the first `MalformedSpec` otherwise.
    pub fn parse_specs<S: AsRef<str>>(&self, raw_specs: &[S]) -> Result<ParsedSpecList> {
        ensure_specs_given(raw_specs)?;
        raw_specs
            .iter()
            .map(|raw| self.parse_spec(raw.as_ref()))
            .collect()
    }

    pub fn parse_spec(&self, raw: &str) -> Result<AddressSpec> {
        if raw.trim().is_empty() {
            return Err(Error::malformed(raw, raw, "spec is empty"));
        }

        let spec = if let Some(dir) = raw.strip_suffix("::") {
            AddressSpec::DescendantAddresses {
                directory: self.normalize_directory(raw, dir)?,
            }
        } else if let Some(dir) = raw.strip_suffix(':') {
            AddressSpec::SiblingAddresses {
                directory: self.normalize_directory(raw, dir)?,
            }
        } else if let Some((dir, name)) = raw.rsplit_once(':') {
            if name.contains('/') {
                return Err(Error::malformed(
                    raw,
                    name,
                    "target name must not contain '/'",
                ));
            }
            AddressSpec::SingleAddress {
                directory: self.normalize_directory(raw, dir)?,
                name: name.to_string(),
            }
        } else {
            self.parse_bare_path(raw)?
        };

        debug!("Parsed spec '{}' as {:?}", raw, spec);
        Ok(spec)
    }

    fn parse_bare_path(&self, raw: &str) -> Result<AddressSpec> {
        if self.bare_path == BarePathPolicy::Reject {
            return Err(Error::malformed(
                raw,
                raw,
                "a bare path must name its target explicitly (use 'dir:name')",
            ));
        }

        let directory = self.normalize_directory(raw, raw)?;
        let name = match directory.rsplit('/').next() {
            Some(segment) if !segment.is_empty() => segment.to_string(),
            _ => {
                return Err(Error::malformed(
                    raw,
                    raw,
                    "a bare path naming the build root does not identify a target",
                ));
            }
        };

        Ok(AddressSpec::SingleAddress { directory, name })
    }

    /// Turn the directory portion of `raw` into a clean build-root relative path.
    ///
    /// The build root may itself contain `:`, so the colon check only applies
    /// to what is left once the root prefix is gone.
    fn normalize_directory(&self, raw: &str, dir: &str) -> Result<String> {
        let dir = dir.strip_prefix("//").unwrap_or(dir);
        let relative = if Path::new(dir).is_absolute() {
            let stripped = Path::new(dir).strip_prefix(&self.build_root).map_err(|_| {
                Error::malformed(
                    raw,
                    dir,
                    format!(
                        "absolute path is outside the build root {}",
                        self.build_root.display()
                    ),
                )
            })?;
            stripped
                .to_str()
                .ok_or_else(|| Error::malformed(raw, dir, "path is not valid UTF-8"))?
                .to_string()
        } else {
            dir.to_string()
        };

        if relative.contains(':') {
            return Err(Error::malformed(
                raw,
                dir,
                "':' is not allowed inside the directory portion",
            ));
        }

        let mut segments: Vec<&str> = Vec::new();
        for segment in relative.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.pop().is_none() {
                        return Err(Error::malformed(
                            raw,
                            dir,
                            "path escapes the build root",
                        ));
                    }
                }
                other => segments.push(other),
            }
        }

        Ok(segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parser() -> CmdLineSpecParser {
        CmdLineSpecParser::new("/build/root")
    }

    fn single(directory: &str, name: &str) -> AddressSpec {
        AddressSpec::SingleAddress {
            directory: directory.to_string(),
            name: name.to_string(),
        }
    }

    fn siblings(directory: &str) -> AddressSpec {
        AddressSpec::SiblingAddresses {
            directory: directory.to_string(),
        }
    }

    fn descendants(directory: &str) -> AddressSpec {
        AddressSpec::DescendantAddresses {
            directory: directory.to_string(),
        }
    }

    fn assert_malformed(raw: &str, expected_offending: &str) {
        match parser().parse_spec(raw) {
            Err(Error::MalformedSpec { spec, offending, .. }) => {
                assert_eq!(spec, raw);
                assert_eq!(offending, expected_offending);
            }
            other => panic!("expected MalformedSpec for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_single_address() {
        let p = parser();
        assert_eq!(p.parse_spec("a/b/c:target").unwrap(), single("a/b/c", "target"));
        assert_eq!(p.parse_spec(":root_target").unwrap(), single("", "root_target"));
    }

    #[test]
    fn test_sibling_and_descendant_addresses() {
        let p = parser();
        assert_eq!(p.parse_spec("a/b:").unwrap(), siblings("a/b"));
        assert_eq!(p.parse_spec("x/y::").unwrap(), descendants("x/y"));
        assert_eq!(p.parse_spec("::").unwrap(), descendants(""));
        assert_eq!(p.parse_spec(":").unwrap(), siblings(""));
    }

    #[test]
    fn test_bare_path_names_target_after_directory() {
        let p = parser();
        assert_eq!(p.parse_spec("a/b/c").unwrap(), single("a/b/c", "c"));
        assert_eq!(p.parse_spec("a/b/c/").unwrap(), single("a/b/c", "c"));
    }

    #[test]
    fn test_bare_path_reject_policy() {
        let p = parser().with_bare_path_policy(BarePathPolicy::Reject);
        assert!(matches!(
            p.parse_spec("a/b/c"),
            Err(Error::MalformedSpec { .. })
        ));
        assert_eq!(p.parse_spec("a/b/c:c").unwrap(), single("a/b/c", "c"));
    }

    #[test]
    fn test_directory_normalization() {
        let p = parser();
        assert_eq!(p.parse_spec("//a/b:t").unwrap(), single("a/b", "t"));
        assert_eq!(p.parse_spec("./a/./b/../c::").unwrap(), descendants("a/c"));
        assert_eq!(p.parse_spec("/build/root/a/b:").unwrap(), siblings("a/b"));
        assert_eq!(p.parse_spec("/build/root/::").unwrap(), descendants(""));
        assert_eq!(p.parse_spec("//:t").unwrap(), single("", "t"));
    }

    #[test]
    fn test_malformed_specs() {
        assert_malformed("", "");
        assert_malformed("a:b::", "a:b");
        assert_malformed("a:::", "a:");
        assert_malformed("a:b:c", "a:b");
        assert_malformed("a:b/c", "b/c");
        assert_malformed("../outside::", "../outside");
        assert_malformed("/elsewhere/a:t", "/elsewhere/a");
        assert_malformed(".", ".");
    }

    #[test]
    fn test_build_root_containing_colon() {
        let p = CmdLineSpecParser::new("/tmp/a:b/repo");
        let spec = p.parse_spec("x/y::").unwrap();
        let rendered = format!("/tmp/a:b/repo/{spec}");

        assert_eq!(p.parse_spec(&rendered).unwrap(), spec);
        assert_eq!(p.parse_spec("/tmp/a:b/repo/x/y:t").unwrap(), single("x/y", "t"));
        assert_eq!(p.parse_spec("/tmp/a:b/repo/::").unwrap(), descendants(""));
        assert!(matches!(
            p.parse_spec("/tmp/a:b/repo/x:y::"),
            Err(Error::MalformedSpec { .. })
        ));
    }

    #[test]
    fn test_parse_specs_keeps_order() {
        let specs = parser().parse_specs(&["x/y::", "a/b:", "a/b:"]).unwrap();
        assert_eq!(specs, vec![descendants("x/y"), siblings("a/b"), siblings("a/b")]);
    }

    #[test]
    fn test_parse_specs_empty() {
        let empty: [&str; 0] = [];
        assert!(matches!(parser().parse_specs(&empty), Err(Error::EmptySpecList)));
    }

    #[test]
    fn test_parse_specs_stops_at_first_malformed() {
        let err = parser().parse_specs(&["a::", "b:c:d", "e:"]).unwrap_err();
        assert!(matches!(err, Error::MalformedSpec { ref spec, .. } if spec == "b:c:d"));
    }
}
