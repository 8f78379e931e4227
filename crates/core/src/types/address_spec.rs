use serde::{Deserialize, Serialize};
use std::fmt;

/// A command-line address spec, resolved relative to the build root.
///
/// `directory` is build-root relative and uses `/` separators; the empty
/// string is the build root itself. Nothing here checks the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AddressSpec {
    /// Exactly one target, `directory:name`
    SingleAddress { directory: String, name: String },
    /// Every target declared directly in `directory`, `directory:`
    SiblingAddresses { directory: String },
    /// Every target in `directory` and below, `directory::`
    DescendantAddresses { directory: String },
}

impl AddressSpec {
    pub fn directory(&self) -> &str {
        match self {
            AddressSpec::SingleAddress { directory, .. }
            | AddressSpec::SiblingAddresses { directory }
            | AddressSpec::DescendantAddresses { directory } => directory,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            AddressSpec::SingleAddress { name, .. } => Some(name),
            AddressSpec::SiblingAddresses { .. } | AddressSpec::DescendantAddresses { .. } => None,
        }
    }

    /// The spec in the syntax the parser accepts, directory left relative.
    pub fn to_spec_string(&self) -> String {
        match self {
            AddressSpec::SingleAddress { directory, name } => format!("{directory}:{name}"),
            AddressSpec::SiblingAddresses { directory } => format!("{directory}:"),
            AddressSpec::DescendantAddresses { directory } => format!("{directory}::"),
        }
    }
}

impl fmt::Display for AddressSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_spec_string())
    }
}
