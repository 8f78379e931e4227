use crate::{
    error::{Error, Result},
    parser::BarePathPolicy,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options of the `idea-plugin` goal.
///
/// Read from the `[idea-plugin]` table of the build root's `pants.toml`;
/// command-line flags are layered on top with [`IdeaPluginConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IdeaPluginConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "incremental-import")]
    pub incremental_import: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "dep-as-jar")]
    pub dep_as_jar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "project-name")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "bare-path")]
    pub bare_path: Option<BarePathPolicy>,
}

#[derive(Debug, Default, Deserialize)]
struct PantsToml {
    #[serde(rename = "idea-plugin", alias = "idea_plugin", default)]
    idea_plugin: Option<IdeaPluginConfig>,
}

impl IdeaPluginConfig {
    pub const FILE_NAME: &'static str = "pants.toml";

    /// Load `<build_root>/pants.toml`, falling back to defaults when it is absent.
    pub fn load_from_build_root(build_root: &Path) -> Result<Self> {
        let path = build_root.join(Self::FILE_NAME);
        if !path.exists() {
            tracing::debug!("No {} at {:?}, using defaults", Self::FILE_NAME, build_root);
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        let parsed: PantsToml = toml::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(parsed.idea_plugin.unwrap_or_default())
    }

    /// Overlay `overrides` on top of `self`; any value set in `overrides` wins.
    pub fn merge(self, overrides: IdeaPluginConfig) -> Self {
        Self {
            incremental_import: overrides.incremental_import.or(self.incremental_import),
            dep_as_jar: overrides.dep_as_jar.or(self.dep_as_jar),
            project_name: overrides.project_name.or(self.project_name),
            bare_path: overrides.bare_path.or(self.bare_path),
        }
    }

    pub fn bare_path_policy(&self) -> BarePathPolicy {
        self.bare_path.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = IdeaPluginConfig::load_from_build_root(temp_dir.path()).unwrap();
        assert_eq!(config, IdeaPluginConfig::default());
        assert_eq!(config.bare_path_policy(), BarePathPolicy::Basename);
    }

    #[test]
    fn test_loads_idea_plugin_table() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("pants.toml"),
            r#"
[GLOBAL]
pants_version = "1.26.0"

[idea-plugin]
incremental_import = 2
dep-as-jar = true
bare_path = "reject"
open_with = "IntelliJ IDEA"
"#,
        )
        .unwrap();

        let config = IdeaPluginConfig::load_from_build_root(temp_dir.path()).unwrap();
        assert_eq!(config.incremental_import, Some(2));
        assert_eq!(config.dep_as_jar, Some(true));
        assert_eq!(config.project_name, None);
        assert_eq!(config.bare_path_policy(), BarePathPolicy::Reject);
    }

    #[test]
    fn test_file_without_table_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pants.toml"), "[GLOBAL]\nlevel = \"info\"\n").unwrap();

        let config = IdeaPluginConfig::load_from_build_root(temp_dir.path()).unwrap();
        assert_eq!(config, IdeaPluginConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pants.toml"), "[idea-plugin\n").unwrap();

        let err = IdeaPluginConfig::load_from_build_root(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = IdeaPluginConfig {
            incremental_import: Some(1),
            dep_as_jar: Some(false),
            project_name: Some("from-file".to_string()),
            bare_path: None,
        };
        let flags = IdeaPluginConfig {
            incremental_import: Some(1337),
            ..Default::default()
        };

        let merged = file.merge(flags);
        assert_eq!(merged.incremental_import, Some(1337));
        assert_eq!(merged.dep_as_jar, Some(false));
        assert_eq!(merged.project_name.as_deref(), Some("from-file"));
    }
}
