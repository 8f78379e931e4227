//! Ordered workspace properties read by the IDE plugin.
//!
//! The plugin reads properties by position as well as by name, so the list is
//! always `targets`, `project_path`, `pants_idea_plugin_version`, then the
//! optional `incremental_import` and `dep_as_jar` when they were supplied.

use std::fmt;

/// The closed set of property names the plugin understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyName {
    Targets,
    ProjectPath,
    PantsIdeaPluginVersion,
    IncrementalImport,
    DepAsJar,
}

impl PropertyName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyName::Targets => "targets",
            PropertyName::ProjectPath => "project_path",
            PropertyName::PantsIdeaPluginVersion => "pants_idea_plugin_version",
            PropertyName::IncrementalImport => "incremental_import",
            PropertyName::DepAsJar => "dep_as_jar",
        }
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedProperty {
    pub name: PropertyName,
    pub value: String,
}

impl ExportedProperty {
    fn new(name: PropertyName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Builds the property list; optional entries are appended only when set.
#[derive(Debug, Clone)]
pub struct PropertiesBuilder {
    targets: String,
    project_path: String,
    plugin_version: String,
    incremental_import: Option<i64>,
    dep_as_jar: Option<bool>,
}

impl PropertiesBuilder {
    /// `targets_json` is the already-encoded JSON array of absolute specs.
    pub fn new(
        targets_json: impl Into<String>,
        project_path: impl Into<String>,
        plugin_version: impl Into<String>,
    ) -> Self {
        Self {
            targets: targets_json.into(),
            project_path: project_path.into(),
            plugin_version: plugin_version.into(),
            incremental_import: None,
            dep_as_jar: None,
        }
    }

    pub fn incremental_import(mut self, value: Option<i64>) -> Self {
        self.incremental_import = value;
        self
    }

    pub fn dep_as_jar(mut self, value: Option<bool>) -> Self {
        self.dep_as_jar = value;
        self
    }

    pub fn build(self) -> Vec<ExportedProperty> {
        let mut properties = vec![
            ExportedProperty::new(PropertyName::Targets, self.targets),
            ExportedProperty::new(PropertyName::ProjectPath, self.project_path),
            ExportedProperty::new(PropertyName::PantsIdeaPluginVersion, self.plugin_version),
        ];

        if let Some(incremental_import) = self.incremental_import {
            properties.push(ExportedProperty::new(
                PropertyName::IncrementalImport,
                incremental_import.to_string(),
            ));
        }

        if let Some(dep_as_jar) = self.dep_as_jar {
            properties.push(ExportedProperty::new(
                PropertyName::DepAsJar,
                dep_as_jar.to_string(),
            ));
        }

        properties
    }
}
