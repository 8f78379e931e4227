//! Writes the workspace metadata document and the pointer file

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::layout::ProjectLayout;
use super::properties::{ExportedProperty, PropertiesBuilder};
use super::workspace_xml::render_workspace;
use crate::error::{Error, Result};
use crate::resolve::{absolute_anchor, normalize_specs};
use crate::types::ParsedSpecList;

/// Everything the exporter needs, resolved up front
#[derive(Debug, Clone)]
pub struct ProjectExportRequest {
    pub specs: ParsedSpecList,
    pub build_root: PathBuf,
    pub layout: ProjectLayout,
    pub plugin_version: String,
    pub incremental_import: Option<i64>,
    pub dep_as_jar: Option<bool>,
}

impl ProjectExportRequest {
    pub fn project_directory(&self) -> &Path {
        self.layout.project_dir()
    }

    /// The ordered properties written to `workspace.xml`.
    pub fn properties(&self) -> Result<Vec<ExportedProperty>> {
        let targets = normalize_specs(&self.build_root, &self.specs);
        let targets_json = serde_json::to_string(&targets)?;
        let project_path = absolute_anchor(&self.build_root, &self.specs)?;

        Ok(PropertiesBuilder::new(
            targets_json,
            project_path.to_string_lossy(),
            self.plugin_version.as_str(),
        )
        .incremental_import(self.incremental_import)
        .dep_as_jar(self.dep_as_jar)
        .build())
    }
}

/// Paths produced by a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub project_dir: PathBuf,
    pub workspace_file: PathBuf,
    pub pointer_file: PathBuf,
}

/// Exports one IDE project and records its location in the pointer file
#[derive(Debug, Clone)]
pub struct IdeaPluginExporter {
    output_file: PathBuf,
}

impl IdeaPluginExporter {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    /// Write `workspace.xml`, then the pointer file.
    ///
    /// Nothing is retried or rolled back; if the second write fails the first
    /// file is left in place and the error is returned.
    pub fn export(&self, request: ProjectExportRequest) -> Result<ExportOutcome> {
        let properties = request.properties()?;
        let document = render_workspace(&properties);

        let workspace_file = request.layout.workspace_file();
        debug!(
            "Writing {} properties to {:?}",
            properties.len(),
            workspace_file
        );
        write_file(&workspace_file, document.as_bytes())?;

        let project_dir = request.project_directory().to_path_buf();
        let pointer = format!("{}\n", project_dir.display());
        write_file(&self.output_file, pointer.as_bytes())?;

        info!(
            "Generated IDE project {} at {}",
            request.layout.project_name(),
            project_dir.display()
        );

        Ok(ExportOutcome {
            project_dir,
            workspace_file,
            pointer_file: self.output_file.clone(),
        })
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::write_failure(parent, e))?;
        }
    }
    fs::write(path, contents).map_err(|e| Error::write_failure(path, e))
}
