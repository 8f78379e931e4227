//! The `idea-plugin` goal: resolve specs, then export the IDE project

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::{
    IDEA_PLUGIN_VERSION,
    config::IdeaPluginConfig,
    error::Result,
    export::{ExportOutcome, IdeaPluginExporter, ProjectExportRequest, ProjectLayout, derive_project_name},
    interfaces::BuildRootResolver,
    parser::{CmdLineSpecParser, ensure_specs_given},
    resolve::{absolute_anchor, normalize_specs, select_anchor},
    types::ParsedSpecList,
};

/// Parsed specs together with everything derived from them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub specs: ParsedSpecList,
    pub anchor: String,
    pub project_path: PathBuf,
    pub targets: Vec<String>,
}

pub struct IdeaPluginGoal {
    build_root: PathBuf,
    config: IdeaPluginConfig,
}

impl IdeaPluginGoal {
    /// Resolve the build root and load `[idea-plugin]` from its `pants.toml`.
    pub fn new(resolver: &dyn BuildRootResolver) -> Result<Self> {
        let build_root = resolver.build_root()?;
        let config = IdeaPluginConfig::load_from_build_root(&build_root)?;
        Ok(Self::with_config(build_root, config))
    }

    pub fn with_config(build_root: impl Into<PathBuf>, config: IdeaPluginConfig) -> Self {
        Self {
            build_root: build_root.into(),
            config,
        }
    }

    /// Layer command-line values over the loaded configuration.
    pub fn with_overrides(mut self, overrides: IdeaPluginConfig) -> Self {
        self.config = self.config.merge(overrides);
        self
    }

    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    pub fn config(&self) -> &IdeaPluginConfig {
        &self.config
    }

    pub fn parser(&self) -> CmdLineSpecParser {
        CmdLineSpecParser::new(&self.build_root).with_bare_path_policy(self.config.bare_path_policy())
    }

    pub fn resolve<S: AsRef<str>>(&self, raw_specs: &[S]) -> Result<Resolution> {
        let specs = self.parser().parse_specs(raw_specs)?;
        let anchor = select_anchor(&specs)?.to_string();
        let project_path = absolute_anchor(&self.build_root, &specs)?;
        let targets = normalize_specs(&self.build_root, &specs);

        Ok(Resolution {
            specs,
            anchor,
            project_path,
            targets,
        })
    }

    pub fn build_request<S: AsRef<str>>(&self, raw_specs: &[S]) -> Result<ProjectExportRequest> {
        let resolution = self.resolve(raw_specs)?;
        let project_name = self
            .config
            .project_name
            .clone()
            .unwrap_or_else(|| derive_project_name(&resolution.anchor, &resolution.targets));
        debug!("Project name: {}", project_name);

        Ok(ProjectExportRequest {
            specs: resolution.specs,
            build_root: self.build_root.clone(),
            layout: ProjectLayout::new(&self.build_root, project_name),
            plugin_version: IDEA_PLUGIN_VERSION.to_string(),
            incremental_import: self.config.incremental_import,
            dep_as_jar: self.config.dep_as_jar,
        })
    }

    /// Run the whole goal. `output_file` receives the project directory.
    pub fn export<S: AsRef<str>>(&self, raw_specs: &[S], output_file: &Path) -> Result<ExportOutcome> {
        ensure_specs_given(raw_specs)?;
        let request = self.build_request(raw_specs)?;
        IdeaPluginExporter::new(output_file).export(request)
    }
}
