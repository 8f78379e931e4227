use std::path::{Path, PathBuf};

/// Generated projects live under `<build_root>/.pants.d/idea-plugin/`
pub const PROJECTS_DIR: &str = ".pants.d/idea-plugin";

/// Where the IDE host reads the workspace properties, relative to the project
pub const WORKSPACE_FILE: &str = ".idea/workspace.xml";

const MAX_NAME_PREFIX_LEN: usize = 64;

/// On-disk layout of one generated IDE project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    project_name: String,
    project_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(build_root: &Path, project_name: impl Into<String>) -> Self {
        let project_name = project_name.into();
        let project_dir = build_root.join(PROJECTS_DIR).join(&project_name);
        Self {
            project_name,
            project_dir,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn workspace_file(&self) -> PathBuf {
        self.project_dir.join(WORKSPACE_FILE)
    }
}

/// Derive a stable project name from the anchor and the absolute specs.
///
/// The same request always maps to the same directory, so re-running the goal
/// refreshes a project instead of piling up new ones.
pub fn derive_project_name(anchor: &str, absolute_specs: &[String]) -> String {
    let prefix = match anchor.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => sanitize(segment),
        _ => "root".to_string(),
    };
    let digest = format!("{:x}", md5::compute(absolute_specs.join("\n").as_bytes()));
    format!("{}-{}", prefix, &digest[..8])
}

fn sanitize(segment: &str) -> String {
    segment
        .chars()
        .take(MAX_NAME_PREFIX_LEN)
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
