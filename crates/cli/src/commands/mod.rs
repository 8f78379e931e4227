pub mod export;
pub mod resolve;

pub use export::export_command;
pub use resolve::resolve_command;

use anyhow::{Context, Result};
use idea_plugin_core::{FixedBuildRoot, IdeaPluginGoal, MarkerBuildRootResolver};
use std::path::Path;
use tracing::debug;

/// Resolve the build root (explicit or discovered) and load its configuration.
pub(crate) fn load_goal(build_root: Option<&Path>) -> Result<IdeaPluginGoal> {
    let goal = match build_root {
        Some(root) => {
            debug!("Using build root from --build-root: {}", root.display());
            IdeaPluginGoal::new(&FixedBuildRoot::new(root))
        }
        None => IdeaPluginGoal::new(&MarkerBuildRootResolver::from_current_dir()?),
    };
    goal.context("Failed to resolve the build root")
}
