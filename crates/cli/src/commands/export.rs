use anyhow::{Context, Result};
use idea_plugin_core::{IdeaPluginConfig, parser::ensure_specs_given};
use tracing::{debug, info};

use super::load_goal;
use crate::cli::ExportArgs;

pub fn export_command(args: ExportArgs) -> Result<()> {
    // No specs is an error before anything is resolved or written
    ensure_specs_given(&args.specs)?;

    let overrides = IdeaPluginConfig {
        incremental_import: args.incremental_import,
        dep_as_jar: args.dep_as_jar.then_some(true),
        project_name: args.project_name.clone(),
        bare_path: None,
    };
    let goal = load_goal(args.build_root.as_deref())?.with_overrides(overrides);

    debug!(
        "Exporting {} spec(s) from build root {} with {:?}",
        args.specs.len(),
        goal.build_root().display(),
        goal.config()
    );
    if args.open && !args.no_open {
        info!("Opening the project is left to the invoking process");
    }

    let outcome = goal
        .export(&args.specs, &args.output_file)
        .with_context(|| format!("Failed to export IDE project for: {}", args.specs.join(" ")))?;

    println!("{}", outcome.project_dir.display());
    Ok(())
}
