use anyhow::{Context, Result};
use tracing::debug;

use super::load_goal;
use crate::cli::ResolveArgs;

pub fn resolve_command(args: ResolveArgs) -> Result<()> {
    let goal = load_goal(args.build_root.as_deref())?;
    debug!("Resolving specs against {}", goal.build_root().display());

    let resolution = goal
        .resolve(&args.specs)
        .with_context(|| format!("Failed to resolve: {}", args.specs.join(" ")))?;

    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(())
}
