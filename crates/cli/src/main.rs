use anyhow::Result;
use clap::Parser;
use idea_plugin::IdeaPlugin;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = IdeaPlugin::parse();
    cli.command.execute()
}
