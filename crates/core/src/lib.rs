//! idea-plugin-core - address spec resolution and IDE project export
//!
//! This crate provides functionality to:
//! - Parse command-line address specs (`dir:name`, `dir:`, `dir::`, `dir`)
//! - Pick the anchor directory the generated IDE project focuses on
//! - Render specs back to absolute form for the IDE plugin
//! - Write the ordered `workspace.xml` properties and the pointer file
pub mod config;
pub mod error;
pub mod export;
pub mod goal;
pub mod interfaces;
pub mod parser;
pub mod resolve;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::IdeaPluginConfig;
pub use export::{ExportOutcome, IdeaPluginExporter, ProjectExportRequest};
pub use goal::{IdeaPluginGoal, Resolution};
pub use interfaces::BuildRootResolver;
pub use parser::{BarePathPolicy, CmdLineSpecParser};
pub use services::{FixedBuildRoot, MarkerBuildRootResolver};

/// Version of the IDE plugin protocol this exporter speaks
pub const IDEA_PLUGIN_VERSION: &str = "0.0.4";
