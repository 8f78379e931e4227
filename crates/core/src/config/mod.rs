//! Configuration management for the idea-plugin goal

mod settings;

// Re-export main types
pub use settings::IdeaPluginConfig;
