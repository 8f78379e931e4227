//! Collaborator interfaces consumed by the export pipeline

pub mod build_root;

pub use build_root::BuildRootResolver;
