//! Concrete implementations of the collaborator interfaces

pub mod marker_build_root;

pub use marker_build_root::{FixedBuildRoot, MarkerBuildRootResolver};
