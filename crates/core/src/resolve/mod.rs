//! Anchor selection and absolute spec rendering

pub mod anchor;
pub mod normalizer;

pub use anchor::{absolute_anchor, select_anchor};
pub use normalizer::{absolute_spec, normalize_specs};
