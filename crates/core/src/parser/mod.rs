//! Command-line address spec parsing

pub mod spec_parser;

// Re-export commonly used items
pub use spec_parser::{BarePathPolicy, CmdLineSpecParser, ensure_specs_given};
