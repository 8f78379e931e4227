pub mod address_spec;

// Re-export commonly used types
pub use address_spec::AddressSpec;

/// Ordered specs exactly as given on the command line
pub type ParsedSpecList = Vec<AddressSpec>;
