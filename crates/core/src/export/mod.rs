//! IDE project export: ordered properties, `workspace.xml`, pointer file

pub mod exporter;
pub mod layout;
pub mod properties;
pub mod workspace_xml;

pub use exporter::{ExportOutcome, IdeaPluginExporter, ProjectExportRequest};
pub use layout::{ProjectLayout, derive_project_name};
pub use properties::{ExportedProperty, PropertiesBuilder, PropertyName};
pub use workspace_xml::render_workspace;
