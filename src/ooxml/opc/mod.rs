/// Open Packaging Conventions (OPC) implementation.
///
/// The writing half of OPC: parts, relationships, content types and the ZIP
/// container. A small reader is kept for inspecting written packages.
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
