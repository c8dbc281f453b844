//! Crate-level error type.
//!
//! Lower layers (OPC packaging, PresentationML writing) keep their own error
//! enums; this module folds them into one type for deck generation.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
