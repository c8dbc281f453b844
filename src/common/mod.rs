//! Common types and utilities shared across the crate.
//!
//! Units, colors and XML helpers are used by both the PresentationML writer
//! and the deck content built on top of it.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::RGBColor;
pub use unit::inches;
