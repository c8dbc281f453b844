//! Office Open XML writing support.
//!
//! - [`opc`]: the packaging layer (parts, relationships, ZIP container)
//! - [`pptx`]: PresentationML presentations, slides and shapes
//! - [`properties`]: document core and extended properties

pub mod error;
pub mod opc;
pub mod pptx;
pub mod properties;

pub use error::{OoxmlError, Result};
pub use properties::DocumentProperties;
