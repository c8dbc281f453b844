//! Styling primitives shared by the writer and the deck content.

pub mod color;

pub use color::RGBColor;
