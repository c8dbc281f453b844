//! XML text helpers shared by the writer and the package reader.

mod escape;

pub use escape::{escape_xml, unescape_xml};
