//! govdeck - builds the MCP Governance overview deck as a PowerPoint file
//!
//! The crate has two layers:
//!
//! - [`ooxml`]: a small PresentationML writer. Slides hold auto shapes and
//!   text boxes; [`ooxml::opc`] packages the rendered parts into a `.pptx`
//!   zip, and [`ooxml::pptx::DeckSummary`] reads one back.
//! - [`deck`]: the fixed eleven-slide deck, drawn with a handful of
//!   helpers over that writer.
//!
//! # Example
//!
//! ```no_run
//! use govdeck::{DeckConfig, deck};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DeckConfig::default().with_output("deck.pptx");
//! let report = deck::generate(&config)?;
//! for line in report.summary_lines() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Output is reproducible: generating twice yields identical bytes.

pub mod common;
pub mod config;
pub mod deck;
pub mod ooxml;

pub use common::{Error, Result};
pub use config::DeckConfig;
pub use deck::{GenerationReport, build_deck, generate};
