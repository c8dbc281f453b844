//! Deck configuration.
//!
//! Every field is optional; a missing file section falls back to the
//! defaults below.
//!
//! ```yaml
//! output: out/MCP-Governance.pptx
//! slide_width: 13.333
//! slide_height: 7.5
//! title: MCP Governance
//! author: Platform Team
//! ```

use crate::common::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "MCP-Governance-Presentation.pptx";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    /// Where the deck is written.
    pub output: PathBuf,

    /// Slide width in inches.
    pub slide_width: f64,

    /// Slide height in inches.
    pub slide_height: f64,

    /// Document title stored in the core properties.
    pub title: String,

    /// Document creator stored in the core properties.
    pub author: Option<String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            slide_width: 13.333,
            slide_height: 7.5,
            title: "MCP Governance".to_string(),
            author: None,
        }
    }
}

impl DeckConfig {
    /// Parse a configuration from YAML text. `origin` names the source in errors.
    pub fn from_yaml(contents: &str, origin: &Path) -> Result<Self> {
        serde_saphyr::from_str(contents).map_err(|e| Error::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&contents, path)
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = output.into();
        self
    }
}
