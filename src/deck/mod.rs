//! The MCP Governance deck.
//!
//! [`build_deck`] assembles the eleven slides in memory; [`generate`] also
//! writes them to the configured output path.

pub mod draw;
pub mod layout;
pub mod palette;
pub mod slides;
pub mod widgets;

use crate::common::{Error, Result, inches};
use crate::config::DeckConfig;
use crate::ooxml::DocumentProperties;
use crate::ooxml::pptx::{DeckSummary, MutablePresentation};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Number of slides in the deck.
pub const SLIDE_COUNT: usize = slides::SLIDES.len();

/// Outcome of a successful [`generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub slide_count: usize,
}

impl GenerationReport {
    /// The two lines printed after a successful run.
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!("✅ Presentation saved to: {}", self.output.display()),
            format!("   Slides: {}", self.slide_count),
        ]
    }
}

/// Build the deck in memory.
pub fn build_deck(config: &DeckConfig) -> MutablePresentation {
    let mut pres = MutablePresentation::new();
    pres.set_slide_size(inches(config.slide_width), inches(config.slide_height));

    let mut properties = DocumentProperties::new()
        .title(&config.title)
        .subject("Kubernetes-native governance for MCP infrastructure");
    if let Some(ref author) = config.author {
        properties = properties.creator(author);
    }
    pres.set_properties(properties);

    slides::build_all(&mut pres);
    debug!(
        slides = pres.slide_count(),
        width = pres.slide_width(),
        height = pres.slide_height(),
        "deck built"
    );
    pres
}

/// Build the deck and write it to `config.output`.
pub fn generate(config: &DeckConfig) -> Result<GenerationReport> {
    let pres = build_deck(config);
    pres.save(&config.output)?;
    info!(path = %config.output.display(), slides = pres.slide_count(), "presentation saved");

    Ok(GenerationReport {
        output: config.output.clone(),
        slide_count: pres.slide_count(),
    })
}

/// Reopen a written deck and check its slide count.
pub fn verify(path: &Path, expected: usize) -> Result<DeckSummary> {
    let summary = DeckSummary::open(path)?;
    if summary.slide_count() != expected {
        return Err(Error::Verification {
            path: path.to_path_buf(),
            expected,
            found: summary.slide_count(),
        });
    }
    info!(path = %path.display(), slides = summary.slide_count(), "verified");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::palette::BG_DARK;

    fn config_in(dir: &tempfile::TempDir, name: &str) -> DeckConfig {
        DeckConfig::default().with_output(dir.path().join(name))
    }

    #[test]
    fn test_generate_writes_eleven_slides() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, "deck.pptx");

        let report = generate(&config).unwrap();
        assert_eq!(report.slide_count, 11);
        assert_eq!(report.summary_lines()[1], "   Slides: 11");
        assert!(report.summary_lines()[0].starts_with("✅ Presentation saved to: "));

        let summary = verify(&config.output, SLIDE_COUNT).unwrap();
        assert_eq!(summary.slide_width, 12_191_695);
        assert_eq!(summary.slide_height, 6_858_000);
        for slide in &summary.slides {
            assert_eq!(slide.background, Some(BG_DARK));
        }
        assert!(summary.slides[0].texts.iter().any(|t| t.contains("MCP Governance")));
        assert!(summary.slides[4].texts.iter().any(|t| t.contains("25%")));
        assert!(summary.slides[7].texts.iter().any(|t| t == "▸ "));
    }

    #[test]
    fn test_output_is_deterministic() {
        let config = DeckConfig::default();
        let first = build_deck(&config).to_bytes().unwrap();
        let second = build_deck(&config).to_bytes().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_verify_detects_wrong_count() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, "deck.pptx");
        generate(&config).unwrap();

        let err = verify(&config.output, 12).unwrap_err();
        assert!(matches!(
            err,
            Error::Verification {
                expected: 12,
                found: 11,
                ..
            }
        ));
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir, "missing/dir/deck.pptx");
        assert!(generate(&config).is_err());
    }

    #[test]
    fn test_author_in_core_properties() {
        let config = DeckConfig {
            author: Some("Platform Team".to_string()),
            ..DeckConfig::default()
        };
        let pres = build_deck(&config);
        assert_eq!(pres.properties().creator.as_deref(), Some("Platform Team"));
        assert_eq!(pres.properties().title.as_deref(), Some("MCP Governance"));
    }
}
