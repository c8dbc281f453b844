//! The eleven slide builders, in deck order.
//!
//! Each builder draws onto a blank slide whose background has already been
//! set to [`BG_DARK`].

mod ai_scoring;
mod api;
mod architecture;
mod cicd;
mod closing;
mod configuration;
mod dashboard;
mod problem;
mod scoring;
mod title;
mod vision;

use crate::deck::draw::set_slide_bg;
use crate::deck::palette::BG_DARK;
use crate::ooxml::pptx::{MutablePresentation, MutableSlide};
use tracing::debug;

pub use scoring::{CATEGORIES, MAX_WEIGHT};

/// Draws the content of one slide.
pub type SlideBuilder = fn(&mut MutableSlide);

/// Slide names and builders, in order.
pub const SLIDES: [(&str, SlideBuilder); 11] = [
    ("Title", title::build),
    ("Why MCP Governance?", problem::build),
    ("The Vision", vision::build),
    ("How It Works", architecture::build),
    ("Scoring Model", scoring::build),
    ("AI-Powered Scoring", ai_scoring::build),
    ("Enterprise Dashboard", dashboard::build),
    ("Configuration & Custom Resources", configuration::build),
    ("REST API & Deployment", api::build),
    ("CI/CD & Testing", cicd::build),
    ("Closing", closing::build),
];

/// Append every slide to `pres`.
pub fn build_all(pres: &mut MutablePresentation) {
    for (index, (name, build)) in SLIDES.iter().enumerate() {
        let slide = pres.add_slide();
        set_slide_bg(slide, BG_DARK);
        build(slide);
        debug!(
            slide = index + 1,
            name = *name,
            shapes = slide.shape_count(),
            "built slide"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built() -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        build_all(&mut pres);
        pres
    }

    #[test]
    fn test_every_slide_has_dark_background() {
        let pres = built();
        assert_eq!(pres.slide_count(), SLIDES.len());
        for slide in pres.slides() {
            assert_eq!(slide.background().map(|b| b.color()), Some(BG_DARK));
            assert!(slide.shape_count() > 0);
        }
    }

    #[test]
    fn test_section_headers() {
        let pres = built();
        // Slides 2-10 open with the three accent blocks and a 32 pt title.
        for slide in &pres.slides()[1..10] {
            let shapes = slide.shapes();
            assert!(shapes[..3].iter().all(|s| !s.is_text_box()));
            let title = &shapes[3].text_body().paragraphs()[0].runs()[0];
            assert_eq!(title.format().size, Some(32.0));
            assert_eq!(title.format().bold, Some(true));
        }
        let vision = &pres.slides()[2].shapes()[3];
        assert_eq!(vision.text_body().text(), "The Vision");
    }

    #[test]
    fn test_problem_grid() {
        let pres = built();
        let slide = &pres.slides()[1];
        // header (5) + 6 cards (5 each) + stat bar (2)
        assert_eq!(slide.shape_count(), 5 + 6 * 5 + 2);
    }
}
