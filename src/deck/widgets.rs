//! Composite widgets built from the drawing primitives.

use crate::common::{RGBColor, inches};
use crate::ooxml::pptx::MutableSlide;

use super::draw::{TextStyle, add_shape, add_text_box};
use super::palette::{BG_CARD, GRAY, PINK, PURPLE, PURPLE_LIGHT, WHITE};

/// Content of an icon card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconCard<'a> {
    pub icon: &'a str,
    pub title: &'a str,
    pub desc: &'a str,
    pub accent: RGBColor,
}

impl<'a> IconCard<'a> {
    /// Card with the default PURPLE accent.
    pub fn new(icon: &'a str, title: &'a str, desc: &'a str) -> Self {
        Self {
            icon,
            title,
            desc,
            accent: PURPLE,
        }
    }

    pub fn accent(mut self, accent: RGBColor) -> Self {
        self.accent = accent;
        self
    }
}

/// Draw a rounded card with a top accent bar, an icon glyph, a bold title
/// and a gray description.
pub fn add_icon_card(
    slide: &mut MutableSlide,
    left: i64,
    top: i64,
    width: i64,
    height: i64,
    card: &IconCard<'_>,
) {
    add_shape(slide, left, top, width, height, BG_CARD, Some(0.05));
    add_shape(slide, left, top, width, inches(0.04), card.accent, None);
    add_text_box(
        slide,
        left + inches(0.3),
        top + inches(0.25),
        inches(1.0),
        inches(0.5),
        card.icon,
        &TextStyle::new(28.0, card.accent).bold(),
    );
    add_text_box(
        slide,
        left + inches(0.3),
        top + inches(0.7),
        width - inches(0.6),
        inches(0.4),
        card.title,
        &TextStyle::new(15.0, WHITE).bold(),
    );
    add_text_box(
        slide,
        left + inches(0.3),
        top + inches(1.05),
        width - inches(0.6),
        height - inches(1.2),
        card.desc,
        &TextStyle::new(11.0, GRAY),
    );
}

/// Draw three abutting blocks (PURPLE, PURPLE_LIGHT, PINK) that read as a
/// gradient bar.
pub fn add_gradient_accent(slide: &mut MutableSlide, left: i64, top: i64, width: i64, height: i64) {
    let third = width / 3;
    add_shape(slide, left, top, third, height, PURPLE, None);
    add_shape(slide, left + third, top, third, height, PURPLE_LIGHT, None);
    // last block is widened past the division remainder
    add_shape(slide, left + third * 2, top, third + 10, height, PINK, None);
}

/// Draw the gradient accent, a 32 pt title and an optional gray subtitle.
pub fn add_section_header(slide: &mut MutableSlide, title: &str, subtitle: Option<&str>) {
    add_gradient_accent(slide, inches(0.8), inches(0.7), inches(2.0), inches(0.05));
    add_text_box(
        slide,
        inches(0.8),
        inches(0.85),
        inches(8.0),
        inches(0.7),
        title,
        &TextStyle::new(32.0, WHITE).bold(),
    );
    if let Some(subtitle) = subtitle {
        add_text_box(
            slide,
            inches(0.8),
            inches(1.45),
            inches(8.0),
            inches(0.5),
            subtitle,
            &TextStyle::new(16.0, GRAY),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::{AutoShapeType, MutablePresentation};

    #[test]
    fn test_icon_card_layout() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        let card = IconCard::new("🔓", "No Authentication", "line one\nline two");
        add_icon_card(slide, inches(0.8), inches(2.2), inches(3.7), inches(2.1), &card);

        let shapes = slide.shapes();
        assert_eq!(shapes.len(), 5);
        assert_eq!(shapes[0].auto_shape_type(), Some(AutoShapeType::RoundedRectangle));
        assert_eq!(shapes[1].fill_color(), Some(PURPLE));
        assert_eq!(shapes[1].frame().height, inches(0.04));
        assert_eq!(shapes[2].text_body().text(), "🔓");
        assert_eq!(shapes[3].frame().width, inches(3.7) - inches(0.6));
        assert_eq!(shapes[4].frame().height, inches(2.1) - inches(1.2));
        assert_eq!(shapes[4].text_body().text(), "line one\nline two");
    }

    #[test]
    fn test_gradient_accent_blocks() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        add_gradient_accent(slide, 100, 0, 1000, 5);

        let frames: Vec<_> = slide.shapes().iter().map(|s| s.frame()).collect();
        assert_eq!((frames[0].x, frames[0].width), (100, 333));
        assert_eq!((frames[1].x, frames[1].width), (433, 333));
        assert_eq!((frames[2].x, frames[2].width), (766, 343));
        assert_eq!(slide.shapes()[2].fill_color(), Some(PINK));
    }

    #[test]
    fn test_section_header_subtitle_optional() {
        let mut pres = MutablePresentation::new();
        let with = pres.add_slide();
        add_section_header(with, "Scoring Model", Some("subtitle"));
        assert_eq!(with.shape_count(), 5);

        let without = pres.add_slide();
        add_section_header(without, "Scoring Model", None);
        assert_eq!(without.shape_count(), 4);
    }
}
