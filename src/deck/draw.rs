//! Primitive drawing helpers.
//!
//! Every helper appends one shape to the slide. Geometry is in EMU; use
//! [`inches`](crate::common::inches) to convert.

use crate::common::RGBColor;
use crate::ooxml::pptx::{
    AutoShapeType, MutableShape, MutableSlide, Paragraph, SlideBackground, TextAlignment,
    TextBody, TextFormat,
};

use super::palette::{FONT, LIGHT_GRAY, PURPLE_LIGHT, WHITE};

/// Glyph run in front of every bullet list item.
pub const BULLET: &str = "▸ ";

/// Character and paragraph style for [`add_text_box`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub size: f64,
    pub color: RGBColor,
    pub bold: bool,
    pub alignment: TextAlignment,
    pub font: &'static str,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 18.0,
            color: WHITE,
            bold: false,
            alignment: TextAlignment::Left,
            font: FONT,
        }
    }
}

impl TextStyle {
    /// Default style at `size` points in `color`.
    pub fn new(size: f64, color: RGBColor) -> Self {
        Self {
            size,
            color,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = TextAlignment::Center;
        self
    }
}

/// Style for [`add_bullet_list`].
#[derive(Debug, Clone, PartialEq)]
pub struct BulletStyle {
    /// Font size in points
    pub size: f64,
    pub color: RGBColor,
    pub bullet_color: RGBColor,
}

impl Default for BulletStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: LIGHT_GRAY,
            bullet_color: PURPLE_LIGHT,
        }
    }
}

/// Fill the slide background with a solid color.
pub fn set_slide_bg(slide: &mut MutableSlide, color: RGBColor) {
    slide.set_background(SlideBackground::solid(color));
}

/// Add a borderless filled rectangle.
///
/// A non-zero `corner_radius` makes it a rounded rectangle with that first
/// adjustment.
pub fn add_shape(
    slide: &mut MutableSlide,
    left: i64,
    top: i64,
    width: i64,
    height: i64,
    fill: RGBColor,
    corner_radius: Option<f64>,
) -> &mut MutableShape {
    match corner_radius.filter(|r| *r != 0.0) {
        Some(radius) => slide
            .add_auto_shape(AutoShapeType::RoundedRectangle, left, top, width, height)
            .adjustment(0, radius)
            .fill(fill)
            .no_line(),
        None => slide
            .add_auto_shape(AutoShapeType::Rectangle, left, top, width, height)
            .fill(fill)
            .no_line(),
    }
}

/// Add a borderless filled circle.
pub fn add_circle(
    slide: &mut MutableSlide,
    left: i64,
    top: i64,
    diameter: i64,
    fill: RGBColor,
) -> &mut MutableShape {
    slide
        .add_auto_shape(AutoShapeType::Ellipse, left, top, diameter, diameter)
        .fill(fill)
        .no_line()
}

/// Add a word-wrapped text box with one paragraph.
pub fn add_text_box<'a>(
    slide: &'a mut MutableSlide,
    left: i64,
    top: i64,
    width: i64,
    height: i64,
    text: &str,
    style: &TextStyle,
) -> &'a mut MutableShape {
    slide
        .add_text_box(text, left, top, width, height)
        .font_size(style.size)
        .color(style.color)
        .bold(style.bold)
        .font(style.font)
        .alignment(style.alignment)
}

/// Add a text box with one bulleted paragraph per item.
pub fn add_bullet_list<'a, S: AsRef<str>>(
    slide: &'a mut MutableSlide,
    left: i64,
    top: i64,
    width: i64,
    height: i64,
    items: &[S],
    style: &BulletStyle,
) -> &'a mut MutableShape {
    let run_format = |color| {
        TextFormat::new()
            .with_size(style.size)
            .with_color(color)
            .with_font(FONT)
    };

    let mut body = TextBody::new();
    for item in items {
        let para = body.add_paragraph(Paragraph::new().with_spacing(4.0, 8.0));
        para.add_run(BULLET, run_format(style.bullet_color));
        para.add_run(item.as_ref(), run_format(style.color));
    }
    slide.add_text_body(body, left, top, width, height)
}
