//! Format types for PPTX text.

use crate::common::RGBColor;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlignment {
    /// Value of the `algn` attribute on `<a:pPr>`.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Character formatting for a text run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

impl TextFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_attr() {
        assert_eq!(TextAlignment::default(), TextAlignment::Left);
        assert_eq!(TextAlignment::Center.as_attr(), "ctr");
        assert_eq!(TextAlignment::Left.as_attr(), "l");
        assert_eq!(TextAlignment::Right.as_attr(), "r");
    }

    #[test]
    fn test_format_builder() {
        let fmt = TextFormat::new()
            .with_font("Calibri")
            .with_size(12.0)
            .with_color(RGBColor::new(0, 0, 0));
        assert_eq!(fmt.font.as_deref(), Some("Calibri"));
        assert_eq!(fmt.size, Some(12.0));
        assert!(TextFormat::new().color.is_none());
    }
}
