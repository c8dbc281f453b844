//! Slide background support.
//!
//! Only solid fills are written; the background must come before the shape
//! tree inside `<p:cSld>`.

use crate::common::RGBColor;

/// Solid background fill for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideBackground {
    color: RGBColor,
}

impl SlideBackground {
    /// Create a solid color background.
    pub fn solid(color: RGBColor) -> Self {
        Self { color }
    }

    /// Fill color of the background.
    pub fn color(&self) -> RGBColor {
        self.color
    }

    /// Generate the `<p:bg>` element.
    pub fn to_xml(&self) -> String {
        format!(
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
            self.color.to_hex()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_background_xml() {
        let bg = SlideBackground::solid(RGBColor::new(0x0F, 0x17, 0x2A));
        let xml = bg.to_xml();
        assert!(xml.starts_with("<p:bg><p:bgPr>"));
        assert!(xml.contains(r#"<a:srgbClr val="0F172A"/>"#));
        assert!(xml.contains("<a:effectLst/>"));
    }
}
