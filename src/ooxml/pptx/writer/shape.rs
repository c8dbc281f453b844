/// Shape types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::common::unit::adjust_to_val;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

use super::super::format::{TextAlignment, TextFormat};
use super::text::{Paragraph, TextBody};

/// Preset geometries the writer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoShapeType {
    Rectangle,
    RoundedRectangle,
    Ellipse,
}

impl AutoShapeType {
    /// Value of the `prst` attribute.
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Ellipse => "ellipse",
        }
    }

    /// Base for the shape's `name` attribute.
    fn base_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Ellipse => "Oval",
        }
    }
}

/// Position and size in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Frame {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShapeType {
    AutoShape {
        kind: AutoShapeType,
        /// Adjustment values as fractions, e.g. `0.05`
        adjustments: Vec<f64>,
        fill: Option<RGBColor>,
        line: bool,
        text: TextBody,
    },
    TextBox {
        text: TextBody,
    },
}

/// A shape on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableShape {
    pub(crate) shape_id: u32,
    pub(crate) frame: Frame,
    pub(crate) shape_type: ShapeType,
}

impl MutableShape {
    pub(crate) fn new_auto_shape(shape_id: u32, kind: AutoShapeType, frame: Frame) -> Self {
        Self {
            shape_id,
            frame,
            shape_type: ShapeType::AutoShape {
                kind,
                adjustments: Vec::new(),
                fill: None,
                line: true,
                text: TextBody::new(),
            },
        }
    }

    pub(crate) fn new_text_box(shape_id: u32, frame: Frame) -> Self {
        Self {
            shape_id,
            frame,
            shape_type: ShapeType::TextBox {
                text: TextBody::for_text_box(),
            },
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Value of the shape's `name` attribute, e.g. "TextBox 5".
    pub fn name(&self) -> String {
        let base = match &self.shape_type {
            ShapeType::AutoShape { kind, .. } => kind.base_name(),
            ShapeType::TextBox { .. } => "TextBox",
        };
        format!("{} {}", base, self.shape_id - 1)
    }

    pub fn is_text_box(&self) -> bool {
        matches!(self.shape_type, ShapeType::TextBox { .. })
    }

    pub fn auto_shape_type(&self) -> Option<AutoShapeType> {
        match &self.shape_type {
            ShapeType::AutoShape { kind, .. } => Some(*kind),
            ShapeType::TextBox { .. } => None,
        }
    }

    pub fn fill_color(&self) -> Option<RGBColor> {
        match &self.shape_type {
            ShapeType::AutoShape { fill, .. } => *fill,
            ShapeType::TextBox { .. } => None,
        }
    }

    pub fn adjustments(&self) -> &[f64] {
        match &self.shape_type {
            ShapeType::AutoShape { adjustments, .. } => adjustments,
            ShapeType::TextBox { .. } => &[],
        }
    }

    /// Set a solid fill (auto shapes only).
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::AutoShape { ref mut fill, .. } = self.shape_type {
            *fill = Some(color);
        }
        self
    }

    /// Remove the outline (auto shapes only).
    pub fn no_line(&mut self) -> &mut Self {
        if let ShapeType::AutoShape { ref mut line, .. } = self.shape_type {
            *line = false;
        }
        self
    }

    /// Set adjustment `index`, padding earlier ones with zero.
    pub fn adjustment(&mut self, index: usize, value: f64) -> &mut Self {
        if let ShapeType::AutoShape {
            ref mut adjustments,
            ..
        } = self.shape_type
        {
            if adjustments.len() <= index {
                adjustments.resize(index + 1, 0.0);
            }
            adjustments[index] = value;
        }
        self
    }

    pub fn text_body(&self) -> &TextBody {
        match &self.shape_type {
            ShapeType::AutoShape { text, .. } | ShapeType::TextBox { text } => text,
        }
    }

    pub fn text_body_mut(&mut self) -> &mut TextBody {
        match &mut self.shape_type {
            ShapeType::AutoShape { text, .. } | ShapeType::TextBox { text } => text,
        }
    }

    /// Replace the text with a single paragraph holding one run.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        let body = self.text_body_mut();
        body.paragraphs.clear();
        body.add_paragraph(Paragraph::new()).add_run(text, TextFormat::new());
        self
    }

    /// Builder method: set font.
    pub fn font(&mut self, font: &str) -> &mut Self {
        self.for_each_format(|f| f.font = Some(font.to_string()))
    }

    /// Builder method: set font size in points.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.for_each_format(|f| f.size = Some(size))
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.for_each_format(|f| f.bold = Some(bold))
    }

    /// Builder method: set text color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.for_each_format(|f| f.color = Some(color))
    }

    /// Builder method: set alignment of every paragraph.
    pub fn alignment(&mut self, alignment: TextAlignment) -> &mut Self {
        for para in self.text_body_mut().paragraphs_mut() {
            para.alignment = Some(alignment);
        }
        self
    }

    fn for_each_format(&mut self, mut apply: impl FnMut(&mut TextFormat)) -> &mut Self {
        for para in self.text_body_mut().paragraphs_mut() {
            for run in para.runs.iter_mut() {
                apply(run.format_mut());
            }
        }
        self
    }

    fn validate(&self) -> Result<()> {
        let Frame { width, height, .. } = self.frame;
        if width < 0 || height < 0 {
            return Err(OoxmlError::InvalidGeometry {
                shape_id: self.shape_id,
                reason: format!("negative extent {}x{} EMU", width, height),
            });
        }
        Ok(())
    }

    fn write_xfrm(&self, xml: &mut String) -> Result<()> {
        let Frame {
            x,
            y,
            width,
            height,
        } = self.frame;
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width, height)?;
        xml.push_str("</a:xfrm>");
        Ok(())
    }

    /// Generate the `<p:sp>` element for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        self.validate()?;

        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            self.name()
        )?;

        match &self.shape_type {
            ShapeType::TextBox { text } => {
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                self.write_xfrm(xml)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                text.write_xml(xml)?;
            },
            ShapeType::AutoShape {
                kind,
                adjustments,
                fill,
                line,
                text,
            } => {
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                self.write_xfrm(xml)?;
                write!(xml, r#"<a:prstGeom prst="{}">"#, kind.preset())?;
                if adjustments.is_empty() {
                    xml.push_str("<a:avLst/>");
                } else {
                    xml.push_str("<a:avLst>");
                    for (i, value) in adjustments.iter().enumerate() {
                        let name = if i == 0 {
                            "adj".to_string()
                        } else {
                            format!("adj{}", i + 1)
                        };
                        write!(
                            xml,
                            r#"<a:gd name="{}" fmla="val {}"/>"#,
                            name,
                            adjust_to_val(*value)
                        )?;
                    }
                    xml.push_str("</a:avLst>");
                }
                xml.push_str("</a:prstGeom>");

                if let Some(color) = fill {
                    write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        color.to_hex()
                    )?;
                }
                if !line {
                    xml.push_str("<a:ln><a:noFill/></a:ln>");
                }
                xml.push_str("</p:spPr>");

                // Theme style so unset fill/line fall back to accent1
                xml.push_str(concat!(
                    "<p:style>",
                    r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#,
                    r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#,
                    r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#,
                    r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#,
                    "</p:style>",
                ));

                text.write_xml(xml)?;
            },
        }

        xml.push_str("</p:sp>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shape: &MutableShape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_rounded_rectangle_xml() {
        let mut shape = MutableShape::new_auto_shape(
            2,
            AutoShapeType::RoundedRectangle,
            Frame::new(0, 0, 914400, 457200),
        );
        shape
            .fill(RGBColor::new(0x1E, 0x29, 0x3B))
            .no_line()
            .adjustment(0, 0.05);

        let xml = render(&shape);
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rounded Rectangle 1"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains(r#"<a:gd name="adj" fmla="val 5000"/>"#));
        assert!(xml.contains(r#"<a:srgbClr val="1E293B"/>"#));
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
        assert_eq!(shape.adjustments(), &[0.05]);
    }

    #[test]
    fn test_rectangle_without_adjustments() {
        let shape =
            MutableShape::new_auto_shape(3, AutoShapeType::Rectangle, Frame::new(1, 2, 3, 4));
        let xml = render(&shape);
        assert!(xml.contains(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#));
        assert!(xml.contains(r#"<a:off x="1" y="2"/><a:ext cx="3" cy="4"/>"#));
        assert!(!xml.contains("<a:ln>"));
    }

    #[test]
    fn test_text_box_formatting() {
        let mut shape = MutableShape::new_text_box(4, Frame::new(0, 0, 100, 100));
        shape
            .set_text("Hello")
            .font("Calibri")
            .font_size(32.0)
            .bold(true)
            .color(RGBColor::new(0xFF, 0xFF, 0xFF))
            .alignment(TextAlignment::Center);

        assert!(shape.is_text_box());
        assert_eq!(shape.name(), "TextBox 3");
        let xml = render(&shape);
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"sz="3200" b="1""#));
        assert!(xml.contains("<a:t>Hello</a:t>"));
        assert_eq!(shape.text_body().text(), "Hello");
    }

    #[test]
    fn test_negative_extent_rejected() {
        let shape =
            MutableShape::new_auto_shape(7, AutoShapeType::Rectangle, Frame::new(0, 0, -1, 10));
        let mut xml = String::new();
        let err = shape.to_xml(&mut xml).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidGeometry { shape_id: 7, .. }));
    }

    #[test]
    fn test_fill_ignored_on_text_box() {
        let mut shape = MutableShape::new_text_box(2, Frame::default());
        shape.fill(RGBColor::new(1, 2, 3)).adjustment(0, 0.1);
        assert!(shape.fill_color().is_none());
        assert!(shape.adjustments().is_empty());
        assert!(shape.auto_shape_type().is_none());
    }
}
