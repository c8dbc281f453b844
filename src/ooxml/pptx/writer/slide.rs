/// Slide types and implementation for PPTX presentations.
use crate::ooxml::error::Result;

use super::super::backgrounds::SlideBackground;
use super::shape::{AutoShapeType, Frame, MutableShape};
use super::text::TextBody;

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier, 256 and up)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Slide background
    pub(crate) background: Option<SlideBackground>,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            background: None,
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = Some(background);
    }

    pub fn background(&self) -> Option<&SlideBackground> {
        self.background.as_ref()
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    // IDs: 1 = shape tree, 2.. = shapes
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    fn push(&mut self, shape: MutableShape) -> &mut MutableShape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        &mut self.shapes[index]
    }

    /// Add a preset auto shape and return it for styling.
    pub fn add_auto_shape(
        &mut self,
        kind: AutoShapeType,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let frame = Frame::new(x, y, width, height);
        let shape = MutableShape::new_auto_shape(self.next_shape_id(), kind, frame);
        self.push(shape)
    }

    /// Add a text box holding `text` in a single unformatted run.
    ///
    /// The box wraps words and grows to fit its text.
    pub fn add_text_box(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let frame = Frame::new(x, y, width, height);
        let mut shape = MutableShape::new_text_box(self.next_shape_id(), frame);
        shape.set_text(text);
        self.push(shape)
    }

    /// Add a text box with the paragraphs of `body`.
    ///
    /// Like [`add_text_box`](Self::add_text_box), the box wraps words and
    /// grows to fit its text.
    pub fn add_text_body(
        &mut self,
        body: TextBody,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let frame = Frame::new(x, y, width, height);
        let mut shape = MutableShape::new_text_box(self.next_shape_id(), frame);
        shape.text_body_mut().paragraphs = body.paragraphs;
        self.push(shape)
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");

        // Background must come before spTree
        if let Some(ref background) = self.background {
            xml.push_str(&background.to_xml());
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::text::Paragraph;
    use crate::common::RGBColor;
    use crate::ooxml::error::OoxmlError;
    use crate::ooxml::pptx::format::TextFormat;

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = MutableSlide::new(256);
        let first = slide
            .add_auto_shape(AutoShapeType::Rectangle, 0, 0, 10, 10)
            .shape_id();
        let second = slide.add_text_box("x", 0, 0, 10, 10).shape_id();
        assert_eq!((first, second), (2, 3));
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(SlideBackground::solid(RGBColor::new(0x0F, 0x17, 0x2A)));
        slide.add_text_box("Title", 0, 0, 100, 100);

        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains("<a:t>Title</a:t>"));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_text_boxes_fit_text() {
        let mut slide = MutableSlide::new(256);
        slide.add_text_box("plain", 0, 0, 100, 100);
        let mut body = TextBody::new();
        body.add_paragraph(Paragraph::new()).add_run("prepared", TextFormat::new());
        slide.add_text_body(body, 0, 0, 100, 100);
        slide.add_auto_shape(AutoShapeType::Rectangle, 0, 0, 10, 10);

        let xml = slide.to_xml().unwrap();
        let fitted = r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#;
        assert_eq!(xml.matches(fitted).count(), 2);
        assert_eq!(xml.matches("<a:spAutoFit/>").count(), 2);
        assert!(xml.contains("<a:t>prepared</a:t>"));
    }

    #[test]
    fn test_invalid_shape_fails_slide() {
        let mut slide = MutableSlide::new(256);
        slide.add_auto_shape(AutoShapeType::Ellipse, 0, 0, 10, -10);
        assert!(matches!(
            slide.to_xml(),
            Err(OoxmlError::InvalidGeometry { shape_id: 2, .. })
        ));
    }
}
