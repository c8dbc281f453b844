//! Text bodies for shapes: paragraphs of formatted runs.
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::super::format::{TextAlignment, TextFormat};

/// A run of text sharing one character format.
///
/// Line feeds in the text become `<a:br>` line breaks that keep the run's
/// formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub(crate) text: String,
    pub(crate) format: TextFormat,
}

impl TextRun {
    pub fn new(text: &str, format: TextFormat) -> Self {
        Self {
            text: text.to_string(),
            format,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    pub fn format_mut(&mut self) -> &mut TextFormat {
        &mut self.format
    }

    fn write_rpr(&self, xml: &mut String) -> Result<()> {
        let format = &self.format;
        xml.push_str(r#"<a:rPr lang="en-US""#);
        if let Some(size) = format.size {
            write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
        }
        if let Some(bold) = format.bold {
            xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
        }
        xml.push_str(r#" dirty="0""#);

        if format.color.is_none() && format.font.is_none() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');
        // CT_TextCharacterProperties: fill before latin
        if let Some(color) = format.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        if let Some(ref font) = format.font {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
        }
        xml.push_str("</a:rPr>");
        Ok(())
    }

    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        for (i, line) in self.text.split('\n').enumerate() {
            if i > 0 {
                xml.push_str("<a:br>");
                self.write_rpr(xml)?;
                xml.push_str("</a:br>");
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            self.write_rpr(xml)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
            xml.push_str("</a:r>");
        }
        Ok(())
    }
}

/// A paragraph: alignment, spacing and a sequence of runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub(crate) runs: Vec<TextRun>,
    pub(crate) alignment: Option<TextAlignment>,
    /// Space before in points
    pub(crate) space_before: Option<f64>,
    /// Space after in points
    pub(crate) space_after: Option<f64>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run and return it for further formatting.
    pub fn add_run(&mut self, text: &str, format: TextFormat) -> &mut TextRun {
        let index = self.runs.len();
        self.runs.push(TextRun::new(text, format));
        &mut self.runs[index]
    }

    pub fn with_spacing(mut self, before_pt: f64, after_pt: f64) -> Self {
        self.space_before = Some(before_pt);
        self.space_after = Some(after_pt);
        self
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn alignment(&self) -> Option<TextAlignment> {
        self.alignment
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");
        let has_ppr =
            self.alignment.is_some() || self.space_before.is_some() || self.space_after.is_some();
        if has_ppr {
            xml.push_str("<a:pPr");
            if let Some(alignment) = self.alignment {
                write!(xml, r#" algn="{}""#, alignment.as_attr())?;
            }
            if self.space_before.is_none() && self.space_after.is_none() {
                xml.push_str("/>");
            } else {
                xml.push('>');
                if let Some(before) = self.space_before {
                    write!(
                        xml,
                        r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#,
                        pt_to_centipoints(before)
                    )?;
                }
                if let Some(after) = self.space_after {
                    write!(
                        xml,
                        r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                        pt_to_centipoints(after)
                    )?;
                }
                xml.push_str("</a:pPr>");
            }
        }
        for run in &self.runs {
            run.write_xml(xml)?;
        }
        xml.push_str("</a:p>");
        Ok(())
    }
}

/// The text frame of a shape.
///
/// Words always wrap at the shape's edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBody {
    pub(crate) paragraphs: Vec<Paragraph>,
    /// Shape resizes to fit its text
    pub(crate) auto_fit: bool,
}

impl TextBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text body for a text box: the shape resizes to fit its text.
    pub(crate) fn for_text_box() -> Self {
        Self {
            auto_fit: true,
            ..Self::default()
        }
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        let index = self.paragraphs.len();
        self.paragraphs.push(paragraph);
        &mut self.paragraphs[index]
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraphs_mut(&mut self) -> &mut [Paragraph] {
        &mut self.paragraphs
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.runs.is_empty())
    }

    /// Paragraph texts joined with `\n`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0""#);
        if self.auto_fit {
            xml.push_str("><a:spAutoFit/></a:bodyPr>");
        } else {
            xml.push_str("/>");
        }
        xml.push_str("<a:lstStyle/>");
        if self.paragraphs.is_empty() {
            // A text body needs at least one paragraph.
            xml.push_str("<a:p/>");
        }
        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml)?;
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    fn render(body: &TextBody) -> String {
        let mut xml = String::new();
        body.write_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_run_properties_order() {
        let mut body = TextBody::for_text_box();
        let mut para = Paragraph::new();
        para.add_run(
            "Hi",
            TextFormat {
                bold: Some(true),
                ..TextFormat::new()
                    .with_size(18.0)
                    .with_font("Calibri")
                    .with_color(RGBColor::new(0xFF, 0xFF, 0xFF))
            },
        );
        body.add_paragraph(para);

        let xml = render(&body);
        assert!(xml.contains(r#"<a:rPr lang="en-US" sz="1800" b="1" dirty="0">"#));
        let fill = xml.find("<a:solidFill>").unwrap();
        let latin = xml.find("<a:latin").unwrap();
        assert!(fill < latin);
        assert!(xml.contains("<a:spAutoFit/>"));
        assert!(xml.contains(r#"wrap="square""#));
    }

    #[test]
    fn test_line_feed_becomes_break() {
        let mut para = Paragraph::new();
        para.add_run("one\ntwo", TextFormat::new().with_size(11.0));
        let mut body = TextBody::new();
        body.add_paragraph(para);

        let xml = render(&body);
        assert_eq!(xml.matches("<a:br>").count(), 1);
        assert_eq!(xml.matches("<a:r>").count(), 2);
        assert!(xml.contains("<a:t>one</a:t>"));
        assert!(xml.contains("<a:t>two</a:t>"));
        assert_eq!(body.text(), "one\ntwo");
    }

    #[test]
    fn test_paragraph_spacing_and_alignment() {
        let para = Paragraph {
            alignment: Some(TextAlignment::Center),
            ..Paragraph::new().with_spacing(4.0, 8.0)
        };
        let mut xml = String::new();
        para.write_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<a:p><a:pPr algn="ctr">"#,
                r#"<a:spcBef><a:spcPts val="400"/></a:spcBef>"#,
                r#"<a:spcAft><a:spcPts val="800"/></a:spcAft>"#,
                "</a:pPr></a:p>"
            )
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let mut para = Paragraph::new();
        para.add_run("a < b & \"c\"", TextFormat::new());
        let mut xml = String::new();
        para.write_xml(&mut xml).unwrap();
        assert!(xml.contains("<a:t>a &lt; b &amp; &quot;c&quot;</a:t>"));
    }

    #[test]
    fn test_empty_body_has_paragraph() {
        let xml = render(&TextBody::new());
        assert!(xml.contains("<a:lstStyle/><a:p/></p:txBody>"));
    }
}
