//! Document properties for OOXML packages.
//!
//! Stored in `docProps/core.xml` (Dublin Core metadata) and
//! `docProps/app.xml` (application statistics). No timestamps are written,
//! which keeps generated packages reproducible.

use crate::common::xml::escape_xml;

/// Document core properties (metadata).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
}

impl DocumentProperties {
    /// Create new empty document properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the document subject.
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the document creator/author.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Generate `docProps/core.xml`.
    pub fn to_core_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let fields = [
            ("dc:title", &self.title),
            ("dc:subject", &self.subject),
            ("dc:creator", &self.creator),
        ];
        for (tag, value) in fields {
            if let Some(value) = value {
                xml.push_str(&format!("<{tag}>{}</{tag}>", escape_xml(value)));
            }
        }

        xml.push_str("<cp:revision>1</cp:revision>");
        xml.push_str("</cp:coreProperties>");
        xml
    }

    /// Generate `docProps/app.xml` for a presentation with `slide_count` slides.
    pub fn to_app_xml(&self, slide_count: usize) -> String {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
        xml.push_str(&format!(
            "<Application>{} {}</Application>",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        xml.push_str("<PresentationFormat>Custom</PresentationFormat>");
        xml.push_str(&format!("<Slides>{}</Slides>", slide_count));
        xml.push_str("<Notes>0</Notes>");
        xml.push_str("<HiddenSlides>0</HiddenSlides>");
        xml.push_str("</Properties>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_xml_includes_set_fields() {
        let props = DocumentProperties::new()
            .title("MCP Governance")
            .creator("Platform & Security");
        let xml = props.to_core_xml();
        assert!(xml.contains("<dc:title>MCP Governance</dc:title>"));
        assert!(xml.contains("<dc:creator>Platform &amp; Security</dc:creator>"));
        assert!(!xml.contains("dc:subject"));
    }

    #[test]
    fn test_app_xml_slide_count() {
        let xml = DocumentProperties::new().to_app_xml(11);
        assert!(xml.contains("<Slides>11</Slides>"));
    }
}
