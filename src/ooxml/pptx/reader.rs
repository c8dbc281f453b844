//! Read-back of written presentations.
//!
//! [`DeckSummary`] reopens a `.pptx` and extracts what a generated deck can
//! be checked against: slide count and size, and per slide the background
//! color, the number of shapes and the text of every run.

use crate::common::RGBColor;
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::PackURI;
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::pptx::package::PRESENTATION_URI;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::path::Path;

/// Contents of one slide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideSummary {
    /// Solid background color, if the slide overrides the master's
    pub background: Option<RGBColor>,
    /// Number of `<p:sp>` shapes in the shape tree
    pub shape_count: usize,
    /// Text of every run, in document order
    pub texts: Vec<String>,
}

/// Contents of a presentation package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckSummary {
    pub slide_width: i64,
    pub slide_height: i64,
    pub slides: Vec<SlideSummary>,
}

impl DeckSummary {
    /// Read the summary of the `.pptx` file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Read the summary of an in-memory `.pptx`.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let mut reader = PhysPkgReader::from_bytes(data)?;
        let pres_uri = pack_uri(PRESENTATION_URI)?;
        let pres_xml = reader.xml_for(&pres_uri)?;
        let rels_xml = reader.xml_for(&pres_uri.rels_uri().map_err(OpcError::InvalidPackUri)?)?;

        let presentation = parse_presentation(&pres_xml)?;
        let targets = parse_relationships(&rels_xml)?;

        let mut slides = Vec::with_capacity(presentation.slide_rel_ids.len());
        for r_id in &presentation.slide_rel_ids {
            let target = targets
                .get(r_id)
                .ok_or_else(|| OoxmlError::PartNotFound(format!("slide relationship {}", r_id)))?;
            let slide_uri = pack_uri(&resolve_target(pres_uri.base_uri(), target))?;
            let slide_xml = reader.xml_for(&slide_uri)?;
            slides.push(parse_slide(&slide_xml)?);
        }

        Ok(Self {
            slide_width: presentation.width,
            slide_height: presentation.height,
            slides,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

fn pack_uri(s: &str) -> Result<PackURI> {
    Ok(PackURI::new(s).map_err(OpcError::InvalidPackUri)?)
}

/// Resolve a relative relationship target against a part's directory.
fn resolve_target(base_uri: &str, target: &str) -> String {
    if target.starts_with('/') {
        return target.to_string();
    }
    let mut segments: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            ".." => {
                segments.pop();
            },
            "." | "" => {},
            other => segments.push(other),
        }
    }
    format!("/{}", segments.join("/"))
}

fn attr(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    match e.try_get_attribute(name).map_err(OpcError::from)? {
        Some(a) => {
            let raw = std::str::from_utf8(&a.value).map_err(OpcError::from)?;
            Ok(Some(unescape_xml(raw)))
        },
        None => Ok(None),
    }
}

fn required_attr(e: &BytesStart<'_>, name: &[u8]) -> Result<String> {
    attr(e, name)?.ok_or_else(|| {
        OoxmlError::InvalidFormat(format!(
            "<{}> without {} attribute",
            String::from_utf8_lossy(e.name().as_ref()),
            String::from_utf8_lossy(name)
        ))
    })
}

fn parse_i64(value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|_| OoxmlError::InvalidFormat(format!("not an integer: {}", value)))
}

struct PresentationInfo {
    slide_rel_ids: Vec<String>,
    width: i64,
    height: i64,
}

fn parse_presentation(xml: &str) -> Result<PresentationInfo> {
    let mut reader = Reader::from_str(xml);
    let mut info = PresentationInfo {
        slide_rel_ids: Vec::new(),
        width: 0,
        height: 0,
    };

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"sldId" => info.slide_rel_ids.push(required_attr(&e, b"r:id")?),
                b"sldSz" => {
                    info.width = parse_i64(&required_attr(&e, b"cx")?)?;
                    info.height = parse_i64(&required_attr(&e, b"cy")?)?;
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(info)
}

fn parse_relationships(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                targets.insert(required_attr(&e, b"Id")?, required_attr(&e, b"Target")?);
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(targets)
}

/// Text of a general entity reference such as `amp` or `#x25B8`.
fn resolve_entity(name: &str) -> String {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => num.parse().ok(),
        };
        if let Some(c) = code.and_then(char::from_u32) {
            return c.to_string();
        }
    }
    unescape_xml(&format!("&{};", name))
}

fn parse_slide(xml: &str) -> Result<SlideSummary> {
    let mut reader = Reader::from_str(xml);
    let mut summary = SlideSummary::default();
    let mut in_bg = false;
    let mut current_text: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"bg" => in_bg = true,
                b"sp" => summary.shape_count += 1,
                b"t" => current_text = Some(String::new()),
                _ => {},
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"srgbClr" if in_bg && summary.background.is_none() => {
                    let val = required_attr(&e, b"val")?;
                    let color = RGBColor::from_hex(&val).ok_or_else(|| {
                        OoxmlError::InvalidFormat(format!("bad background color {}", val))
                    })?;
                    summary.background = Some(color);
                },
                b"t" => summary.texts.push(String::new()),
                _ => {},
            },
            Event::Text(t) => {
                if let Some(ref mut text) = current_text {
                    text.push_str(std::str::from_utf8(&t).map_err(OpcError::from)?);
                }
            },
            Event::GeneralRef(r) => {
                if let Some(ref mut text) = current_text {
                    let name = std::str::from_utf8(&r).map_err(OpcError::from)?;
                    text.push_str(&resolve_entity(name));
                }
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"bg" => in_bg = false,
                b"t" => {
                    if let Some(text) = current_text.take() {
                        summary.texts.push(text);
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::backgrounds::SlideBackground;
    use crate::ooxml::pptx::writer::MutablePresentation;

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("/ppt", "slides/slide1.xml"), "/ppt/slides/slide1.xml");
        assert_eq!(
            resolve_target("/ppt/slides", "../slideLayouts/slideLayout1.xml"),
            "/ppt/slideLayouts/slideLayout1.xml"
        );
        assert_eq!(resolve_target("/ppt", "/docProps/app.xml"), "/docProps/app.xml");
    }

    #[test]
    fn test_resolve_entity() {
        assert_eq!(resolve_entity("amp"), "&");
        assert_eq!(resolve_entity("#x25B8"), "▸");
        assert_eq!(resolve_entity("#62"), ">");
    }

    #[test]
    fn test_parse_slide_text_with_entities() {
        let xml = concat!(
            r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld>"#,
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="0F172A"/></a:solidFill></p:bgPr></p:bg>"#,
            r#"<p:spTree><p:sp><p:txBody><a:p><a:r><a:t>a &amp; b</a:t></a:r></a:p></p:txBody></p:sp>"#,
            r#"<p:sp><p:spPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></p:spPr></p:sp>"#,
            "</p:spTree></p:cSld></p:sld>"
        );
        let summary = parse_slide(xml).unwrap();
        assert_eq!(summary.background, Some(RGBColor::new(0x0F, 0x17, 0x2A)));
        assert_eq!(summary.shape_count, 2);
        assert_eq!(summary.texts, vec!["a & b".to_string()]);
    }

    #[test]
    fn test_summary_of_written_presentation() {
        let mut pres = MutablePresentation::new();
        pres.set_slide_size(12_191_695, 6_858_000);
        let slide = pres.add_slide();
        slide.set_background(SlideBackground::solid(RGBColor::new(1, 2, 3)));
        slide.add_text_box("▸ R&D <fast>", 0, 0, 100, 100);
        pres.add_slide();

        let summary = DeckSummary::from_bytes(pres.to_bytes().unwrap()).unwrap();
        assert_eq!(summary.slide_count(), 2);
        assert_eq!(summary.slide_width, 12_191_695);
        assert_eq!(summary.slides[0].background, Some(RGBColor::new(1, 2, 3)));
        assert_eq!(summary.slides[0].texts, vec!["▸ R&D <fast>".to_string()]);
        assert_eq!(summary.slides[1], SlideSummary::default());
    }

    #[test]
    fn test_not_a_package() {
        assert!(DeckSummary::from_bytes(b"not a zip".to_vec()).is_err());
    }
}
