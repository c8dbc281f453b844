/// Presentation writer for PPTX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::PackageWriter;
use crate::ooxml::properties::DocumentProperties;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::super::package;
use super::super::template::SLIDE_MASTER_ID;
use super::slide::MutableSlide;

/// Smallest slide edge PowerPoint accepts (1 inch).
pub const MIN_SLIDE_EXTENT: i64 = 914_400;
/// Largest slide edge PowerPoint accepts (56 inches).
pub const MAX_SLIDE_EXTENT: i64 = 51_206_400;

/// A mutable PowerPoint presentation for writing.
///
/// Slides are appended with [`add_slide`](Self::add_slide) and the whole
/// presentation is serialized once with [`save`](Self::save) or
/// [`to_bytes`](Self::to_bytes).
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Core document properties
    properties: DocumentProperties,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9_144_000,
            slide_height: 6_858_000,
            properties: DocumentProperties::new(),
        }
    }

    /// Append a new blank slide and return it.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        let index = self.slides.len();
        self.slides.push(MutableSlide::new(slide_id));
        &mut self.slides[index]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide size in EMUs. The range is checked when the
    /// presentation is serialized.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = properties;
    }

    /// Generate presentation.xml content with the given relationship IDs.
    ///
    /// `slide_rel_ids` must hold one ID per slide, in slide order.
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        for (name, extent) in [("width", self.slide_width), ("height", self.slide_height)] {
            if !(MIN_SLIDE_EXTENT..=MAX_SLIDE_EXTENT).contains(&extent) {
                return Err(OoxmlError::InvalidFormat(format!(
                    "slide {} {} EMU outside {}..={}",
                    name, extent, MIN_SLIDE_EXTENT, MAX_SLIDE_EXTENT
                )));
            }
        }
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "expected {} slide relationship IDs, got {}",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let pkg = package::build_package(self)?;
        Ok(PackageWriter::to_bytes(&pkg)?)
    }

    /// Write the presentation to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let pkg = package::build_package(self)?;
        PackageWriter::write(path, &pkg)?;
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9144000);
        assert_eq!(pres.slide_height(), 6858000);
    }

    #[test]
    fn test_slide_ids_start_at_256() {
        let mut pres = MutablePresentation::new();
        assert_eq!(pres.add_slide().slide_id(), 256);
        assert_eq!(pres.add_slide().slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slides()[1].slide_id(), 257);
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = MutablePresentation::new();
        pres.set_slide_size(12_191_695, 6_858_000);
        pres.add_slide();

        let xml = pres
            .generate_presentation_xml("rId1", &["rId2".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
    }

    #[test]
    fn test_slide_size_out_of_range() {
        let mut pres = MutablePresentation::new();
        pres.set_slide_size(100, 6_858_000);
        assert!(matches!(
            pres.generate_presentation_xml("rId1", &[]),
            Err(OoxmlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rel_id_count_mismatch() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        assert!(pres.generate_presentation_xml("rId1", &[]).is_err());
    }
}
