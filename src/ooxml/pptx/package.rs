/// Package assembly for PowerPoint presentations.
///
/// Turns a [`MutablePresentation`] into an [`OpcPackage`] holding the
/// presentation part, one part per slide and the fixed master, layout,
/// theme and property parts.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{OpcPackage, PackURI, Part};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::MutablePresentation;

pub const CORE_PROPS_URI: &str = "/docProps/core.xml";
pub const APP_PROPS_URI: &str = "/docProps/app.xml";
pub const PRESENTATION_URI: &str = "/ppt/presentation.xml";
pub const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
pub const SLIDE_LAYOUT_URI: &str = "/ppt/slideLayouts/slideLayout1.xml";
pub const THEME_URI: &str = "/ppt/theme/theme1.xml";
pub const PRES_PROPS_URI: &str = "/ppt/presProps.xml";
pub const VIEW_PROPS_URI: &str = "/ppt/viewProps.xml";
pub const TABLE_STYLES_URI: &str = "/ppt/tableStyles.xml";

/// Theme font for major and minor text.
const THEME_FONT: &str = "Calibri";

fn uri(s: &str) -> Result<PackURI> {
    Ok(PackURI::new(s).map_err(OpcError::InvalidPackUri)?)
}

/// Partname of the slide at 1-based position `number`.
pub fn slide_partname(number: usize) -> Result<PackURI> {
    uri(&format!("/ppt/slides/slide{}.xml", number))
}

/// Build the OPC package for `pres`.
pub fn build_package(pres: &MutablePresentation) -> Result<OpcPackage> {
    let mut pkg = OpcPackage::new();

    let core_uri = uri(CORE_PROPS_URI)?;
    let app_uri = uri(APP_PROPS_URI)?;
    let pres_uri = uri(PRESENTATION_URI)?;
    let master_uri = uri(SLIDE_MASTER_URI)?;
    let layout_uri = uri(SLIDE_LAYOUT_URI)?;
    let theme_uri = uri(THEME_URI)?;
    let pres_props_uri = uri(PRES_PROPS_URI)?;
    let view_props_uri = uri(VIEW_PROPS_URI)?;
    let table_styles_uri = uri(TABLE_STYLES_URI)?;

    pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
    pkg.relate_to(&core_uri, rt::CORE_PROPERTIES);
    pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

    let properties = pres.properties();
    pkg.add_part(Part::from_xml(
        core_uri,
        ct::OPC_CORE_PROPERTIES,
        properties.to_core_xml(),
    ))?;
    pkg.add_part(Part::from_xml(
        app_uri,
        ct::OFC_EXTENDED_PROPERTIES,
        properties.to_app_xml(pres.slide_count()),
    ))?;

    // Presentation part: the XML needs the rIds, so relate first.
    let mut pres_part = Part::new(pres_uri, ct::PML_PRESENTATION_MAIN, Vec::new());
    let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
    let slide_uris = (1..=pres.slide_count())
        .map(slide_partname)
        .collect::<Result<Vec<_>>>()?;
    let slide_rel_ids: Vec<String> = slide_uris
        .iter()
        .map(|slide_uri| pres_part.relate_to(slide_uri, rt::SLIDE))
        .collect();
    pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
    pres_part.relate_to(&view_props_uri, rt::VIEW_PROPS);
    pres_part.relate_to(&theme_uri, rt::THEME);
    pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);
    pres_part.set_blob(
        pres.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?
            .into_bytes(),
    );
    pkg.add_part(pres_part)?;

    let mut master_part = Part::new(master_uri.clone(), ct::PML_SLIDE_MASTER, Vec::new());
    let layout_rel_id = master_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
    master_part.relate_to(&theme_uri, rt::THEME);
    master_part.set_blob(template::slide_master_xml(&layout_rel_id).into_bytes());
    pkg.add_part(master_part)?;

    let mut layout_part =
        Part::from_xml(layout_uri.clone(), ct::PML_SLIDE_LAYOUT, template::blank_layout_xml());
    layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
    pkg.add_part(layout_part)?;

    pkg.add_part(Part::from_xml(
        theme_uri,
        ct::OFC_THEME,
        template::theme_xml(THEME_FONT),
    ))?;

    for (slide, slide_uri) in pres.slides().iter().zip(slide_uris) {
        let mut slide_part = Part::from_xml(slide_uri, ct::PML_SLIDE, slide.to_xml()?);
        slide_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        pkg.add_part(slide_part)?;
    }

    pkg.add_part(Part::from_xml(
        pres_props_uri,
        ct::PML_PRES_PROPS,
        template::pres_props_xml(),
    ))?;
    pkg.add_part(Part::from_xml(
        view_props_uri,
        ct::PML_VIEW_PROPS,
        template::view_props_xml(),
    ))?;
    pkg.add_part(Part::from_xml(
        table_styles_uri,
        ct::PML_TABLE_STYLES,
        template::table_styles_xml(),
    ))?;

    Ok(pkg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_slide_package() -> OpcPackage {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        pres.add_slide();
        build_package(&pres).unwrap()
    }

    #[test]
    fn test_part_list() {
        let pkg = two_slide_package();
        let names: Vec<&str> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(
            names,
            vec![
                CORE_PROPS_URI,
                APP_PROPS_URI,
                PRESENTATION_URI,
                SLIDE_MASTER_URI,
                SLIDE_LAYOUT_URI,
                THEME_URI,
                "/ppt/slides/slide1.xml",
                "/ppt/slides/slide2.xml",
                PRES_PROPS_URI,
                VIEW_PROPS_URI,
                TABLE_STYLES_URI,
            ]
        );
        assert_eq!(pkg.rels().len(), 3);
    }

    #[test]
    fn test_presentation_relationships() {
        let pkg = two_slide_package();
        let pres_part = pkg.part(&uri(PRESENTATION_URI).unwrap()).unwrap();
        let rels: Vec<(&str, &str)> = pres_part
            .rels()
            .iter()
            .map(|r| (r.r_id(), r.target_ref()))
            .collect();
        assert_eq!(rels[0], ("rId1", "slideMasters/slideMaster1.xml"));
        assert_eq!(rels[1], ("rId2", "slides/slide1.xml"));
        assert_eq!(rels[2], ("rId3", "slides/slide2.xml"));

        let xml = std::str::from_utf8(pres_part.blob()).unwrap();
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
    }

    #[test]
    fn test_slide_relates_to_layout() {
        let pkg = two_slide_package();
        let slide = pkg.part(&slide_partname(2).unwrap()).unwrap();
        let rel = slide.rels().by_type(rt::SLIDE_LAYOUT).unwrap();
        assert_eq!(rel.target_ref(), "../slideLayouts/slideLayout1.xml");
    }
}
