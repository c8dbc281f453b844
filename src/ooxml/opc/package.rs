//! In-memory OPC package assembled before writing.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// An OPC package: package-level relationships plus parts in insertion order.
#[derive(Debug, Default)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part. Partnames must be unique.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.contains(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Add a package-level relationship to `target` and return its rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.add(reltype, target.membername())
    }

    /// Check whether a part with this name exists.
    pub fn contains(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }

    /// Look up a part by name.
    pub fn part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .iter()
            .find(|p| p.partname() == partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Iterate parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    fn uri(s: &str) -> PackURI {
        PackURI::new(s).unwrap()
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        let part = |xml: &str| {
            Part::from_xml(uri("/ppt/presentation.xml"), ct::PML_PRESENTATION_MAIN, xml)
        };
        pkg.add_part(part("<a/>")).unwrap();
        let err = pkg.add_part(part("<b/>")).unwrap_err();
        assert!(matches!(err, OpcError::DuplicatePart(_)));
        assert_eq!(pkg.iter_parts().count(), 1);
    }

    #[test]
    fn test_package_relationship_target() {
        let mut pkg = OpcPackage::new();
        let r_id = pkg.relate_to(&uri("/ppt/presentation.xml"), rt::OFFICE_DOCUMENT);
        assert_eq!(r_id, "rId1");
        assert_eq!(
            pkg.rels().by_type(rt::OFFICE_DOCUMENT).map(|r| r.target_ref()),
            Some("ppt/presentation.xml")
        );
    }

    #[test]
    fn test_missing_part() {
        let pkg = OpcPackage::new();
        assert!(matches!(pkg.part(&uri("/nope.xml")), Err(OpcError::PartNotFound(_))));
    }
}
