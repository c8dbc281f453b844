/// Relationship-related objects for OPC packages.
///
/// Every part (and the package itself) owns a set of relationships that are
/// serialized to a `_rels/*.rels` part next to it.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use std::collections::BTreeMap;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source part's directory
    target_ref: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Collection of relationships from a single source.
///
/// Keyed by the numeric part of the rId so serialization order is stable
/// and "rId10" sorts after "rId9".
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: BTreeMap<u32, Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its newly assigned rId.
    ///
    /// An existing relationship with the same type and target is reused.
    pub fn add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self
            .rels
            .values()
            .find(|r| r.reltype == reltype && r.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }

        let next = self.rels.keys().next_back().map_or(1, |n| n + 1);
        let r_id = format!("rId{}", next);
        self.rels.insert(
            next,
            Relationship::new(r_id.clone(), reltype.to_string(), target_ref.to_string()),
        );
        r_id
    }

    /// Find the first relationship of the given type.
    #[cfg(test)]
    pub(crate) fn by_type(&self, reltype: &str) -> Option<&Relationship> {
        self.rels.values().find(|r| r.reltype == reltype)
    }

    /// Iterate relationships in rId order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Relationships xmlns="{}">"#, namespace::RELATIONSHIPS));

        for rel in self.rels.values() {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(rt::SLIDE, "slides/slide1.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_duplicate_target_reuses_id() {
        let mut rels = Relationships::new();
        let first = rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        let second = rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        assert_eq!(first, second);
        assert_eq!(rels.len(), 1);
    }

    #[test]
    fn test_xml_order_is_numeric() {
        let mut rels = Relationships::new();
        for i in 1..=11 {
            rels.add(rt::SLIDE, &format!("slides/slide{}.xml", i));
        }
        let xml = rels.to_xml();
        let pos9 = xml.find(r#"Id="rId9""#).unwrap();
        let pos10 = xml.find(r#"Id="rId10""#).unwrap();
        assert!(pos9 < pos10);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.ends_with("</Relationships>"));
    }

    #[test]
    fn test_by_type() {
        let mut rels = Relationships::new();
        rels.add(rt::THEME, "../theme/theme1.xml");
        assert_eq!(rels.by_type(rt::THEME).map(|r| r.target_ref()), Some("../theme/theme1.xml"));
        assert!(rels.by_type(rt::SLIDE).is_none());
    }
}
