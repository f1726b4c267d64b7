//! Relationships between parts in an OPC package.
use super::constants::namespace;
use super::packuri::PackURI;
use crate::common::xml::escape_xml;
use std::fmt::Write as _;

/// A single relationship from a source part to a target part.
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

    /// Get the relative target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Relationships from a single source, in the order they were added.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Directory of the source part, used to relativize targets
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty collection for a source part in `base_uri`.
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: Vec::new(),
        }
    }

    /// Get or add a relationship to `target`, returning its rId.
    ///
    /// An existing relationship of the same type to the same target is reused.
    pub fn get_or_add(&mut self, reltype: &str, target: &PackURI) -> &str {
        let target_ref = target.relative_ref(&self.base_uri);
        let idx = match self
            .rels
            .iter()
            .position(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            Some(idx) => idx,
            None => {
                let r_id = self.next_r_id();
                self.rels.push(Relationship {
                    r_id,
                    reltype: reltype.to_string(),
                    target_ref,
                });
                self.rels.len() - 1
            },
        };
        &self.rels[idx].r_id
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// The next unused ID in the "rId1", "rId2", ... sequence.
    fn next_r_id(&self) -> String {
        let mut used: Vec<u32> = self
            .rels
            .iter()
            .filter_map(|rel| rel.r_id.strip_prefix("rId")?.parse().ok())
            .collect();
        used.sort_unstable();

        let mut next_num = 1u32;
        for num in used {
            if num == next_num {
                next_num += 1;
            } else if num > next_num {
                break;
            }
        }
        format!("rId{}", next_num)
    }

    /// Iterate relationships in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a .rels part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.rels.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        let _ = write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS);

        for rel in &self.rels {
            let _ = write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.r_id),
                escape_xml(&rel.reltype),
                escape_xml(&rel.target_ref),
            );
        }

        xml.push_str("</Relationships>");
        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> PackURI {
        PackURI::new(s).unwrap()
    }

    #[test]
    fn test_get_or_add_reuses_matching_relationship() {
        let mut rels = Relationships::new("/ppt");

        let first = rels.get_or_add("type1", &uri("/ppt/slides/slide1.xml")).to_string();
        assert_eq!(first, "rId1");
        assert_eq!(rels.get_or_add("type1", &uri("/ppt/slides/slide1.xml")), "rId1");
        assert_eq!(rels.get_or_add("type1", &uri("/ppt/slides/slide2.xml")), "rId2");
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.get("rId2").unwrap().target_ref(), "slides/slide2.xml");
    }

    #[test]
    fn test_to_xml_keeps_insertion_order() {
        let mut rels = Relationships::new("/ppt/slides");
        rels.get_or_add("layout", &uri("/ppt/slideLayouts/slideLayout2.xml"));
        rels.get_or_add("other", &uri("/ppt/a&b.xml"));

        let xml = rels.to_xml();
        let first = xml.find(r#"Id="rId1""#).unwrap();
        let second = xml.find(r#"Id="rId2""#).unwrap();
        assert!(first < second);
        assert!(xml.contains(r#"Target="../slideLayouts/slideLayout2.xml""#));
        assert!(xml.contains("../a&amp;b.xml"));
    }
}
