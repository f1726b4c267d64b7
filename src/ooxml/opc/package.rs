//! In-memory OPC package.
use super::packuri::{PACKAGE_URI, PackURI};
use super::part::Part;
use super::rel::Relationships;

/// An Open Packaging Convention package held in memory.
///
/// Parts keep the order in which they were added, which is also the order
/// they are written to the archive.
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    parts: Vec<Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI),
            parts: Vec::new(),
        }
    }

    /// Add a part, replacing any existing part with the same name.
    pub fn add_part(&mut self, part: Box<dyn Part>) {
        match self
            .parts
            .iter()
            .position(|p| p.partname() == part.partname())
        {
            Some(idx) => self.parts[idx] = part,
            None => self.parts.push(part),
        }
    }

    /// Iterate parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|b| &**b as &dyn Part)
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Get a reference to the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target).to_string()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
