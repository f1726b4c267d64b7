/// Presentation writer for PPTX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::PackageWriter;
use chrono::{DateTime, Utc};
use std::fmt::Write as FmtWrite;
use std::path::Path;
use tracing::debug;

use super::super::package::build_package;
use super::slide::{MutableSlide, SlideKind};

/// First ID PowerPoint assigns to slides in `sldIdLst`.
const FIRST_SLIDE_ID: u32 = 256;

/// Document metadata written to `docProps/core.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub creator: Option<String>,
    /// Creation time; omitted from the package when unset so output stays
    /// reproducible.
    pub created: Option<DateTime<Utc>>,
}

/// A mutable PowerPoint presentation for writing.
///
/// # Examples
///
/// ```rust
/// use scenario_deck::ooxml::pptx::{MutablePresentation, SlideKind};
///
/// let mut pres = MutablePresentation::new();
/// pres.add_slide(SlideKind::Content).set_title("Crisis Scenario Overview");
/// let bytes = pres.to_bytes()?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok::<(), scenario_deck::ooxml::error::OoxmlError>(())
/// ```
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    properties: DocumentProperties,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            properties: DocumentProperties::default(),
        }
    }

    /// Append a slide based on the layout for `kind`.
    pub fn add_slide(&mut self, kind: SlideKind) -> &mut MutableSlide {
        let idx = self.slides.len();
        let slide_id = idx as u32 + FIRST_SLIDE_ID;
        self.slides.push(MutableSlide::new(slide_id, kind));
        &mut self.slides[idx]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slides in order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Document metadata.
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Mutable document metadata.
    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = build_package(self)?;
        let bytes = PackageWriter::to_bytes(&package)?;
        debug!(
            slides = self.slide_count(),
            parts = package.part_count(),
            bytes = bytes.len(),
            "serialized presentation"
        );
        Ok(bytes)
    }

    /// Write the presentation to a `.pptx` file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Generate presentation.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `slide_rel_ids` - Relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "expected {} slide relationship IDs, got {}",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_rel_id
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        xml.push_str("<p:notesSz cx=\"6858000\" cy=\"9144000\"/>");
        xml.push_str("</p:presentation>");

        Ok(xml)
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
    fn test_add_slide_assigns_sequential_ids() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideKind::Title);
        pres.add_slide(SlideKind::Content);
        let ids: Vec<u32> = pres.slides().iter().map(|s| s.slide_id()).collect();
        assert_eq!(ids, vec![256, 257]);
    }

    #[test]
    fn test_slide_title() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide(SlideKind::Content);
        slide.set_title("Test Title");
        assert_eq!(slide.title(), Some("Test Title"));
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideKind::Content).set_title("Test");

        let xml = pres
            .generate_presentation_xml("rId1", &["rId2".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }

    #[test]
    fn test_presentation_xml_rejects_id_mismatch() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideKind::Blank);
        assert!(pres.generate_presentation_xml("rId1", &[]).is_err());
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideKind::Blank);
        pres.save(&path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
