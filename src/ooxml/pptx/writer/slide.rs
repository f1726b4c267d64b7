/// Slide types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

use super::shape::{MutableShape, Paragraph};

/// The slide layouts a slide can be based on.
///
/// Each kind maps to one of the layouts shipped in the package, in
/// `slideLayoutN.xml` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    /// "Title Slide": centered title and subtitle
    Title,
    /// "Title and Content": title bar plus a body area
    Content,
    /// "Blank": no placeholders
    Blank,
}

impl SlideKind {
    /// All kinds, in layout part order.
    pub const ALL: [SlideKind; 3] = [SlideKind::Title, SlideKind::Content, SlideKind::Blank];

    /// 1-based index of the layout part this kind uses.
    pub fn layout_index(self) -> usize {
        match self {
            SlideKind::Title => 1,
            SlideKind::Content => 2,
            SlideKind::Blank => 3,
        }
    }

    /// Layout name as shown in PowerPoint's layout gallery.
    pub fn layout_name(self) -> &'static str {
        match self {
            SlideKind::Title => "Title Slide",
            SlideKind::Content => "Title and Content",
            SlideKind::Blank => "Blank",
        }
    }
}

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    pub(crate) kind: SlideKind,
    /// Slide title (stored in the title placeholder)
    pub(crate) title: Option<String>,
    /// Subtitle (stored in the subtitle placeholder of title slides)
    pub(crate) subtitle: Option<String>,
    /// Shapes on the slide
    pub(crate) shapes: Vec<MutableShape>,
}

/// IDs 1..=3 are taken by the group shape and the two placeholders.
const FIRST_SHAPE_ID: u32 = 4;

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32, kind: SlideKind) -> Self {
        Self {
            slide_id,
            kind,
            title: None,
            subtitle: None,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// The layout this slide uses.
    pub fn kind(&self) -> SlideKind {
        self.kind
    }

    /// Set the slide title.
    ///
    /// Ignored on blank slides, which have no title placeholder.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Get the slide title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the subtitle. Only title slides render it.
    pub fn set_subtitle(&mut self, subtitle: &str) {
        self.subtitle = Some(subtitle.to_string());
    }

    /// Get the subtitle.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Add a text box holding `text` as a single paragraph.
    pub fn add_text_box(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        self.add_paragraph_box(vec![Paragraph::new(text)], x, y, width, height)
    }

    /// Add a text box holding the given paragraphs.
    pub fn add_paragraph_box(
        &mut self,
        paragraphs: Vec<Paragraph>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let shape_id = self.shapes.len() as u32 + FIRST_SHAPE_ID;
        let idx = self.shapes.len();
        self.shapes
            .push(MutableShape::new_text_box(shape_id, paragraphs, x, y, width, height));
        &mut self.shapes[idx]
    }

    /// Get the shapes on this slide.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Get the number of shapes (placeholders not included).
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        match self.kind {
            SlideKind::Title => {
                if let Some(ref title) = self.title {
                    write_placeholder(&mut xml, 2, "Title 1", r#"type="ctrTitle""#, title)?;
                }
                if let Some(ref subtitle) = self.subtitle {
                    write_placeholder(
                        &mut xml,
                        3,
                        "Subtitle 2",
                        r#"type="subTitle" idx="1""#,
                        subtitle,
                    )?;
                }
            },
            SlideKind::Content => {
                if let Some(ref title) = self.title {
                    write_placeholder(&mut xml, 2, "Title 1", r#"type="title""#, title)?;
                }
            },
            SlideKind::Blank => {},
        }

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

/// Write a placeholder shape that inherits its position from the layout.
fn write_placeholder(
    xml: &mut String,
    shape_id: u32,
    name: &str,
    ph_attrs: &str,
    text: &str,
) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, shape_id, name)
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
    write!(xml, "<p:nvPr><p:ph {}/></p:nvPr>", ph_attrs)
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr/>");

    xml.push_str("<p:txBody>");
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    xml.push_str("<a:p>");
    xml.push_str("<a:r>");
    xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"/>");
    write!(xml, "<a:t>{}</a:t>", escape_xml(text))
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
    xml.push_str("</a:r>");
    xml.push_str("</a:p>");
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_slide_uses_ctr_title_and_subtitle() {
        let mut slide = MutableSlide::new(256, SlideKind::Title);
        slide.set_title("Crisis Scenario Overview");
        slide.set_subtitle("Tabletop exercise");
        let xml = slide.to_xml().unwrap();

        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
        assert!(xml.contains("<a:t>Tabletop exercise</a:t>"));
    }

    #[test]
    fn test_content_slide_uses_title_placeholder() {
        let mut slide = MutableSlide::new(256, SlideKind::Content);
        slide.set_title("roles");
        slide.set_subtitle("ignored");
        let xml = slide.to_xml().unwrap();

        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(!xml.contains("ctrTitle"));
        assert!(!xml.contains("ignored"));
    }

    #[test]
    fn test_blank_slide_has_no_placeholders() {
        let mut slide = MutableSlide::new(256, SlideKind::Blank);
        slide.set_title("hidden");
        slide.add_text_box("visible", 0, 0, 100, 100);
        let xml = slide.to_xml().unwrap();

        assert!(!xml.contains("<p:ph"));
        assert!(xml.contains("<a:t>visible</a:t>"));
    }

    #[test]
    fn test_shape_ids_follow_placeholders() {
        let mut slide = MutableSlide::new(256, SlideKind::Content);
        let first = slide.add_text_box("a", 0, 0, 1, 1).shape_id();
        let second = slide.add_text_box("b", 0, 0, 1, 1).shape_id();
        assert_eq!((first, second), (4, 5));
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_layout_indices() {
        let indices: Vec<usize> = SlideKind::ALL.iter().map(|k| k.layout_index()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }
}
