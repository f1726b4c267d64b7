/// Text box shapes for PPTX slides.
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

use super::super::format::TextFormat;

/// A paragraph of text. Line breaks inside it become soft breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A text box on a slide.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) x: i64,
    pub(crate) y: i64,
    pub(crate) width: i64,
    pub(crate) height: i64,
    pub(crate) paragraphs: Vec<Paragraph>,
    /// Format applied to every run
    pub(crate) format: TextFormat,
    pub(crate) word_wrap: bool,
}

impl MutableShape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(
        shape_id: u32,
        paragraphs: Vec<Paragraph>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Self {
        Self {
            shape_id,
            x,
            y,
            width,
            height,
            paragraphs,
            format: TextFormat::default(),
            word_wrap: false,
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Position and size in EMUs as `(x, y, width, height)`.
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }

    /// Builder method: set font size.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.format.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.format.bold = Some(bold);
        self
    }

    /// Builder method: wrap text at the box width instead of growing it.
    pub fn word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.word_wrap = wrap;
        self
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
            self.shape_id,
            self.shape_id - 1
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str("<a:off");
        push_emu_attr(xml, "x", self.x);
        push_emu_attr(xml, "y", self.y);
        xml.push_str("/><a:ext");
        push_emu_attr(xml, "cx", self.width);
        push_emu_attr(xml, "cy", self.height);
        xml.push_str("/>");
        xml.push_str("</a:xfrm>");
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("<a:noFill/>");
        xml.push_str("</p:spPr>");

        xml.push_str("<p:txBody>");
        if self.word_wrap {
            xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:noAutofit/></a:bodyPr>"#);
        } else {
            xml.push_str(r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#);
        }
        xml.push_str("<a:lstStyle/>");
        write_paragraphs(xml, &self.paragraphs, &self.format)?;
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
        Ok(())
    }
}

/// Append ` name="value"` for an EMU coordinate.
#[inline]
fn push_emu_attr(xml: &mut String, name: &str, value: i64) {
    let mut buf = itoa::Buffer::new();
    xml.push(' ');
    xml.push_str(name);
    xml.push_str("=\"");
    xml.push_str(buf.format(value));
    xml.push('"');
}

/// Write `<a:p>` elements for `paragraphs`.
///
/// A text body needs at least one paragraph, so an empty list writes one
/// empty `<a:p>`.
pub(crate) fn write_paragraphs(
    xml: &mut String,
    paragraphs: &[Paragraph],
    base: &TextFormat,
) -> Result<()> {
    if paragraphs.is_empty() {
        xml.push_str("<a:p>");
        base.write_run_properties(xml, "a:endParaRPr")?;
        xml.push_str("</a:p>");
        return Ok(());
    }

    for paragraph in paragraphs {
        xml.push_str("<a:p>");
        write_run(xml, &paragraph.text, base)?;
        base.write_run_properties(xml, "a:endParaRPr")?;
        xml.push_str("</a:p>");
    }
    Ok(())
}

/// Write one run, turning line breaks into `<a:br/>` siblings.
fn write_run(xml: &mut String, text: &str, format: &TextFormat) -> Result<()> {
    let normalized = text.replace("\r\n", "\n");
    for (i, line) in normalized.split(['\n', '\r', '\u{0B}']).enumerate() {
        if i > 0 {
            xml.push_str("<a:br>");
            format.write_run_properties(xml, "a:rPr")?;
            xml.push_str("</a:br>");
        }
        if line.is_empty() {
            continue;
        }
        xml.push_str("<a:r>");
        format.write_run_properties(xml, "a:rPr")?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(&strip_control_chars(line)))
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("</a:r>");
    }
    Ok(())
}

/// Drop characters XML 1.0 cannot carry. Tabs are kept.
fn strip_control_chars(s: &str) -> std::borrow::Cow<'_, str> {
    let illegal = |c: char| (c < '\u{20}' && c != '\t') || c == '\u{FFFE}' || c == '\u{FFFF}';
    if s.contains(illegal) {
        std::borrow::Cow::Owned(s.chars().filter(|&c| !illegal(c)).collect())
    } else {
        std::borrow::Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_xml(shape: &MutableShape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_text_box_xml() {
        let mut shape =
            MutableShape::new_text_box(4, vec![Paragraph::new("a & b")], 914400, 1371600, 10, 20);
        shape.font_size(14.0).word_wrap(true);
        let xml = shape_xml(&shape);

        assert!(xml.contains(r#"<p:cNvPr id="4" name="TextBox 3"/>"#));
        assert!(xml.contains(r#"<a:off x="914400" y="1371600"/>"#));
        assert!(xml.contains(r#"wrap="square""#));
        assert!(xml.contains(r#"sz="1400""#));
        assert!(xml.contains("<a:t>a &amp; b</a:t>"));
    }

    #[test]
    fn test_one_p_per_paragraph() {
        let shape = MutableShape::new_text_box(
            4,
            vec![Paragraph::new("one"), Paragraph::new("two")],
            0,
            0,
            1,
            1,
        );
        let xml = shape_xml(&shape);
        assert_eq!(xml.matches("<a:p>").count(), 2);
    }

    #[test]
    fn test_line_breaks_become_br() {
        let shape =
            MutableShape::new_text_box(4, vec![Paragraph::new("one\r\ntwo\nthree")], 0, 0, 1, 1);
        let xml = shape_xml(&shape);
        assert_eq!(xml.matches("<a:br>").count(), 2);
        assert_eq!(xml.matches("<a:p>").count(), 1);
        assert!(!xml.contains('\r'));
    }

    #[test]
    fn test_bold_shape_marks_every_run() {
        let mut shape = MutableShape::new_text_box(4, vec![Paragraph::new("Roles\nTeam")], 0, 0, 1, 1);
        shape.font_size(10.0).bold(true);
        let xml = shape_xml(&shape);
        assert!(xml.contains(r#"<a:rPr lang="en-US" dirty="0" sz="1000" b="1"/><a:t>Roles</a:t>"#));
        // two runs, the break and the end-of-paragraph properties
        assert_eq!(xml.matches(r#"b="1""#).count(), 4);
    }

    #[test]
    fn test_empty_shape_still_has_paragraph() {
        let shape = MutableShape::new_text_box(4, Vec::new(), 0, 0, 1, 1);
        assert!(shape_xml(&shape).contains("<a:p><a:endParaRPr"));
    }

    #[test]
    fn test_control_chars_dropped() {
        assert_eq!(strip_control_chars("a\u{1}b\tc"), "ab\tc");
        assert!(matches!(strip_control_chars("plain"), std::borrow::Cow::Borrowed(_)));
    }
}
