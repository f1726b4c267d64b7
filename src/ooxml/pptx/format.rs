//! Format types for PPTX presentations.
use crate::common::unit::pt_to_centipoints;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as _;

/// Character formatting applied to every run of a shape.
///
/// Unset fields inherit from the placeholder, layout, or master.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
}

impl TextFormat {
    /// Write an `<a:rPr>` (or `<a:endParaRPr>` etc.) element named `tag`.
    pub(crate) fn write_run_properties(&self, xml: &mut String, tag: &str) -> Result<()> {
        write!(xml, r#"<{} lang="en-US" dirty="0""#, tag)
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        if let Some(size) = self.size {
            write!(xml, r#" sz="{}""#, pt_to_centipoints(size))
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        }
        if let Some(bold) = self.bold {
            xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
        }
        xml.push_str("/>");
        Ok(())
    }
}
