//! Byte Order Mark (BOM) handling for uploaded text.
//!
//! Spreadsheet exports often prefix UTF-8 CSV with a BOM; left in place it
//! would become part of the first header name and break column validation.

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Supported BOM encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf8,
    Utf16Le,
    Utf16Be,
}

/// Detect a BOM at the start of `data`.
pub fn detect_bom(data: &[u8]) -> Option<BomKind> {
    if data.starts_with(&UTF8_BOM) {
        Some(BomKind::Utf8)
    } else if data.starts_with(&[0xFF, 0xFE]) {
        Some(BomKind::Utf16Le)
    } else if data.starts_with(&[0xFE, 0xFF]) {
        Some(BomKind::Utf16Be)
    } else {
        None
    }
}

/// Strip a leading UTF-8 BOM, returning the remaining bytes.
///
/// Other BOMs are left alone.
#[inline]
pub fn strip_utf8_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(&UTF8_BOM[..]).unwrap_or(data)
}
