//! XML text helpers shared by the package writer and the HTML pages.

mod escape;

pub use escape::escape_xml;
