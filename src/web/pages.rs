//! HTML for the upload, preview and error pages.
use crate::common::escape_xml;
use crate::deck::LayoutStrategy;
use crate::sheet::RawTable;

const PAGE_TITLE: &str = "Crisis Scenario Slide Generator";

const STYLE: &str = "body{font-family:sans-serif;margin:2rem auto;max-width:960px}\
table{border-collapse:collapse;margin:1rem 0}\
th,td{border:1px solid #ccc;padding:.3rem .6rem;text-align:left;vertical-align:top;white-space:pre-wrap}\
.error{color:#b00020;font-weight:bold}";

fn layout(body: &str) -> String {
    let mut html = String::with_capacity(512 + body.len());
    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str(&format!("<title>{PAGE_TITLE}</title><style>{STYLE}</style>"));
    html.push_str(&format!("</head><body><h1>{PAGE_TITLE}</h1>"));
    html.push_str(body);
    html.push_str("</body></html>");
    html
}

fn upload_form() -> &'static str {
    concat!(
        r#"<form action="/preview" method="post" enctype="multipart/form-data">"#,
        r#"<label>Upload a CSV file <input type="file" name="file" accept=".csv,text/csv"></label> "#,
        r#"<button type="submit">Preview</button>"#,
        "</form>"
    )
}

/// The landing page with the upload form.
pub fn index_page() -> String {
    layout(upload_form())
}

/// A page showing `message` followed by a fresh upload form.
pub fn error_page(message: &str) -> String {
    let mut body = error_paragraph(message);
    body.push_str(upload_form());
    layout(&body)
}

/// Preview of an uploaded table.
///
/// With `csv` set, the sheet passed validation and the page carries its text
/// in a generate form; otherwise `error` explains why generation is blocked.
pub fn preview_page(
    table: &RawTable,
    csv: Option<&str>,
    error: Option<&str>,
    selected: LayoutStrategy,
) -> String {
    let mut body = format!("<h2>Data preview</h2><p>{} rows</p>", table.len());
    write_table(&mut body, table);

    if let Some(message) = error {
        body.push_str(&error_paragraph(message));
    }

    if let Some(csv) = csv {
        body.push_str(r#"<form action="/deck" method="post" enctype="multipart/form-data">"#);
        body.push_str("<textarea name=\"csv\" hidden readonly>");
        body.push_str(&escape_xml(csv));
        body.push_str("</textarea>");
        body.push_str("<label>Layout <select name=\"layout\">");
        for strategy in LayoutStrategy::ALL {
            let marker = if strategy == selected { " selected" } else { "" };
            body.push_str(&format!(
                "<option value=\"{0}\"{marker}>{0}</option>",
                strategy.as_str()
            ));
        }
        body.push_str("</select></label> ");
        body.push_str(r#"<button type="submit">Create PowerPoint Slide</button></form>"#);
    }

    body.push_str(upload_form());
    layout(&body)
}

fn write_table(out: &mut String, table: &RawTable) {
    out.push_str("<table><thead><tr>");
    for header in table.headers() {
        push_cell(out, "th", header);
    }
    out.push_str("</tr></thead><tbody>");
    for row in table.rows() {
        out.push_str("<tr>");
        for cell in row {
            push_cell(out, "td", cell);
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn push_cell(out: &mut String, tag: &str, text: &str) {
    out.push_str(&format!("<{tag}>{}</{tag}>", escape_xml(text)));
}

fn error_paragraph(message: &str) -> String {
    format!("<p class=\"error\">{}</p>", escape_xml(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::read_table;
    use crate::sheet::text::TextConfig;

    #[test]
    fn test_index_page_has_upload_form() {
        let html = index_page();
        assert!(html.contains(r#"action="/preview""#));
        assert!(html.contains(r#"name="file""#));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = error_page("CSV must contain 'Field' and 'Details' columns.");
        assert!(html.contains("CSV must contain &apos;Field&apos;"));
    }

    #[test]
    fn test_preview_escapes_cells_and_carries_csv() {
        let csv = "Field,Details\nroles,<b>Mayor</b> & council\n";
        let table = read_table(csv.as_bytes(), &TextConfig::default()).unwrap();
        let html = preview_page(&table, Some(csv), None, LayoutStrategy::Dashboard);

        assert!(html.contains("<td>&lt;b&gt;Mayor&lt;/b&gt; &amp; council</td>"));
        assert!(html.contains("Create PowerPoint Slide"));
        assert!(html.contains(r#"<option value="dashboard" selected>"#));
        assert!(html.contains("<textarea name=\"csv\" hidden readonly>Field,Details\nroles,"));
    }

    #[test]
    fn test_layout_select_lists_every_strategy_once() {
        let table = read_table(b"Field,Details\na,b\n", &TextConfig::default()).unwrap();
        let html = preview_page(&table, Some("Field,Details\na,b\n"), None, LayoutStrategy::PerRow);
        assert!(html.contains(r#"<option value="free-flow">free-flow</option>"#));
        assert!(html.contains(r#"<option value="dashboard">dashboard</option>"#));
        assert!(html.contains(r#"<option value="per-row" selected>per-row</option>"#));
        assert_eq!(html.matches(" selected>").count(), 1);
    }

    #[test]
    fn test_preview_with_error_has_no_generate_form() {
        let table = read_table(b"Field,Notes\na,b\n", &TextConfig::default()).unwrap();
        let html = preview_page(&table, None, Some("missing columns"), LayoutStrategy::FreeFlow);
        assert!(html.contains("missing columns"));
        assert!(!html.contains("Create PowerPoint Slide"));
        assert!(html.contains("<th>Notes</th>"));
    }
}
