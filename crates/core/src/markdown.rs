//! Markdown rendering for campaign statements.

use comrak::{markdown_to_html, Options};

/// Build the comrak option set used for campaign statements.
///
/// Every extension is switched on, matching the full-featured renderer
/// the statement format promises. Raw HTML in the source stays escaped
/// (`render.unsafe_` is left off), so the stored output is sanitized.
fn statement_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;
    options
}

/// Render a campaign statement from Markdown to HTML.
pub fn render_statement(source: &str) -> String {
    markdown_to_html(source, &statement_options())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bold_text() {
        assert_eq!(
            render_statement("**bold**").trim_end(),
            "<p><strong>bold</strong></p>"
        );
    }

    #[test]
    fn renders_plain_paragraph() {
        assert_eq!(
            render_statement("Please help").trim_end(),
            "<p>Please help</p>"
        );
    }

    #[test]
    fn renders_strikethrough_extension() {
        let html = render_statement("~~gone~~");
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn renders_autolink_extension() {
        let html = render_statement("see https://example.com now");
        assert!(html.contains("<a href=\"https://example.com\""));
    }

    #[test]
    fn escapes_raw_html() {
        let html = render_statement("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }
}
