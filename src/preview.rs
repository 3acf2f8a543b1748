//! Preview document generation. Wraps generated CSS + HTML in a standalone
//! page that can be loaded into a sandboxed `<iframe srcdoc>` or saved to disk.

use crate::generate::CssLayout;

// Block style shared by the placeholder children of the grid and flexbox
// templates, so empty cells are visible in the preview.
const PLACEHOLDER_SELECTORS: &str = ".header, .nav, .content, .sidebar, .footer,
                  .flex-item, .fill-item, .fixed-item, .span-12, .span-6, .span-4, .span-3, .span-2, .span-1,
                  .grid-item";

/// Build the preview document for a stylesheet and markup.
pub fn preview_document(css: &str, html: &str) -> String {
    format!(
        r##"
            <!DOCTYPE html>
            <html>
              <head>
                <style>
                  body {{
                    margin: 0;
                    padding: 16px;
                    font-family: system-ui, -apple-system, sans-serif;
                    color: #333;
                  }}

                  * {{
                    box-sizing: border-box;
                  }}

                  {PLACEHOLDER_SELECTORS} {{
                    padding: 1rem;
                    background-color: #f2f2f2;
                    border: 1px solid #ddd;
                    text-align: center;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                  }}

                  {css}
                </style>
              </head>
              <body>
                {html}
              </body>
            </html>
          "##
    )
}

/// Preview document for a generated layout.
pub fn preview_for(layout: &CssLayout) -> String {
    preview_document(&layout.combined_css(), &layout.html)
}

/// Escape text for an HTML attribute value or element body.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::generate::get_layout_code;
    use crate::options::LayoutOptions;

    #[test]
    fn document_embeds_css_then_html() {
        let doc = preview_document(".a { color: red; }", "<div class=\"a\">x</div>");
        let style_pos = doc.find(".a { color: red; }").expect("css embedded");
        let body_pos = doc.find("<div class=\"a\">x</div>").expect("html embedded");
        assert!(doc.contains("<!DOCTYPE html>"));
        assert!(style_pos < doc.find("</style>").expect("style closes"));
        assert!(body_pos > doc.find("<body>").expect("body opens"));
    }

    #[test]
    fn placeholder_style_precedes_generated_css() {
        let layout = get_layout_code("3x3", Category::Grid, &LayoutOptions::new());
        let doc = preview_for(&layout);
        let shared = doc.find(".grid-item {\n                    padding: 1rem;");
        let own = doc.find(".grid-item {\n  min-height: 100px;");
        assert!(shared.is_some() && own.is_some());
        assert!(shared < own);
    }

    #[test]
    fn escape_covers_markup_and_quotes() {
        assert_eq!(
            html_escape(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }
}
