pub mod catalog;
pub mod error;
pub mod generate;
pub mod options;
pub mod preview;
pub mod session;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use catalog::{Category, TemplateDescriptor};
pub use error::{CatalogError, Result};
pub use generate::{get_layout_code, CssLayout};
pub use options::{LayoutOptions, OptionValue};
pub use session::{Session, ViewMode};

/// Generate a layout by catalog id and render its standalone preview page.
pub fn render_preview(template_id: &str, options: &LayoutOptions) -> Result<String> {
    let layout = generate::generate_by_id(template_id, options)?;
    Ok(preview::preview_for(&layout))
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn end_to_end_select_tweak_preview() {
        let mut session = Session::new();
        session.select("row").expect("row is in the catalog");
        session.set_option("growItems", true);

        let doc = preview::preview_document(&session.formatted_css(), &session.code().html);
        assert!(doc.contains("flex-direction: row;"));
        assert!(doc.contains("  flex: 1;\n}"));
        assert!(doc.contains(r#"<div class="flex-item">Item 3</div>"#));
    }

    #[test]
    fn end_to_end_options_from_overrides() {
        let options = LayoutOptions::from_overrides(["columns=5", "rowHeight=10px"])
            .expect("valid overrides");
        let layout = get_layout_code("masonry", Category::Grid, &options);
        assert!(layout.container_css.contains("grid-template-columns: repeat(5, 1fr);"));
        assert!(layout.container_css.contains("grid-auto-rows: 10px;"));
    }

    #[test]
    fn end_to_end_render_preview() {
        let doc = render_preview("fullscreen-modal", &LayoutOptions::new().with("bgColor", "#111"))
            .expect("fullscreen-modal renders");
        assert!(doc.contains("background-color: #111;"));
        assert!(doc.contains("function openFullscreenModal()"));

        assert!(matches!(
            render_preview("nope", &LayoutOptions::new()),
            Err(CatalogError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn end_to_end_every_template_previews() {
        for t in catalog::all() {
            let doc = render_preview(t.id, &LayoutOptions::new()).expect("catalog ids render");
            assert!(doc.contains("</html>"), "{} preview is truncated", t.id);
        }
    }
}
