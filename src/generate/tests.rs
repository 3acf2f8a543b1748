use pretty_assertions::assert_eq;

use super::*;
use crate::catalog::{OptionKind, TEMPLATES};

fn code(id: &str, category: Category, options: &LayoutOptions) -> CssLayout {
    get_layout_code(id, category, options)
}

fn all_text(layout: &CssLayout) -> String {
    format!("{}{}{}", layout.container_css, layout.children_css, layout.html)
}

#[test]
fn every_catalog_template_generates_code() {
    for t in TEMPLATES {
        let layout = generate(t, &LayoutOptions::new());
        assert!(!layout.container_css.is_empty(), "{} has no container CSS", t.id);
        assert!(!layout.children_css.is_empty(), "{} has no children CSS", t.id);
        assert!(!layout.html.is_empty(), "{} has no HTML", t.id);
        assert!(layout.container_css.starts_with('\n'), "{} container CSS layout changed", t.id);
    }
}

#[test]
fn unknown_id_yields_empty_triple() {
    for category in Category::ALL {
        let layout = code("bento-box", category, &LayoutOptions::new());
        assert_eq!(layout, CssLayout::empty());
        assert!(layout.is_empty());
    }
}

#[test]
fn id_with_wrong_category_yields_empty_triple() {
    assert!(code("row", Category::Grid, &LayoutOptions::new()).is_empty());
    assert!(code("sidebar", Category::Flexbox, &LayoutOptions::new()).is_empty());
    assert!(code("holy-grail", Category::Modal, &LayoutOptions::new()).is_empty());
}

#[test]
fn twelve_span_grid_defaults() {
    let layout = code("12-span-grid", Category::Grid, &LayoutOptions::new());
    assert_eq!(
        layout.container_css,
        "\n.container {\n  display: grid;\n  grid-template-columns: repeat(12, 1fr);\n  gap: 1rem;\n  width: 100%;\n}"
    );
    assert_eq!(
        layout.html,
        "\n<div class=\"container\">\n  <div class=\"span-12\">Full width</div>\n  <div class=\"span-6\">Half width</div>\n  <div class=\"span-4\">One third</div>\n  <div class=\"span-2\">One sixth</div>\n</div>"
    );
    assert!(layout
        .children_css
        .ends_with(".span-1 { grid-column: span 1 / span 1; }"));
}

#[test]
fn sidebar_defaults_to_zero_gap() {
    let layout = code("sidebar", Category::Grid, &LayoutOptions::new());
    assert_eq!(
        layout.container_css,
        "\n.sidebar-layout {\n  display: grid;\n  grid-template-columns: 250px 1fr;\n  min-height: 100vh;\n  gap: 0;\n}"
    );
}

#[test]
fn holy_grail_substitutes_column_widths() {
    let options = LayoutOptions::new()
        .with("navWidth", "15rem")
        .with("sidebarWidth", "12rem")
        .with("gap", "2px");
    let layout = code("holy-grail", Category::Grid, &options);
    assert!(layout
        .container_css
        .contains("  grid-template-columns: 15rem 1fr 12rem;\n"));
    assert!(layout.container_css.contains("  gap: 2px;\n"));
    assert!(layout.children_css.contains("@media (max-width: 768px)"));
}

#[test]
fn falsy_overrides_fall_back_to_defaults() {
    let options = LayoutOptions::new().with("gap", "").with("minWidth", false);
    let layout = code("card-grid", Category::Grid, &options);
    assert!(layout
        .container_css
        .contains("repeat(auto-fit, minmax(250px, 1fr));"));
    assert!(layout.container_css.contains("gap: 1.5rem;"));
}

#[test]
fn hierarchy_gap_applies_to_both_grids() {
    let options = LayoutOptions::new().with("gap", "3rem");
    let layout = code("hierarchy", Category::Grid, &options);
    assert_eq!(layout.container_css.matches("gap: 3rem;").count(), 2);
    assert!(layout.children_css.contains("gap: 1rem;"));
}

#[test]
fn row_defaults_leave_blank_declaration_lines() {
    let layout = code("row", Category::Flexbox, &LayoutOptions::new());
    assert_eq!(
        layout.container_css,
        "\n.flex-row {\n  display: flex;\n  gap: 1rem;\n  flex-direction: row;\n  \n}"
    );
    assert_eq!(layout.children_css, "\n.flex-item {\n  \n}");
}

#[test]
fn row_flags_toggle_declarations() {
    let options = LayoutOptions::new().with("wrap", true).with("growItems", true);
    let layout = code("row", Category::Flexbox, &options);
    assert!(layout.container_css.contains("  flex-wrap: wrap;\n}"));
    assert_eq!(layout.children_css, "\n.flex-item {\n  flex: 1;\n}");
}

#[test]
fn centered_content_shadow_flag() {
    let plain = code("centered-content", Category::Flexbox, &LayoutOptions::new());
    assert!(plain.children_css.contains("box-shadow: none;"));

    let shadowed = code(
        "centered-content",
        Category::Flexbox,
        &LayoutOptions::new().with("shadow", true),
    );
    assert!(shadowed
        .children_css
        .contains("box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);"));
}

#[test]
fn tabs_layout_ships_switching_script() {
    let layout = code("tabs-layout", Category::Flexbox, &LayoutOptions::new());
    assert!(layout.html.contains("<script>"));
    assert!(layout.html.ends_with("</script>"));
}

#[test]
fn notification_default_docks_bottom_right() {
    let layout = code("notification-modal", Category::Modal, &LayoutOptions::new());
    let css = &layout.container_css;
    assert!(css.contains("  top: auto;\n  bottom: auto;\n  right: 1rem;\n  left: auto;\n"));
    assert!(css.contains("max-width: 400px;"));
    assert!(css.contains("transform: translateY(150%);"));
}

#[test]
fn notification_position_choices() {
    let top = code(
        "notification-modal",
        Category::Modal,
        &LayoutOptions::new().with("position", "top"),
    );
    assert!(top.container_css.contains("  top: 1rem;\n  bottom: auto;\n"));
    assert!(top.container_css.contains("translateY(-150%)"));

    let left = code(
        "notification-modal",
        Category::Modal,
        &LayoutOptions::new().with("position", "left"),
    );
    assert!(left.container_css.contains("  right: auto;\n  left: 1rem;\n"));
    assert!(left.container_css.contains("translateY(150%)"));
}

#[test]
fn drawer_slides_from_chosen_edge() {
    let right = code("drawer-modal", Category::Modal, &LayoutOptions::new());
    assert!(right
        .container_css
        .contains("  right: 0; transform: translateX(100%);\n  width: 300px;\n"));
    assert!(right
        .container_css
        .contains("box-shadow: -2px 0 5px rgba(0, 0, 0, 0.1);"));

    let left = code(
        "drawer-modal",
        Category::Modal,
        &LayoutOptions::new().with("position", "left").with("width", "20rem"),
    );
    assert!(left
        .container_css
        .contains("  left: 0; transform: translateX(-100%);\n  width: 20rem;\n"));
    assert!(left
        .container_css
        .contains("box-shadow: 2px 0 5px rgba(0, 0, 0, 0.1);"));
}

#[test]
fn confirmation_icon_colors() {
    let layout = code(
        "confirmation-modal",
        Category::Modal,
        &LayoutOptions::new().with("iconColor", "#2563EB"),
    );
    assert!(layout.children_css.contains("background-color: #FEF2F2;"));
    assert!(layout.children_css.contains("color: #2563EB;"));
}

#[test]
fn every_declared_option_reaches_the_output() {
    for t in TEMPLATES {
        let baseline = all_text(&generate(t, &LayoutOptions::new()));
        for opt in t.options {
            let probe = match opt.kind {
                OptionKind::Text => LayoutOptions::new().with(opt.key, "__probe__"),
                OptionKind::Flag => LayoutOptions::new().with(opt.key, true),
                OptionKind::Choice => LayoutOptions::new().with(opt.key, "left"),
            };
            let text = all_text(&generate(t, &probe));
            match opt.kind {
                OptionKind::Text => {
                    assert!(text.contains("__probe__"), "{}: option {} unused", t.id, opt.key);
                    assert!(baseline.contains(opt.default), "{}: default of {} missing", t.id, opt.key);
                }
                _ => assert_ne!(text, baseline, "{}: option {} has no effect", t.id, opt.key),
            }
        }
    }
}

#[test]
fn undeclared_options_are_ignored() {
    let options = LayoutOptions::new().with("color", "red");
    assert_eq!(
        code("fill-space", Category::Flexbox, &options),
        code("fill-space", Category::Flexbox, &LayoutOptions::new())
    );
}

#[test]
fn combined_css_separates_with_blank_line() {
    let layout = CssLayout::new("a".into(), "b".into(), String::new());
    assert_eq!(layout.combined_css(), "a\n\nb");
}

#[test]
fn layout_serializes_with_original_field_names() {
    let layout = code("fill-space", Category::Flexbox, &LayoutOptions::new());
    let json = serde_json::to_value(&layout).expect("serializes");
    assert!(json["containerCSS"].as_str().is_some_and(|s| s.contains(".fill-space")));
    assert!(json["childrenCSS"].as_str().is_some_and(|s| s.contains(".fill-item")));
    assert!(json["html"].as_str().is_some());
}

#[test]
fn generate_by_id_reports_unknown_templates() {
    let layout = generate_by_id("masonry", &LayoutOptions::new().with("columns", "4"))
        .expect("masonry is in the catalog");
    assert!(layout.container_css.contains("repeat(4, 1fr)"));

    assert!(matches!(
        generate_by_id("bento-box", &LayoutOptions::new()),
        Err(CatalogError::UnknownTemplate(id)) if id == "bento-box"
    ));
}
