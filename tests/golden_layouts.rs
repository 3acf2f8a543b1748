//! Exact output for every catalog template, with default options and with
//! every declared option overridden.

use pretty_assertions::assert_eq;
use serde::Deserialize;

use layout_catalog::catalog;
use layout_catalog::{get_layout_code, Category, CssLayout, LayoutOptions};

#[derive(Deserialize)]
struct Fixture {
    id: String,
    category: Category,
    defaults: CssLayout,
    #[serde(default)]
    options: Option<LayoutOptions>,
    #[serde(default)]
    customized: Option<CssLayout>,
}

macro_rules! fixture {
    ($id:literal) => {
        ($id, include_str!(concat!("layout-fixtures/", $id, ".json")))
    };
}

const FIXTURES: &[(&str, &str)] = &[
    fixture!("12-span-grid"),
    fixture!("3x3"),
    fixture!("holy-grail"),
    fixture!("sidebar"),
    fixture!("header-main-footer"),
    fixture!("card-grid"),
    fixture!("masonry"),
    fixture!("two-column"),
    fixture!("hierarchy"),
    fixture!("row"),
    fixture!("row-wrap"),
    fixture!("fill-space"),
    fixture!("fill-remaining-space"),
    fixture!("separate"),
    fixture!("centered-content"),
    fixture!("fixed-header"),
    fixture!("tabs-layout"),
    fixture!("z-stack"),
    fixture!("basic-modal"),
    fixture!("notification-modal"),
    fixture!("confirmation-modal"),
    fixture!("fullscreen-modal"),
    fixture!("drawer-modal"),
];

fn load(id: &str, source: &str) -> Fixture {
    let fixture: Fixture = serde_json::from_str(source)
        .unwrap_or_else(|e| panic!("fixture {id} is not valid JSON: {e}"));
    assert_eq!(fixture.id, id, "fixture file name and id disagree");
    fixture
}

fn assert_layout(id: &str, label: &str, actual: &CssLayout, expected: &CssLayout) {
    assert_eq!(
        actual.container_css, expected.container_css,
        "{id} ({label}): containerCSS"
    );
    assert_eq!(
        actual.children_css, expected.children_css,
        "{id} ({label}): childrenCSS"
    );
    assert_eq!(actual.html, expected.html, "{id} ({label}): html");
}

#[test]
fn every_template_has_a_fixture() {
    let covered: Vec<&str> = FIXTURES.iter().map(|(id, _)| *id).collect();
    let catalog_ids: Vec<&str> = catalog::all().iter().map(|t| t.id).collect();
    assert_eq!(covered, catalog_ids);
}

#[test]
fn default_output_matches_fixtures() {
    for (id, source) in FIXTURES {
        let fixture = load(id, source);
        let template = catalog::find(id).expect("fixture id is in the catalog");
        assert_eq!(fixture.category, template.category, "{id}: category");

        let layout = get_layout_code(id, fixture.category, &LayoutOptions::new());
        assert_layout(id, "defaults", &layout, &fixture.defaults);
    }
}

#[test]
fn customized_output_matches_fixtures() {
    for (id, source) in FIXTURES {
        let fixture = load(id, source);
        let template = catalog::find(id).expect("fixture id is in the catalog");

        let (Some(options), Some(expected)) = (fixture.options, fixture.customized) else {
            assert!(template.options.is_empty(), "{id}: options fixture missing");
            continue;
        };
        for opt in template.options {
            assert!(options.get(opt.key).is_some(), "{id}: fixture does not set {}", opt.key);
        }

        let layout = get_layout_code(id, fixture.category, &options);
        assert_layout(id, "customized", &layout, &expected);
        assert_ne!(layout, fixture.defaults, "{id}: options had no effect");
    }
}
