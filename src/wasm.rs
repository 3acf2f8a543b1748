//! WASM bindings for the layout catalog.
//!
//! Exposes the generator to JavaScript via wasm-bindgen so a browser gallery
//! can call it directly. Build with: `wasm-pack build --target web --features wasm`

use wasm_bindgen::prelude::*;

use crate::catalog::{self, Category};
use crate::options::LayoutOptions;

fn parse_options(options_json: &str) -> Result<LayoutOptions, JsError> {
    if options_json.trim().is_empty() {
        return Ok(LayoutOptions::new());
    }
    LayoutOptions::from_json(options_json).map_err(|e| JsError::new(&e.to_string()))
}

fn parse_category(category: &str) -> Result<Category, JsError> {
    category.parse().map_err(|e: crate::CatalogError| JsError::new(&e.to_string()))
}

/// Generate layout code as a JSON `{containerCSS, childrenCSS, html}` object.
///
/// `options_json` is a flat JSON object (`{"gap": "2rem"}`) or an empty
/// string. Throws a JS error for an unknown category or malformed options.
#[wasm_bindgen]
pub fn layout_code(template_id: &str, category: &str, options_json: &str) -> Result<String, JsError> {
    let category = parse_category(category)?;
    let options = parse_options(options_json)?;
    let layout = crate::get_layout_code(template_id, category, &options);
    serde_json::to_string(&layout).map_err(|e| JsError::new(&e.to_string()))
}

/// The template catalog as a JSON array of descriptors.
#[wasm_bindgen]
pub fn templates() -> Result<String, JsError> {
    serde_json::to_string(catalog::all()).map_err(|e| JsError::new(&e.to_string()))
}

/// Standalone preview document for a template, ready for `iframe.srcdoc`.
#[wasm_bindgen]
pub fn preview(template_id: &str, category: &str, options_json: &str) -> Result<String, JsError> {
    let category = parse_category(category)?;
    let options = parse_options(options_json)?;
    let layout = crate::get_layout_code(template_id, category, &options);
    Ok(crate::preview::preview_for(&layout))
}
