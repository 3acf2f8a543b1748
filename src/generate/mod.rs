//! Template-to-code generation.
//!
//! Maps `(template id, category, options)` to the container CSS, children
//! CSS and HTML of a layout. Each category has its own generator that
//! branches on the id and returns the literal template with option
//! substitutions. Ids a generator does not know produce an empty layout.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category, TemplateDescriptor};
use crate::error::{CatalogError, Result};
use crate::options::LayoutOptions;

mod flexbox;
mod grid;
mod modal;

#[cfg(test)]
mod tests;

/// Generated code for one layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssLayout {
    #[serde(rename = "containerCSS")]
    pub container_css: String,
    #[serde(rename = "childrenCSS")]
    pub children_css: String,
    pub html: String,
}

impl CssLayout {
    /// The fallback for unknown template ids.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.container_css.is_empty() && self.children_css.is_empty() && self.html.is_empty()
    }

    /// Container and children CSS as one stylesheet, separated by a blank line.
    pub fn combined_css(&self) -> String {
        format!("{}\n\n{}", self.container_css, self.children_css)
    }

    pub(crate) fn new(container_css: String, children_css: String, html: String) -> Self {
        Self {
            container_css,
            children_css,
            html,
        }
    }
}

/// Generate the code for `template_id` using the generator of `category`.
///
/// Never fails: an id unknown to that category's generator, including an id
/// paired with the wrong category, yields [`CssLayout::empty`].
pub fn get_layout_code(
    template_id: &str,
    category: Category,
    options: &LayoutOptions,
) -> CssLayout {
    let layout = match category {
        Category::Grid => grid::generate(template_id, options),
        Category::Flexbox => flexbox::generate(template_id, options),
        Category::Modal => modal::generate(template_id, options),
    };
    tracing::debug!(
        template = template_id,
        %category,
        options = options.len(),
        empty = layout.is_empty(),
        "generated layout"
    );
    layout
}

/// Generate the code for a catalog descriptor.
pub fn generate(template: &TemplateDescriptor, options: &LayoutOptions) -> CssLayout {
    get_layout_code(template.id, template.category, options)
}

/// Look `template_id` up in the catalog and generate its code.
///
/// Unlike [`get_layout_code`], an id missing from the catalog is reported.
pub fn generate_by_id(template_id: &str, options: &LayoutOptions) -> Result<CssLayout> {
    let template =
        catalog::find(template_id).ok_or_else(|| CatalogError::unknown_template(template_id))?;
    Ok(generate(template, options))
}
