//! Selection state: which template is selected, its option record, and how
//! the selected view is presented.
//!
//! The gallery has two states. With nothing selected it shows every
//! template; with a selection it shows the generated code and preview,
//! either inline (grid view) or inside a dialog (modal view). Code is
//! regenerated in full whenever the template or an option changes.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, TemplateDescriptor};
use crate::error::{CatalogError, Result};
use crate::generate::{self, CssLayout};
use crate::options::{LayoutOptions, OptionValue};

/// How the selected view is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Modal,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::Modal,
            ViewMode::Modal => ViewMode::Grid,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    selected: Option<&'static TemplateDescriptor>,
    options: LayoutOptions,
    view_mode: ViewMode,
    code: CssLayout,
    dialog_open: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&'static TemplateDescriptor> {
        self.selected
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn code(&self) -> &CssLayout {
        &self.code
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// True while the gallery (no selection) is shown.
    pub fn is_gallery(&self) -> bool {
        self.selected.is_none()
    }

    /// Select a template by id. Options are reset to an empty record.
    ///
    /// An unknown id leaves the session untouched.
    pub fn select(&mut self, template_id: &str) -> Result<&CssLayout> {
        let template =
            catalog::find(template_id).ok_or_else(|| CatalogError::unknown_template(template_id))?;
        self.selected = Some(template);
        self.options.clear();
        tracing::info!(template = template.id, "{} template selected", template.name);
        self.refresh();
        Ok(&self.code)
    }

    /// Return to the gallery.
    pub fn clear(&mut self) {
        self.selected = None;
        self.options.clear();
        self.dialog_open = false;
        self.code = CssLayout::empty();
    }

    pub fn set_option(&mut self, key: &str, value: impl Into<OptionValue>) -> &CssLayout {
        self.options.set(key, value);
        self.refresh();
        &self.code
    }

    /// Merge an option record over the current one.
    pub fn apply_options(&mut self, options: LayoutOptions) -> &CssLayout {
        self.options.extend(options);
        self.refresh();
        &self.code
    }

    pub fn toggle_view_mode(&mut self) {
        self.set_view_mode(self.view_mode.toggled());
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.refresh();
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// The stylesheet shown in the CSS tab and injected into the preview.
    pub fn formatted_css(&self) -> String {
        self.code.combined_css()
    }

    // Any change to template, options or view mode lands here; in modal
    // view it also reopens the dialog.
    fn refresh(&mut self) {
        let Some(template) = self.selected else {
            return;
        };
        self.code = generate::generate(template, &self.options);
        if self.view_mode == ViewMode::Modal {
            self.dialog_open = true;
        }
    }
}
