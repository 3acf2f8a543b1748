//! Static table of layout template descriptors.
//!
//! The table is the gallery: one entry per template, grouped by category in
//! display order. Descriptors are `'static` and never change; selection code
//! hands out `&'static TemplateDescriptor` references into this table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Layout family a template belongs to. Selects the generator branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Grid,
    Flexbox,
    Modal,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Grid, Category::Flexbox, Category::Modal];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Grid => "grid",
            Category::Flexbox => "flexbox",
            Category::Modal => "modal",
        }
    }

    /// Heading used when the gallery groups templates.
    pub fn label(self) -> &'static str {
        match self {
            Category::Grid => "Grid",
            Category::Flexbox => "Flexbox",
            Category::Modal => "Modal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Category::Grid),
            "flexbox" | "flex" => Ok(Category::Flexbox),
            "modal" | "dialog" => Ok(Category::Modal),
            _ => Err(CatalogError::unknown_category(s)),
        }
    }
}

/// How the generator reads an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Substituted as text; falls back to the default when unset or empty.
    Text,
    /// Toggles a declaration on when truthy.
    Flag,
    /// Compared against fixed values (e.g. `position=left`).
    Choice,
}

/// One option a template's generator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub key: &'static str,
    /// Value used when the option is unset. Empty for flags and choices.
    pub default: &'static str,
    pub kind: OptionKind,
    /// Values a choice option recognizes; anything else acts as unset.
    pub choices: &'static [&'static str],
}

const fn text(key: &'static str, default: &'static str) -> OptionSpec {
    OptionSpec {
        key,
        default,
        kind: OptionKind::Text,
        choices: &[],
    }
}

const fn flag(key: &'static str) -> OptionSpec {
    OptionSpec {
        key,
        default: "",
        kind: OptionKind::Flag,
        choices: &[],
    }
}

const fn choice(key: &'static str, choices: &'static [&'static str]) -> OptionSpec {
    OptionSpec {
        key,
        default: "",
        kind: OptionKind::Choice,
        choices,
    }
}

/// A named layout pattern shown in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub options: &'static [OptionSpec],
}

impl TemplateDescriptor {
    pub fn option(&self, key: &str) -> Option<&'static OptionSpec> {
        self.options.iter().find(|o| o.key == key)
    }
}

macro_rules! template {
    ($id:literal, $name:literal, $category:ident, $description:literal, [$($opt:expr),* $(,)?]) => {
        TemplateDescriptor {
            id: $id,
            name: $name,
            description: $description,
            category: Category::$category,
            options: &[$($opt),*],
        }
    };
}

pub static TEMPLATES: &[TemplateDescriptor] = &[
    // Grid layouts
    template!("12-span-grid", "12 Span Grid", Grid, "A responsive 12-column grid system", [
        text("gap", "1rem"),
    ]),
    template!("3x3", "3 × 3", Grid, "A simple 3×3 grid layout", [text("gap", "1rem")]),
    template!("holy-grail", "Holy Grail", Grid, "Classic header, footer, nav, main, sidebar layout", [
        text("navWidth", "200px"),
        text("sidebarWidth", "200px"),
        text("gap", "1rem"),
    ]),
    template!("sidebar", "Sidebar", Grid, "Simple sidebar and main content layout", [
        text("sidebarWidth", "250px"),
        text("gap", "0"),
    ]),
    template!("header-main-footer", "Header Main Footer", Grid, "Standard page layout with header and footer", []),
    template!("card-grid", "Card Grid", Grid, "Responsive grid of card elements", [
        text("minWidth", "250px"),
        text("gap", "1.5rem"),
        text("imageHeight", "200px"),
    ]),
    template!("masonry", "Masonry Grid", Grid, "Pinterest-style masonry grid layout", [
        text("columns", "3"),
        text("rowHeight", "20px"),
        text("gap", "1rem"),
    ]),
    template!("two-column", "Two Column", Grid, "Simple two column layout", [
        text("leftWidth", "1fr"),
        text("rightWidth", "1fr"),
        text("gap", "2rem"),
    ]),
    template!("hierarchy", "Hierarchy Layout", Grid, "Complex nested grid layout", [
        text("gap", "1rem"),
        text("sidebarWidth", "250px"),
        text("contentMinHeight", "150px"),
        text("contentGap", "1rem"),
    ]),
    // Flexbox layouts
    template!("row", "Row", Flexbox, "Simple flexbox row layout", [
        text("gap", "1rem"),
        flag("wrap"),
        flag("growItems"),
    ]),
    template!("row-wrap", "Row Wrap", Flexbox, "Flexbox row that wraps items to new lines", [
        text("gap", "1rem"),
        text("itemWidth", "calc(33.333% - 0.67rem)"),
        text("minWidth", "200px"),
        text("mobileItemWidth", "calc(50% - 0.5rem)"),
    ]),
    template!("fill-space", "Fill Space", Flexbox, "Items that equally distribute available space", [
        text("gap", "1rem"),
    ]),
    template!("fill-remaining-space", "Fill Remaining Space", Flexbox, "One item fills all remaining space", [
        text("gap", "1rem"),
        text("fixedWidth", "200px"),
    ]),
    template!("separate", "Separate", Flexbox, "Space items apart (like in navigation bars)", [
        text("itemGap", "1rem"),
    ]),
    template!("centered-content", "Centered Content", Flexbox, "Content centered both horizontally and vertically", [
        text("minHeight", "100vh"),
        text("maxWidth", "500px"),
        text("padding", "2rem"),
        flag("shadow"),
    ]),
    template!("fixed-header", "Fixed Header", Flexbox, "Layout with a sticky/fixed header", []),
    template!("tabs-layout", "Tabs Layout", Flexbox, "Tabbed interface layout", []),
    template!("z-stack", "Z-Stack", Flexbox, "Layered elements with z-index positioning", [
        text("width", "100%"),
        text("height", "auto"),
    ]),
    // Modal layouts
    template!("basic-modal", "Basic Modal", Modal, "Standard dialog with header, body and footer", [
        text("padding", "2rem"),
        text("borderRadius", "0.5rem"),
        text("maxWidth", "500px"),
    ]),
    template!("notification-modal", "Notification", Modal, "Toast/notification popup for alerts and notices", [
        choice("position", &["top", "bottom", "left"]),
        text("maxWidth", "400px"),
    ]),
    template!("confirmation-modal", "Confirmation Dialog", Modal, "Dialog for confirming destructive actions", [
        text("iconBgColor", "#FEF2F2"),
        text("iconColor", "#DC2626"),
    ]),
    template!("fullscreen-modal", "Fullscreen Modal", Modal, "Modal that takes the entire screen", [
        text("bgColor", "white"),
    ]),
    template!("drawer-modal", "Drawer/Sidebar", Modal, "Side drawer that slides from the edge", [
        choice("position", &["left", "right"]),
        text("width", "300px"),
    ]),
];

/// Every descriptor, in gallery order.
pub fn all() -> &'static [TemplateDescriptor] {
    TEMPLATES
}

/// Look up a descriptor by its id.
pub fn find(id: &str) -> Option<&'static TemplateDescriptor> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Descriptors of one category, in gallery order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static TemplateDescriptor> {
    TEMPLATES.iter().filter(move |t| t.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for t in TEMPLATES {
            assert!(seen.insert(t.id), "duplicate template id {}", t.id);
        }
        assert_eq!(seen.len(), 23);
    }

    #[test]
    fn categories_keep_gallery_order() {
        let grid: Vec<_> = by_category(Category::Grid).map(|t| t.id).collect();
        assert_eq!(grid.len(), 9);
        assert_eq!(grid[0], "12-span-grid");
        assert_eq!(grid[8], "hierarchy");

        let flex: Vec<_> = by_category(Category::Flexbox).map(|t| t.id).collect();
        assert_eq!(flex.first(), Some(&"row"));
        assert_eq!(flex.last(), Some(&"z-stack"));
        assert_eq!(flex.len(), 9);

        assert_eq!(by_category(Category::Modal).count(), 5);
    }

    #[test]
    fn find_returns_static_descriptor() {
        let t = find("holy-grail").expect("holy-grail is in the catalog");
        assert_eq!(t.name, "Holy Grail");
        assert_eq!(t.category, Category::Grid);
        assert_eq!(t.option("navWidth").map(|o| o.default), Some("200px"));
        assert!(find("bento").is_none());
    }

    #[test]
    fn category_parses_tags_and_aliases() {
        assert_eq!("grid".parse::<Category>().ok(), Some(Category::Grid));
        assert_eq!("Flexbox".parse::<Category>().ok(), Some(Category::Flexbox));
        assert_eq!("flex".parse::<Category>().ok(), Some(Category::Flexbox));
        assert_eq!("dialog".parse::<Category>().ok(), Some(Category::Modal));
        assert!("table".parse::<Category>().is_err());
    }

    #[test]
    fn descriptors_serialize_lowercase_category() {
        let json = serde_json::to_value(find("row").expect("row exists")).expect("serializes");
        assert_eq!(json["category"], "flexbox");
        assert_eq!(json["options"][1]["kind"], "flag");
    }
}
