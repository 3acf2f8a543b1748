use std::path::PathBuf;

/// All errors produced by the layout catalog outside the generator itself.
///
/// Generation never fails: an id the generator does not know yields an
/// empty [`crate::CssLayout`]. These errors come from the lookups and input
/// parsing that sit around it.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No descriptor with this id exists in the catalog.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    /// Category tag other than `grid`, `flexbox` or `modal`.
    #[error("unknown category '{0}' (expected grid, flexbox or modal)")]
    UnknownCategory(String),
    /// Option override that is not of the form `key=value`.
    #[error("invalid option override '{0}' (expected key=value)")]
    InvalidOption(String),
    /// Options file or JSON payload that is not a flat object of scalars.
    #[error("invalid options JSON: {0}")]
    OptionsJson(#[from] serde_json::Error),
    /// Filesystem failure while reading or writing a file.
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Shorthand constructors.
impl CatalogError {
    pub fn unknown_template(id: &str) -> Self {
        Self::UnknownTemplate(id.to_string())
    }

    pub fn unknown_category(tag: &str) -> Self {
        Self::UnknownCategory(tag.to_string())
    }

    pub fn invalid_option(raw: &str) -> Self {
        Self::InvalidOption(raw.to_string())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
