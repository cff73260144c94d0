#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("invalid merge tag {tag:?}: expected [name] with lowercase letters, digits or underscores")]
    InvalidTag { tag: String },

    #[error("duplicate merge tag in catalog: {tag}")]
    DuplicateTag { tag: String },

    #[error("replacement for {tag} contains another merge tag {nested}")]
    NestedTag { tag: String, nested: String },

    #[error("replacement {replacement:?} for {tag} may not contain '[' or ']'")]
    BracketInReplacement { tag: String, replacement: String },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
