//! CSV catalog loading.
//!
//! A catalog file has a `Tag` column and optional `Replacement` and `Label`
//! columns. Header names are matched case-insensitively and a UTF-8 BOM on
//! the first header is ignored.

use std::path::{Path, PathBuf};

use sms_model::MergeTag;
use tracing::{debug, info};

use crate::builtin::builtin_catalog;
use crate::catalog::TagCatalog;
use crate::error::CatalogError;

/// Environment variable overriding the catalog file.
pub const CATALOG_ENV_VAR: &str = "SMS_NOTIFY_CATALOG";

/// Resolve the catalog path: explicit path first, then `SMS_NOTIFY_CATALOG`.
pub fn catalog_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CATALOG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Load the catalog from `explicit` or the environment, falling back to the
/// built-in catalog when neither names a file.
pub fn load_active_catalog(explicit: Option<&Path>) -> Result<TagCatalog, CatalogError> {
    match catalog_path(explicit) {
        Some(path) => load_catalog(&path),
        None => {
            debug!("using built-in merge-tag catalog");
            Ok(builtin_catalog())
        }
    }
}

/// Load and validate a catalog CSV file.
pub fn load_catalog(path: &Path) -> Result<TagCatalog, CatalogError> {
    let bytes = std::fs::read(path).map_err(|e| CatalogError::io(path, e))?;
    let tags = parse_catalog_csv(&bytes, path)?;
    let catalog = TagCatalog::new(tags)?;
    info!(
        path = %path.display(),
        tag_count = catalog.len(),
        "merge-tag catalog loaded"
    );
    Ok(catalog)
}

fn parse_catalog_csv(bytes: &[u8], path: &Path) -> Result<Vec<MergeTag>, CatalogError> {
    let csv_error = |message: String| CatalogError::Csv {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(e.to_string()))?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_lowercase())
        .collect();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let tag_idx = column("tag").ok_or_else(|| csv_error("missing Tag column".to_string()))?;
    let replacement_idx = column("replacement");
    let label_idx = column("label");

    let mut tags = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(e.to_string()))?;
        let get = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or("")
                .to_string()
        };
        let tag = get(Some(tag_idx));
        if tag.is_empty() {
            continue;
        }
        tags.push(MergeTag::new(tag, get(replacement_idx), get(label_idx)));
    }
    Ok(tags)
}
