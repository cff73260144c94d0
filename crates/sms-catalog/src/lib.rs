#![deny(unsafe_code)]

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod loader;

pub use crate::builtin::builtin_catalog;
pub use crate::catalog::{TagCatalog, is_valid_tag};
pub use crate::error::CatalogError;
pub use crate::loader::{CATALOG_ENV_VAR, catalog_path, load_active_catalog, load_catalog};
