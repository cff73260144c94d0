//! Merge-tag catalog.
//!
//! The catalog is the fixed table of placeholders a message may contain. It
//! is validated once on construction so that substitution can treat every
//! replacement as plain text: no replacement may contain another tag, which
//! keeps substituting an already-substituted message a no-op.

use std::collections::BTreeSet;

use sms_model::MergeTag;
use tracing::debug;

use crate::error::CatalogError;

/// Validated, ordered set of merge tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCatalog {
    tags: Vec<MergeTag>,
}

impl TagCatalog {
    /// Build a catalog, enforcing tag syntax, uniqueness and non-nesting.
    ///
    /// A replacement is empty, the tag itself, or text without brackets, so
    /// substitution can never produce a tag that was not already there.
    pub fn new(tags: Vec<MergeTag>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for entry in &tags {
            if !is_valid_tag(&entry.tag) {
                return Err(CatalogError::InvalidTag {
                    tag: entry.tag.clone(),
                });
            }
            if !seen.insert(entry.tag.as_str()) {
                return Err(CatalogError::DuplicateTag {
                    tag: entry.tag.clone(),
                });
            }
        }
        for entry in &tags {
            let replacement = entry.effective_replacement();
            if let Some(nested) = tags
                .iter()
                .find(|other| other.tag != entry.tag && replacement.contains(other.tag.as_str()))
            {
                return Err(CatalogError::NestedTag {
                    tag: entry.tag.clone(),
                    nested: nested.tag.clone(),
                });
            }
            if replacement != entry.tag && replacement.contains(['[', ']']) {
                return Err(CatalogError::BracketInReplacement {
                    tag: entry.tag.clone(),
                    replacement: entry.replacement.clone(),
                });
            }
        }
        debug!(tag_count = tags.len(), "merge-tag catalog built");
        Ok(Self { tags })
    }

    /// An empty catalog: no placeholders are recognised.
    pub fn empty() -> Self {
        Self { tags: Vec::new() }
    }

    pub fn get(&self, tag: &str) -> Option<&MergeTag> {
        self.tags.iter().find(|entry| entry.tag == tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MergeTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Find the catalog tag that starts at the beginning of `text`, if any.
    ///
    /// Longer tags win when one tag is a prefix of another.
    pub fn match_at<'a>(&'a self, text: &str) -> Option<&'a MergeTag> {
        if !text.starts_with('[') {
            return None;
        }
        self.tags
            .iter()
            .filter(|entry| text.starts_with(entry.tag.as_str()))
            .max_by_key(|entry| entry.tag.len())
    }
}

impl Default for TagCatalog {
    fn default() -> Self {
        crate::builtin::builtin_catalog()
    }
}

/// Whether `tag` is a bracketed placeholder such as `[first_name]`.
pub fn is_valid_tag(tag: &str) -> bool {
    let Some(inner) = tag.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) else {
        return false;
    };
    !inner.is_empty()
        && inner
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}
