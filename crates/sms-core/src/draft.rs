//! Message drafts and the one-of-each-tag rule.
//!
//! Two edit paths keep a draft's tags unique:
//! - [`MessageDraft::insert_tag`] refuses a tag that is already present and
//!   leaves the body untouched.
//! - [`MessageDraft::set_body`] accepts free text and silently drops every
//!   copy of a tag after the first, returning a warning per tag.
//!
//! Free-text edits are deduplicated as they are applied, so an insertion
//! always checks against an already-normalized body.

use std::collections::BTreeSet;

use sms_catalog::TagCatalog;
use sms_model::SegmentResult;
use tracing::{debug, warn};

use crate::segment::compute_segments;
use crate::tags::{DuplicateTagWarning, dedupe_tags, find_tags};
use crate::text::byte_offset;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("unknown merge tag {tag}")]
    UnknownTag { tag: String },
    #[error("merge tag {tag} is already in the message")]
    DuplicateTag { tag: String },
}

/// A message being composed, with the tags it currently contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    body: String,
    inserted_tags: BTreeSet<String>,
}

impl MessageDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft from existing text, deduplicating its tags.
    pub fn with_body(text: &str, catalog: &TagCatalog) -> (Self, Vec<DuplicateTagWarning>) {
        let mut draft = Self::new();
        let warnings = draft.set_body(text, catalog);
        (draft, warnings)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn inserted_tags(&self) -> &BTreeSet<String> {
        &self.inserted_tags
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.inserted_tags.contains(tag)
    }

    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Replace the body with free text. Repeated tags after the first are
    /// removed and reported.
    pub fn set_body(&mut self, text: &str, catalog: &TagCatalog) -> Vec<DuplicateTagWarning> {
        let (body, warnings) = dedupe_tags(text, catalog);
        for warning in &warnings {
            warn!(tag = %warning.tag, removed = warning.removed, "duplicate merge tag removed");
        }
        self.body = body;
        self.refresh_tags(catalog);
        warnings
    }

    /// Insert a tag at a character offset (appending when `None`).
    ///
    /// An offset inside an existing tag is moved to the end of that tag.
    pub fn insert_tag(
        &mut self,
        tag: &str,
        position: Option<usize>,
        catalog: &TagCatalog,
    ) -> Result<(), DraftError> {
        if !catalog.contains(tag) {
            return Err(DraftError::UnknownTag {
                tag: tag.to_string(),
            });
        }
        if self.contains_tag(tag) {
            debug!(tag, "rejected duplicate tag insertion");
            return Err(DraftError::DuplicateTag {
                tag: tag.to_string(),
            });
        }

        let mut at = position.map_or(self.body.len(), |pos| byte_offset(&self.body, pos));
        if let Some(enclosing) = find_tags(&self.body, catalog)
            .into_iter()
            .find(|occurrence| occurrence.start < at && at < occurrence.end)
        {
            at = enclosing.end;
        }
        self.body.insert_str(at, tag);
        self.refresh_tags(catalog);
        Ok(())
    }

    /// Segment sizing for the current body.
    pub fn segments(&self, catalog: &TagCatalog) -> SegmentResult {
        compute_segments(&self.body, catalog)
    }

    fn refresh_tags(&mut self, catalog: &TagCatalog) {
        self.inserted_tags = find_tags(&self.body, catalog)
            .into_iter()
            .map(|occurrence| occurrence.tag)
            .collect();
    }
}
