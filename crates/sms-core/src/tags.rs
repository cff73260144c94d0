//! Merge-tag scanning and substitution.
//!
//! All scans walk the text once, left to right, matching catalog tags at
//! each position. Replacement text is emitted as-is and never scanned again.

use std::collections::BTreeMap;

use sms_catalog::TagCatalog;

/// A catalog tag found in a message, with its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOccurrence {
    pub tag: String,
    pub start: usize,
    pub end: usize,
}

/// Later copies of a tag removed from a free-text edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTagWarning {
    pub tag: String,
    pub removed: usize,
}

impl std::fmt::Display for DuplicateTagWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} can only be used once; removed {} extra occurrence(s)",
            self.tag, self.removed
        )
    }
}

/// Find every catalog tag in `text`, in order of appearance.
pub fn find_tags(text: &str, catalog: &TagCatalog) -> Vec<TagOccurrence> {
    let mut found = Vec::new();
    let mut idx = 0;
    while idx < text.len() {
        let rest = &text[idx..];
        if let Some(entry) = catalog.match_at(rest) {
            let end = idx + entry.tag.len();
            found.push(TagOccurrence {
                tag: entry.tag.clone(),
                start: idx,
                end,
            });
            idx = end;
        } else {
            idx += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    found
}

/// Replace each tag with its fixed-width stand-in.
pub fn substitute_tags(text: &str, catalog: &TagCatalog) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for occurrence in find_tags(text, catalog) {
        out.push_str(&text[last..occurrence.start]);
        if let Some(entry) = catalog.get(&occurrence.tag) {
            out.push_str(entry.effective_replacement());
        }
        last = occurrence.end;
    }
    out.push_str(&text[last..]);
    out
}

/// How many times each catalog tag appears in `text`.
pub fn tag_counts(text: &str, catalog: &TagCatalog) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for occurrence in find_tags(text, catalog) {
        *counts.entry(occurrence.tag).or_insert(0) += 1;
    }
    counts
}

/// First tag that appears more than once, if any.
pub fn first_duplicate(text: &str, catalog: &TagCatalog) -> Option<String> {
    tag_counts(text, catalog)
        .into_iter()
        .find(|(_, count)| *count > 1)
        .map(|(tag, _)| tag)
}

/// Keep the first occurrence of every tag and delete the rest.
pub fn dedupe_tags(text: &str, catalog: &TagCatalog) -> (String, Vec<DuplicateTagWarning>) {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for occurrence in find_tags(text, catalog) {
        let count = seen.entry(occurrence.tag.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            out.push_str(&text[last..occurrence.start]);
            last = occurrence.end;
        }
    }
    out.push_str(&text[last..]);

    let warnings = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(tag, count)| DuplicateTagWarning {
            tag,
            removed: count - 1,
        })
        .collect();
    (out, warnings)
}
