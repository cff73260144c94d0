use serde::{Deserialize, Serialize};

/// A merge tag placeholder and the text used to estimate its rendered width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeTag {
    /// Bracketed placeholder as written in a message (e.g., "[first_name]").
    pub tag: String,
    /// Fixed-width stand-in for the per-recipient value. Empty means the
    /// tag literal itself is counted.
    #[serde(default)]
    pub replacement: String,
    /// Human-readable label shown next to the tag.
    #[serde(default)]
    pub label: String,
}

impl MergeTag {
    pub fn new(tag: impl Into<String>, replacement: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            replacement: replacement.into(),
            label: label.into(),
        }
    }

    /// Text counted in place of the tag when estimating message length.
    pub fn effective_replacement(&self) -> &str {
        if self.replacement.is_empty() {
            &self.tag
        } else {
            &self.replacement
        }
    }
}
