//! SMS segment sizing.
//!
//! A single SMS carries up to 160 characters. Once a message spans more than
//! one part, each part reserves 7 characters for the User Data Header that
//! stitches the parts back together, leaving 153 characters of payload.

use serde::{Deserialize, Serialize};

/// Maximum characters in a single, non-concatenated SMS.
pub const SINGLE_SEGMENT_LIMIT: usize = 160;

/// Characters reserved per part of a concatenated SMS.
pub const CONCAT_OVERHEAD: usize = 7;

/// Segment sizing limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentPolicy {
    pub single_limit: usize,
    pub concat_overhead: usize,
}

impl Default for SegmentPolicy {
    fn default() -> Self {
        Self {
            single_limit: SINGLE_SEGMENT_LIMIT,
            concat_overhead: CONCAT_OVERHEAD,
        }
    }
}

impl SegmentPolicy {
    /// Payload characters available in each part of a concatenated message.
    pub fn concat_limit(&self) -> usize {
        self.single_limit.saturating_sub(self.concat_overhead)
    }

    /// Whether the limits describe a usable policy.
    pub fn is_valid(&self) -> bool {
        self.single_limit > 0 && self.concat_overhead < self.single_limit
    }

    /// Number of segments needed for a message of `length` characters.
    pub fn segments_for(&self, length: usize) -> u32 {
        if length == 0 {
            return 0;
        }
        if length <= self.single_limit {
            return 1;
        }
        let per_part = self.concat_limit().max(1);
        u32::try_from(length.div_ceil(per_part)).unwrap_or(u32::MAX)
    }
}

/// Derived length and segment count for a message body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentResult {
    pub effective_length: usize,
    pub segment_count: u32,
}
