//! Effective length and segment count of a message.

use sms_catalog::TagCatalog;
use sms_model::{SegmentPolicy, SegmentResult};
use tracing::trace;

use crate::tags::substitute_tags;
use crate::text::{effective_length, strip_emoji};

/// Compute the effective length and segment count of a message with the
/// standard 160/153 limits.
pub fn compute_segments(message: &str, catalog: &TagCatalog) -> SegmentResult {
    compute_segments_with(message, catalog, &SegmentPolicy::default())
}

/// Compute the effective length and segment count of a message.
///
/// Emoji are stripped first, then tags are replaced with their stand-ins,
/// then line breaks are counted as one character each.
pub fn compute_segments_with(
    message: &str,
    catalog: &TagCatalog,
    policy: &SegmentPolicy,
) -> SegmentResult {
    let rendered = render_for_length(message, catalog);
    let effective_length = effective_length(&rendered);
    let segment_count = policy.segments_for(effective_length);
    trace!(
        input_chars = message.chars().count(),
        effective_length, segment_count, "segments computed"
    );
    SegmentResult {
        effective_length,
        segment_count,
    }
}

/// The text whose length is billed: emoji removed, tags substituted.
pub fn render_for_length(message: &str, catalog: &TagCatalog) -> String {
    substitute_tags(&strip_emoji(message), catalog)
}
