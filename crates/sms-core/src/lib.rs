//! Core SMS notification logic.
//!
//! - [`segment`]: effective length and segment count of a message
//! - [`draft`]: message editing with the one-of-each-tag rule
//! - [`campaign`]: campaign cost and balance estimation
//! - [`submission`]: the guarded campaign submission flow

pub mod campaign;
pub mod draft;
pub mod segment;
pub mod submission;
pub mod tags;
pub mod text;

pub use campaign::{CampaignError, EstimateCheck, Pricing, estimate_campaign, round_cents};
pub use draft::{DraftError, MessageDraft};
pub use segment::{compute_segments, compute_segments_with, render_for_length};
pub use submission::{
    BackendError, CampaignBackend, DryRunBackend, SubmissionError, SubmissionFlow,
    SubmissionRequest, SubmissionState,
};
pub use tags::{DuplicateTagWarning, TagOccurrence, dedupe_tags, find_tags, substitute_tags};
pub use text::strip_emoji;
