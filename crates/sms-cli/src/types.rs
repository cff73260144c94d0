use serde::Serialize;

use sms_model::{CampaignEstimate, SegmentResult, SubmissionReceipt, ValidationReport};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentsOutcome {
    pub characters: usize,
    #[serde(flatten)]
    pub result: SegmentResult,
    pub tags: Vec<String>,
    pub duplicate_tags: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRow {
    pub tag: String,
    pub label: String,
    pub replacement: String,
    pub counted_length: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOutcome {
    pub field: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterOutcome {
    pub valid: bool,
    pub report: ValidationReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateOutcome {
    pub estimate: CampaignEstimate,
    pub currency: String,
    pub sendable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignOutcome {
    pub states: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<SubmissionReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
