use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cost and balance view of a campaign before it is sent.
///
/// Balance is counted in prepaid SMS credits, so `remaining_balance` is
/// `current_balance - total_segments` while `total_cost` is monetary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignEstimate {
    pub segment_count: u32,
    pub contact_count: u64,
    pub total_segments: u64,
    pub cost_per_segment: f64,
    pub total_cost: f64,
    pub current_balance: f64,
    pub remaining_balance: f64,
}

/// Account details returned by the account endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub balance: f64,
    pub sender: String,
    pub email: String,
}

/// Payload accepted by the campaign submission endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSubmission {
    pub segment_count: u32,
    pub contact_count: u64,
    pub total_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    pub message: String,
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub campaign_id: String,
    pub payload: CampaignSubmission,
}
