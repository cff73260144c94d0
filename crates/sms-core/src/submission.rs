//! Campaign submission flow.
//!
//! ```text
//! Draft -> Validating -> BalanceChecking -> Submitting -> Success
//!              |               |                |
//!              +---------------+----------------+--> Failed -> Draft
//! ```
//!
//! The balance guard runs before the backend is asked to send anything. A
//! failure sends the flow back to `Draft` with the error attached; success
//! ends the flow.

use chrono::{DateTime, Utc};
use sms_catalog::TagCatalog;
use sms_model::{
    Account, CampaignSubmission, Field, SegmentPolicy, SubmissionReceipt, ValidationError,
};
use sms_validate::validate_field;
use tracing::{info, info_span, warn};

use crate::campaign::{CampaignError, EstimateCheck, Pricing, estimate_campaign};
use crate::segment::compute_segments_with;
use crate::tags::first_duplicate;
use crate::text::strip_emoji;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Draft,
    Validating,
    BalanceChecking,
    Submitting,
    Success,
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Draft => "draft",
            SubmissionState::Validating => "validating",
            SubmissionState::BalanceChecking => "balance_checking",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success => "success",
            SubmissionState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported by the REST collaborators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("campaign rejected: {0}")]
    Rejected(String),
}

/// Contact-list, account and submission endpoints.
pub trait CampaignBackend {
    /// Number of contacts in a list.
    fn contact_count(&mut self, list: &str) -> Result<u64, BackendError>;

    /// Current account balance and defaults.
    fn account(&mut self) -> Result<Account, BackendError>;

    /// Send or schedule a campaign.
    fn submit(&mut self, payload: &CampaignSubmission) -> Result<SubmissionReceipt, BackendError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("merge tag {tag} appears more than once")]
    DuplicateTag { tag: String },
    #[error("{0}")]
    Field(#[from] ValidationError),
    #[error("scheduled time {scheduled_at} is not in the future")]
    ScheduleInPast { scheduled_at: DateTime<Utc> },
    #[error(transparent)]
    Campaign(#[from] CampaignError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("this submission has already completed")]
    Finished,
}

/// What the campaign form hands to the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub message: String,
    pub contact_list: String,
    pub sender: String,
    pub url: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// One submission attempt and the states it has passed through.
#[derive(Debug, Clone)]
pub struct SubmissionFlow {
    state: SubmissionState,
    history: Vec<SubmissionState>,
    last_error: Option<SubmissionError>,
    policy: SegmentPolicy,
    pricing: Pricing,
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new(SegmentPolicy::default(), Pricing::default())
    }
}

impl SubmissionFlow {
    pub fn new(policy: SegmentPolicy, pricing: Pricing) -> Self {
        Self {
            state: SubmissionState::Draft,
            history: vec![SubmissionState::Draft],
            last_error: None,
            policy,
            pricing,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// States entered during the latest attempt, starting from `Draft`.
    pub fn history(&self) -> &[SubmissionState] {
        &self.history
    }

    /// Error from the last failed attempt, cleared by [`Self::edit`].
    pub fn last_error(&self) -> Option<&SubmissionError> {
        self.last_error.as_ref()
    }

    /// Record a form edit. The flow stays in `Draft`.
    pub fn edit(&mut self) -> Result<(), SubmissionError> {
        if self.state == SubmissionState::Success {
            return Err(SubmissionError::Finished);
        }
        self.last_error = None;
        Ok(())
    }

    /// Validate, check the balance and submit.
    ///
    /// `now` is the reference time for rejecting schedules in the past.
    pub fn submit<B>(
        &mut self,
        request: &SubmissionRequest,
        catalog: &TagCatalog,
        backend: &mut B,
        now: DateTime<Utc>,
    ) -> Result<SubmissionReceipt, SubmissionError>
    where
        B: CampaignBackend + ?Sized,
    {
        if self.state == SubmissionState::Success {
            return Err(SubmissionError::Finished);
        }
        let span = info_span!("submission", contact_list = %request.contact_list);
        let _guard = span.enter();
        self.history.clear();
        self.history.push(self.state);

        match self.run(request, catalog, backend, now) {
            Ok(receipt) => {
                self.enter(SubmissionState::Success);
                info!(campaign_id = %receipt.campaign_id, "campaign submitted");
                Ok(receipt)
            }
            Err(error) => {
                self.enter(SubmissionState::Failed);
                warn!(error = %error, "campaign submission blocked");
                self.enter(SubmissionState::Draft);
                self.last_error = Some(error.clone());
                Err(error)
            }
        }
    }

    fn run<B>(
        &mut self,
        request: &SubmissionRequest,
        catalog: &TagCatalog,
        backend: &mut B,
        now: DateTime<Utc>,
    ) -> Result<SubmissionReceipt, SubmissionError>
    where
        B: CampaignBackend + ?Sized,
    {
        self.enter(SubmissionState::Validating);
        let message = strip_emoji(&request.message);
        validate_request(request, &message, catalog, now)?;
        let segments = compute_segments_with(&message, catalog, &self.policy);

        self.enter(SubmissionState::BalanceChecking);
        let contact_count = backend.contact_count(&request.contact_list)?;
        let account = backend.account()?;
        let estimate = estimate_campaign(
            segments.segment_count,
            contact_count,
            self.pricing.cost_per_segment,
            account.balance,
        );
        estimate.check()?;

        self.enter(SubmissionState::Submitting);
        let payload = CampaignSubmission {
            segment_count: estimate.segment_count,
            contact_count: estimate.contact_count,
            total_cost: estimate.total_cost,
            scheduled_at: request.scheduled_at,
            message,
            sender: request.sender.trim().to_string(),
            url: request
                .url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
        };
        Ok(backend.submit(&payload)?)
    }

    fn enter(&mut self, next: SubmissionState) {
        info!(from = %self.state, to = %next, "submission state");
        self.state = next;
        self.history.push(next);
    }
}

fn validate_request(
    request: &SubmissionRequest,
    message: &str,
    catalog: &TagCatalog,
    now: DateTime<Utc>,
) -> Result<(), SubmissionError> {
    if message.trim().is_empty() {
        return Err(SubmissionError::EmptyMessage);
    }
    if let Some(tag) = first_duplicate(message, catalog) {
        return Err(SubmissionError::DuplicateTag { tag });
    }
    if let Some(error) = validate_field(Field::Sender, &request.sender) {
        return Err(error.into());
    }
    if let Some(url) = &request.url
        && let Some(error) = validate_field(Field::Url, url)
    {
        return Err(error.into());
    }
    if let Some(scheduled_at) = request.scheduled_at
        && scheduled_at <= now
    {
        return Err(SubmissionError::ScheduleInPast { scheduled_at });
    }
    Ok(())
}

/// Backend that accepts every campaign without sending it.
///
/// Contact count and balance are fixed up front; accepted payloads are kept
/// for inspection.
#[derive(Debug, Clone)]
pub struct DryRunBackend {
    contact_count: u64,
    account: Account,
    submitted: Vec<CampaignSubmission>,
}

impl DryRunBackend {
    pub fn new(contact_count: u64, account: Account) -> Self {
        Self {
            contact_count,
            account,
            submitted: Vec::new(),
        }
    }

    pub fn submitted(&self) -> &[CampaignSubmission] {
        &self.submitted
    }
}

impl CampaignBackend for DryRunBackend {
    fn contact_count(&mut self, _list: &str) -> Result<u64, BackendError> {
        Ok(self.contact_count)
    }

    fn account(&mut self) -> Result<Account, BackendError> {
        Ok(self.account.clone())
    }

    fn submit(&mut self, payload: &CampaignSubmission) -> Result<SubmissionReceipt, BackendError> {
        self.submitted.push(payload.clone());
        Ok(SubmissionReceipt {
            campaign_id: format!("dry-run-{}", self.submitted.len()),
            payload: payload.clone(),
        })
    }
}
