//! Submission flow state machine.

use chrono::{Duration, TimeZone, Utc};
use sms_catalog::builtin_catalog;
use sms_core::{
    BackendError, CampaignBackend, CampaignError, DryRunBackend, SubmissionError, SubmissionFlow,
    SubmissionRequest, SubmissionState,
};
use sms_model::{Account, CampaignSubmission, Field, SubmissionReceipt, Violation};

#[derive(Default)]
struct RecordingBackend {
    contacts: u64,
    balance: f64,
    fail_submit: bool,
    calls: Vec<&'static str>,
}

impl CampaignBackend for RecordingBackend {
    fn contact_count(&mut self, _list: &str) -> Result<u64, BackendError> {
        self.calls.push("contact_count");
        Ok(self.contacts)
    }

    fn account(&mut self) -> Result<Account, BackendError> {
        self.calls.push("account");
        Ok(Account {
            balance: self.balance,
            sender: "MyShop".to_string(),
            email: "owner@myshop.com.au".to_string(),
        })
    }

    fn submit(&mut self, payload: &CampaignSubmission) -> Result<SubmissionReceipt, BackendError> {
        self.calls.push("submit");
        if self.fail_submit {
            return Err(BackendError::Request("503 Service Unavailable".to_string()));
        }
        Ok(SubmissionReceipt {
            campaign_id: "cmp-1".to_string(),
            payload: payload.clone(),
        })
    }
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn request(message: &str) -> SubmissionRequest {
    SubmissionRequest {
        message: message.to_string(),
        contact_list: "vip".to_string(),
        sender: "MyShop".to_string(),
        url: None,
        scheduled_at: None,
    }
}

#[test]
fn successful_submission_walks_every_state() {
    let catalog = builtin_catalog();
    let mut backend = RecordingBackend {
        contacts: 100,
        balance: 500.0,
        ..Default::default()
    };
    let mut flow = SubmissionFlow::default();

    let receipt = flow
        .submit(&request("Hi [first_name]"), &catalog, &mut backend, now())
        .expect("submitted");

    assert_eq!(receipt.campaign_id, "cmp-1");
    assert_eq!(receipt.payload.segment_count, 1);
    assert_eq!(receipt.payload.contact_count, 100);
    assert_eq!(receipt.payload.total_cost, 5.0);
    assert_eq!(flow.state(), SubmissionState::Success);
    assert_eq!(
        flow.history(),
        &[
            SubmissionState::Draft,
            SubmissionState::Validating,
            SubmissionState::BalanceChecking,
            SubmissionState::Submitting,
            SubmissionState::Success,
        ]
    );
    assert_eq!(backend.calls, vec!["contact_count", "account", "submit"]);
}

#[test]
fn insufficient_balance_blocks_before_submit() {
    let catalog = builtin_catalog();
    let mut backend = RecordingBackend {
        contacts: 100,
        balance: 150.0,
        ..Default::default()
    };
    let mut flow = SubmissionFlow::default();
    let message = "x".repeat(200);

    let err = flow
        .submit(&request(&message), &catalog, &mut backend, now())
        .unwrap_err();

    assert_eq!(
        err,
        SubmissionError::Campaign(CampaignError::InsufficientBalance {
            required: 200,
            available: 150.0
        })
    );
    assert!(!backend.calls.contains(&"submit"));
    assert_eq!(flow.state(), SubmissionState::Draft);
    assert_eq!(flow.last_error(), Some(&err));
    assert_eq!(
        flow.history()[flow.history().len() - 2..],
        [SubmissionState::Failed, SubmissionState::Draft]
    );
}

#[test]
fn empty_contact_list_is_nothing_to_send() {
    let catalog = builtin_catalog();
    let mut backend = RecordingBackend {
        contacts: 0,
        balance: 50.0,
        ..Default::default()
    };
    let mut flow = SubmissionFlow::default();
    let err = flow
        .submit(&request("Hello"), &catalog, &mut backend, now())
        .unwrap_err();
    assert_eq!(err, SubmissionError::Campaign(CampaignError::NothingToSend));
}

#[test]
fn validation_failures_skip_the_backend() {
    let catalog = builtin_catalog();
    let mut backend = RecordingBackend::default();
    let mut flow = SubmissionFlow::default();

    let err = flow
        .submit(&request("🎉🎉"), &catalog, &mut backend, now())
        .unwrap_err();
    assert_eq!(err, SubmissionError::EmptyMessage);

    let mut bad_sender = request("Hello");
    bad_sender.sender = "A Very Long Sender".to_string();
    let err = flow
        .submit(&bad_sender, &catalog, &mut backend, now())
        .unwrap_err();
    assert!(matches!(
        err,
        SubmissionError::Field(ref e) if e.field == Field::Sender
            && matches!(e.violation, Violation::SenderTooLong { .. })
    ));

    let err = flow
        .submit(&request("[url] and [url]"), &catalog, &mut backend, now())
        .unwrap_err();
    assert_eq!(
        err,
        SubmissionError::DuplicateTag {
            tag: "[url]".to_string()
        }
    );

    let mut past = request("Hello");
    past.scheduled_at = Some(now() - Duration::hours(1));
    let err = flow.submit(&past, &catalog, &mut backend, now()).unwrap_err();
    assert!(matches!(err, SubmissionError::ScheduleInPast { .. }));

    assert!(backend.calls.is_empty());
}

#[test]
fn backend_failure_returns_to_draft_and_edit_clears_error() {
    let catalog = builtin_catalog();
    let mut backend = RecordingBackend {
        contacts: 10,
        balance: 100.0,
        fail_submit: true,
        ..Default::default()
    };
    let mut flow = SubmissionFlow::default();

    let err = flow
        .submit(&request("Hello"), &catalog, &mut backend, now())
        .unwrap_err();
    assert!(matches!(err, SubmissionError::Backend(BackendError::Request(_))));
    assert_eq!(flow.state(), SubmissionState::Draft);
    assert!(flow.last_error().is_some());

    flow.edit().unwrap();
    assert_eq!(flow.state(), SubmissionState::Draft);
    assert!(flow.last_error().is_none());

    backend.fail_submit = false;
    assert!(flow
        .submit(&request("Hello"), &catalog, &mut backend, now())
        .is_ok());
}

#[test]
fn success_is_terminal() {
    let catalog = builtin_catalog();
    let mut backend = RecordingBackend {
        contacts: 1,
        balance: 1.0,
        ..Default::default()
    };
    let mut flow = SubmissionFlow::default();
    flow.submit(&request("Hello"), &catalog, &mut backend, now())
        .unwrap();

    assert_eq!(flow.edit(), Err(SubmissionError::Finished));
    assert_eq!(
        flow.submit(&request("Hello"), &catalog, &mut backend, now()),
        Err(SubmissionError::Finished)
    );
    assert_eq!(backend.calls.iter().filter(|c| **c == "submit").count(), 1);
}

#[test]
fn dry_run_backend_records_payload() {
    let catalog = builtin_catalog();
    let mut backend = DryRunBackend::new(
        3,
        Account {
            balance: 10.0,
            sender: "MyShop".to_string(),
            email: "owner@myshop.com.au".to_string(),
        },
    );
    let mut flow = SubmissionFlow::default();
    let mut req = request("Sale now on 🎉 [url]");
    req.url = Some(" https://myshop.com.au/sale ".to_string());
    req.scheduled_at = Some(now() + Duration::days(1));

    let receipt = flow.submit(&req, &catalog, &mut backend, now()).unwrap();
    assert_eq!(receipt.campaign_id, "dry-run-1");
    assert_eq!(backend.submitted().len(), 1);

    let payload = &backend.submitted()[0];
    assert_eq!(payload.message, "Sale now on  [url]");
    assert_eq!(payload.url.as_deref(), Some("https://myshop.com.au/sale"));
    let json = serde_json::to_value(payload).unwrap();
    assert_eq!(json["scheduledAt"], "2026-10-20T12:00:00Z");
    assert_eq!(json["totalCost"], 0.15);
}

#[test]
fn nan_balance_from_backend_blocks_submission() {
    let catalog = builtin_catalog();
    let mut backend = RecordingBackend {
        contacts: 100,
        balance: f64::NAN,
        ..Default::default()
    };
    let mut flow = SubmissionFlow::default();

    let err = flow
        .submit(&request("Hello"), &catalog, &mut backend, now())
        .unwrap_err();

    assert!(matches!(
        err,
        SubmissionError::Campaign(CampaignError::InvalidBalance { .. })
    ));
    assert!(!backend.calls.contains(&"submit"));
}

#[test]
fn history_covers_only_the_latest_attempt() {
    let catalog = builtin_catalog();
    let mut backend = RecordingBackend {
        contacts: 100,
        balance: 10.0,
        ..Default::default()
    };
    let mut flow = SubmissionFlow::default();

    for _ in 0..3 {
        flow.submit(&request("Hello"), &catalog, &mut backend, now())
            .unwrap_err();
    }

    assert_eq!(
        flow.history(),
        &[
            SubmissionState::Draft,
            SubmissionState::Validating,
            SubmissionState::BalanceChecking,
            SubmissionState::Failed,
            SubmissionState::Draft,
        ]
    );
}
