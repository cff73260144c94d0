use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use sms_catalog::TagCatalog;
use sms_cli::config::Settings;
use sms_cli::logging::redact_value;
use sms_core::tags::tag_counts;
use sms_core::{
    DryRunBackend, EstimateCheck, SubmissionFlow, SubmissionRequest, compute_segments_with,
    estimate_campaign,
};
use sms_model::{Account, Field};
use sms_validate::{RegistrationForm, normalize_phone, validate_field};

use crate::cli::{CampaignArgs, EstimateArgs, RegisterArgs, SegmentsArgs, ValidateArgs};
use crate::summary::{
    print_campaign, print_estimate, print_field, print_register, print_segments, print_tags,
};
use crate::types::{
    CampaignOutcome, EstimateOutcome, FieldOutcome, RegisterOutcome, SegmentsOutcome, TagRow,
};

/// Options shared by every command.
pub struct RunContext<'a> {
    pub settings: &'a Settings,
    pub json: bool,
}

pub fn run_segments(args: &SegmentsArgs, ctx: &RunContext<'_>) -> Result<bool> {
    let message = read_message(args)?;
    let catalog = ctx.settings.catalog()?;
    debug!(
        message = redact_value(&message),
        characters = message.chars().count(),
        "sizing message"
    );
    let outcome = segments_outcome(&message, &catalog, ctx.settings);
    for tag in &outcome.duplicate_tags {
        warn!(tag = %tag, "merge tag used more than once");
    }
    if ctx.json {
        print_json(&outcome)?;
    } else {
        print_segments(&outcome);
    }
    Ok(true)
}

fn segments_outcome(message: &str, catalog: &TagCatalog, settings: &Settings) -> SegmentsOutcome {
    let counts = tag_counts(message, catalog);
    SegmentsOutcome {
        characters: message.chars().count(),
        result: compute_segments_with(message, catalog, &settings.segments),
        duplicate_tags: counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(tag, _)| tag.clone())
            .collect(),
        tags: counts.into_keys().collect(),
    }
}

fn read_message(args: &SegmentsArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return read_file(path);
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("read message from stdin")?;
    // A trailing newline from `echo` or a heredoc is not part of the message
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read message: {}", path.display()))
}

pub fn run_tags(ctx: &RunContext<'_>) -> Result<bool> {
    let catalog = ctx.settings.catalog()?;
    let rows: Vec<TagRow> = catalog
        .iter()
        .map(|tag| TagRow {
            tag: tag.tag.clone(),
            label: tag.label.clone(),
            replacement: tag.replacement.clone(),
            counted_length: tag.effective_replacement().chars().count(),
        })
        .collect();
    if ctx.json {
        print_json(&rows)?;
    } else {
        print_tags(&rows);
    }
    Ok(true)
}

pub fn run_validate(args: &ValidateArgs, ctx: &RunContext<'_>) -> Result<bool> {
    let error = validate_field(args.field, &args.value);
    let normalized = match (args.field, &error) {
        (Field::Phone, None) => normalize_phone(&args.value),
        _ => None,
    };
    let outcome = FieldOutcome {
        field: args.field.to_string(),
        valid: error.is_none(),
        message: error.as_ref().map(|error| error.message()),
        normalized,
    };
    if ctx.json {
        print_json(&outcome)?;
    } else {
        print_field(&outcome);
    }
    Ok(outcome.valid)
}

pub fn run_register(args: &RegisterArgs, ctx: &RunContext<'_>) -> Result<bool> {
    let form = RegistrationForm {
        business_name: args.business_name.clone(),
        abn: args.abn.clone(),
        phone: args.phone.clone(),
        postcode: args.postcode.clone(),
        email: args.email.clone(),
        sender: args.sender.clone(),
    };
    let report = form.validate();
    let outcome = RegisterOutcome {
        valid: report.is_valid(),
        report,
    };
    if ctx.json {
        print_json(&outcome)?;
    } else {
        print_register(&outcome);
    }
    Ok(outcome.valid)
}

pub fn run_estimate(args: &EstimateArgs, ctx: &RunContext<'_>) -> Result<bool> {
    let segment_count = match (args.segments, &args.message) {
        (Some(segments), _) => segments,
        (None, Some(message)) => {
            let catalog = ctx.settings.catalog()?;
            compute_segments_with(message, &catalog, &ctx.settings.segments).segment_count
        }
        (None, None) => bail!("either --segments or --message is required"),
    };
    let cost_per_segment = args.cost.unwrap_or(ctx.settings.pricing.cost_per_segment);
    if !cost_per_segment.is_finite() || cost_per_segment < 0.0 {
        bail!("--cost must be a non-negative number (got {cost_per_segment})");
    }
    let balance = finite_balance(args.balance)?;
    let estimate = estimate_campaign(segment_count, args.contacts, cost_per_segment, balance);
    let problem = estimate.check().err().map(|error| error.to_string());
    let outcome = EstimateOutcome {
        estimate,
        currency: ctx.settings.pricing.currency.clone(),
        sendable: problem.is_none(),
        problem,
    };
    if ctx.json {
        print_json(&outcome)?;
    } else {
        print_estimate(&outcome);
    }
    Ok(outcome.sendable)
}

pub fn run_campaign(args: &CampaignArgs, ctx: &RunContext<'_>) -> Result<bool> {
    let span = info_span!("campaign", list = %args.list);
    let _guard = span.enter();
    let balance = finite_balance(args.balance)?;
    let catalog = ctx.settings.catalog()?;
    let mut backend = DryRunBackend::new(
        args.contacts,
        Account {
            balance,
            sender: args.sender.clone(),
            email: String::new(),
        },
    );
    let request = SubmissionRequest {
        message: args.message.clone(),
        contact_list: args.list.clone(),
        sender: args.sender.clone(),
        url: args.url.clone(),
        scheduled_at: args.schedule,
    };
    let mut flow = SubmissionFlow::new(ctx.settings.segments, ctx.settings.pricing.clone());
    let result = flow.submit(&request, &catalog, &mut backend, Utc::now());
    let outcome = CampaignOutcome {
        states: flow
            .history()
            .iter()
            .map(|state| state.as_str().to_string())
            .collect(),
        error: result.as_ref().err().map(ToString::to_string),
        receipt: result.ok(),
    };
    if outcome.receipt.is_some() {
        info!("dry run accepted");
    }
    if ctx.json {
        print_json(&outcome)?;
    } else {
        print_campaign(&outcome, &ctx.settings.pricing.currency);
    }
    Ok(outcome.error.is_none())
}

fn finite_balance(balance: f64) -> Result<f64> {
    if !balance.is_finite() {
        bail!("--balance must be a finite number (got {balance})");
    }
    Ok(balance)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}
