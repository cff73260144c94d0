//! CLI argument definitions for sms-notify.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sms_model::Field;

#[derive(Parser)]
#[command(
    name = "sms-notify",
    version,
    about = "SMS notification toolkit - segment, validate and cost SMS campaigns",
    long_about = "Work with SMS notification content outside the store admin.\n\n\
                  Counts segments with merge-tag substitution, validates account\n\
                  registration fields and estimates campaign cost against a balance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow message bodies to appear in logs.
    ///
    /// Message bodies carry customer names and order details, so logs only
    /// show lengths unless this is set.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Configuration file (default: $SMS_NOTIFY_CONFIG, then built-in defaults).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of tables.
    #[arg(long = "json", global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Count the effective length and SMS segments of a message.
    Segments(SegmentsArgs),

    /// List the merge tags available in messages.
    Tags,

    /// Validate a single form field.
    Validate(ValidateArgs),

    /// Validate an account registration form.
    Register(RegisterArgs),

    /// Estimate the cost of a campaign and check it against a balance.
    Estimate(EstimateArgs),

    /// Run a campaign through the submission checks without sending it.
    Campaign(CampaignArgs),
}

#[derive(Parser)]
pub struct SegmentsArgs {
    /// Message text (reads stdin when neither TEXT nor --file is given).
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the message from a file.
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Field name (phone, postcode, abn, sender, email, business_name, url).
    #[arg(value_name = "FIELD")]
    pub field: Field,

    /// Raw value as typed into the form.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Parser)]
pub struct RegisterArgs {
    #[arg(long = "business-name", default_value = "")]
    pub business_name: String,

    /// ABN or ACN.
    #[arg(long = "abn", default_value = "")]
    pub abn: String,

    /// Mobile number.
    #[arg(long = "phone", default_value = "")]
    pub phone: String,

    #[arg(long = "postcode", default_value = "")]
    pub postcode: String,

    #[arg(long = "email", default_value = "")]
    pub email: String,

    /// SMS sender ID (at most 11 characters).
    #[arg(long = "sender", default_value = "")]
    pub sender: String,
}

#[derive(Parser)]
#[command(group(ArgGroup::new("size").required(true).args(["segments", "message"])))]
pub struct EstimateArgs {
    /// Segments per message.
    #[arg(long = "segments")]
    pub segments: Option<u32>,

    /// Message text to size instead of giving --segments.
    #[arg(long = "message")]
    pub message: Option<String>,

    /// Number of contacts that will receive the message.
    #[arg(long = "contacts")]
    pub contacts: u64,

    /// Prepaid balance in SMS credits.
    #[arg(long = "balance", allow_negative_numbers = true)]
    pub balance: f64,

    /// Price per segment (overrides configuration).
    #[arg(long = "cost")]
    pub cost: Option<f64>,
}

#[derive(Parser)]
pub struct CampaignArgs {
    /// Message text.
    #[arg(long = "message")]
    pub message: String,

    /// Contact list identifier.
    #[arg(long = "list", default_value = "all")]
    pub list: String,

    /// Contacts in the list.
    #[arg(long = "contacts")]
    pub contacts: u64,

    /// Prepaid balance in SMS credits.
    #[arg(long = "balance", allow_negative_numbers = true)]
    pub balance: f64,

    /// Sender ID.
    #[arg(long = "sender")]
    pub sender: String,

    /// Link substituted for the [url] tag.
    #[arg(long = "url")]
    pub url: Option<String>,

    /// Send time in RFC 3339 (e.g. 2026-11-01T09:30:00Z); sends now if omitted.
    #[arg(long = "schedule", value_name = "TIME")]
    pub schedule: Option<DateTime<Utc>>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
