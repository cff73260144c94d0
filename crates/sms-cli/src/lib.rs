//! CLI library components for sms-notify.

pub mod config;
pub mod logging;
