use std::sync::LazyLock;

use regex::Regex;
use sms_model::Violation;

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+\-]+@[a-z0-9\-]+(\.[a-z0-9\-]+)*\.[a-z]{2,}$").ok()
});

pub(super) fn check(raw: &str) -> Result<(), Violation> {
    let value = raw.trim();
    let matches = EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value));
    if matches {
        Ok(())
    } else {
        Err(Violation::EmailFormat)
    }
}
