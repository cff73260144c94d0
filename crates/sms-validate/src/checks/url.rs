use sms_model::Violation;

pub(super) fn check(raw: &str) -> Result<(), Violation> {
    let value = raw.trim();
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    let host = rest
        .map(|rest| rest.split(['/', '?', '#']).next().unwrap_or(""))
        .unwrap_or("");
    let valid = !host.is_empty()
        && !value.chars().any(char::is_whitespace)
        && host
            .chars()
            .all(|ch| ch.is_alphanumeric() || matches!(ch, '.' | '-' | ':'));
    if valid {
        Ok(())
    } else {
        Err(Violation::UrlFormat)
    }
}
