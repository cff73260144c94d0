use sms_model::Violation;

/// Longest alphanumeric sender ID a carrier accepts.
pub const SENDER_MAX_LENGTH: usize = 11;

pub(super) fn check(raw: &str) -> Result<(), Violation> {
    let length = raw.trim().chars().count();
    if length > SENDER_MAX_LENGTH {
        return Err(Violation::SenderTooLong {
            length,
            max: SENDER_MAX_LENGTH,
        });
    }
    Ok(())
}
