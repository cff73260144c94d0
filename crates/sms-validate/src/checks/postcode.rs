use sms_model::Violation;

use crate::util::digits_only;

const POSTCODE_LENGTH: usize = 4;

pub(super) fn check(raw: &str) -> Result<(), Violation> {
    let digits = digits_only(raw).len();
    if digits == POSTCODE_LENGTH {
        Ok(())
    } else {
        Err(Violation::PostcodeLength { digits })
    }
}
