//! ABN (11 digits) and ACN (9 digits) share one field; only the digit count
//! is checked.

use std::ops::RangeInclusive;

use sms_model::Violation;

use crate::util::digits_only;

const DIGIT_RANGE: RangeInclusive<usize> = 9..=11;

pub(super) fn check(raw: &str) -> Result<(), Violation> {
    let digits = digits_only(raw).len();
    if DIGIT_RANGE.contains(&digits) {
        Ok(())
    } else {
        Err(Violation::AbnLength { digits })
    }
}
