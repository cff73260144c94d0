//! Australian mobile numbers.
//!
//! Accepted shapes: `0412 345 678`, `+61 412 345 678`, `61412345678`. After
//! dropping formatting and the country or trunk prefix, a mobile number is
//! 9 digits starting with 4.

use sms_model::Violation;

use crate::util::digits_only;

const COUNTRY_PREFIX: &str = "61";
const NATIONAL_LENGTH: usize = 9;

pub(super) fn check(raw: &str) -> Result<(), Violation> {
    let national = national_digits(raw);
    if national.len() != NATIONAL_LENGTH {
        return Err(Violation::PhoneLength {
            digits: national.len(),
        });
    }
    if !national.starts_with('4') {
        return Err(Violation::PhoneLeadingDigit);
    }
    Ok(())
}

fn national_digits(raw: &str) -> String {
    let digits = digits_only(raw);
    if let Some(rest) = digits.strip_prefix(COUNTRY_PREFIX) {
        rest.to_string()
    } else if let Some(rest) = digits.strip_prefix('0') {
        rest.to_string()
    } else {
        digits
    }
}

/// Canonical `61XXXXXXXXX` form of a valid mobile number.
pub fn normalize_phone(raw: &str) -> Option<String> {
    check(raw)
        .ok()
        .map(|()| format!("{COUNTRY_PREFIX}{}", national_digits(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_local_and_international_forms() {
        assert!(check("61412345678").is_ok());
        assert!(check("0412345678").is_ok());
        assert!(check("+61 412 345 678").is_ok());
        assert!(check("0412 345 678").is_ok());
        assert!(check("412345678").is_ok());
    }

    #[test]
    fn reports_length_before_leading_digit() {
        assert_eq!(check("61512345678"), Err(Violation::PhoneLeadingDigit));
        assert_eq!(check("0512"), Err(Violation::PhoneLength { digits: 3 }));
        assert_eq!(
            check("6141234567890"),
            Err(Violation::PhoneLength { digits: 11 })
        );
    }

    #[test]
    fn normalizes_to_country_form() {
        assert_eq!(normalize_phone("0412 345 678").as_deref(), Some("61412345678"));
        assert_eq!(normalize_phone("+61412345678").as_deref(), Some("61412345678"));
        assert_eq!(normalize_phone("0512345678"), None);
    }
}
