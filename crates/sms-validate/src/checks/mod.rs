//! Validation check modules.
//!
//! Each module holds the format rule for one field. Blank-input handling for
//! required fields happens once in [`check_field`] so every field reports
//! `Required` the same way.

mod abn;
mod email;
mod phone;
mod postcode;
mod sender;
mod url;

pub use phone::normalize_phone;
pub use sender::SENDER_MAX_LENGTH;

use sms_model::{Field, Violation};

use crate::util::is_blank;

/// Run the rule for `field` against `raw`.
pub fn check_field(field: Field, raw: &str) -> Result<(), Violation> {
    if is_blank(raw) {
        return if field.is_required() {
            Err(Violation::Required)
        } else {
            Ok(())
        };
    }
    match field {
        Field::Phone => phone::check(raw),
        Field::Postcode => postcode::check(raw),
        Field::Abn => abn::check(raw),
        Field::Sender => sender::check(raw),
        Field::Email => email::check(raw),
        // Any non-blank business name is accepted.
        Field::BusinessName => Ok(()),
        Field::Url => url::check(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_name_only_needs_content() {
        assert_eq!(check_field(Field::BusinessName, "Acme Pty Ltd"), Ok(()));
        assert_eq!(check_field(Field::BusinessName, "  "), Err(Violation::Required));
    }

    #[test]
    fn blank_url_is_optional() {
        assert_eq!(check_field(Field::Url, ""), Ok(()));
    }
}
