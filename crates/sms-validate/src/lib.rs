//! Form validation for SMS account registration and campaign forms.
//!
//! Validators are pure: they read the raw input, normalize a copy where the
//! rule calls for it (digits only for phone, postcode and ABN), and return a
//! [`ValidationError`] bound to the field, or nothing when the value is fine.

mod checks;
mod util;

pub use checks::{SENDER_MAX_LENGTH, normalize_phone};
pub use util::digits_only;

use serde::{Deserialize, Serialize};
use sms_model::{Field, ValidationError, ValidationReport};
use tracing::debug;

/// Validate one field value.
pub fn validate_field(field: Field, raw: &str) -> Option<ValidationError> {
    match checks::check_field(field, raw) {
        Ok(()) => None,
        Err(violation) => {
            debug!(field = %field, violation = %violation, "field rejected");
            Some(ValidationError::new(field, violation))
        }
    }
}

/// Validate several field values, keeping input order.
pub fn validate_fields<'a, I>(values: I) -> ValidationReport
where
    I: IntoIterator<Item = (Field, &'a str)>,
{
    let mut report = ValidationReport::default();
    report.extend(
        values
            .into_iter()
            .filter_map(|(field, raw)| validate_field(field, raw)),
    );
    report
}

/// Values collected by the account registration wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub business_name: String,
    pub abn: String,
    pub phone: String,
    pub postcode: String,
    pub email: String,
    pub sender: String,
}

impl RegistrationForm {
    /// Check every field and collect all problems.
    pub fn validate(&self) -> ValidationReport {
        let report = validate_fields([
            (Field::BusinessName, self.business_name.as_str()),
            (Field::Abn, self.abn.as_str()),
            (Field::Phone, self.phone.as_str()),
            (Field::Postcode, self.postcode.as_str()),
            (Field::Email, self.email.as_str()),
            (Field::Sender, self.sender.as_str()),
        ]);
        debug!(error_count = report.len(), "registration form validated");
        report
    }
}
