//! Field validation results.
//!
//! Validators report problems as values rather than failures: a
//! [`ValidationError`] binds a [`Violation`] to the form [`Field`] it was
//! found on, and a [`ValidationReport`] collects them for a whole form.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Form fields with a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Phone,
    Postcode,
    Abn,
    Sender,
    Email,
    BusinessName,
    Url,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Phone,
        Field::Postcode,
        Field::Abn,
        Field::Sender,
        Field::Email,
        Field::BusinessName,
        Field::Url,
    ];

    /// Wire name used by form payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Phone => "phone",
            Field::Postcode => "postcode",
            Field::Abn => "abn",
            Field::Sender => "sender",
            Field::Email => "email",
            Field::BusinessName => "business_name",
            Field::Url => "url",
        }
    }

    /// Whether blank input is rejected for this field.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Url)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Parse a field name, accepting the aliases used by the admin forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "phone" | "mobile" => Ok(Field::Phone),
            "postcode" => Ok(Field::Postcode),
            "abn" | "acn" | "abn_acn" => Ok(Field::Abn),
            "sender" | "sender_name" => Ok(Field::Sender),
            "email" => Ok(Field::Email),
            "business_name" | "company" => Ok(Field::BusinessName),
            "url" => Ok(Field::Url),
            _ => Err(format!("Unknown field: {s}")),
        }
    }
}

/// The rule a field value broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("is required")]
    Required,
    #[error("must contain 9 digits after the country prefix (found {digits})")]
    PhoneLength { digits: usize },
    #[error("must start with 4")]
    PhoneLeadingDigit,
    #[error("must be exactly 4 digits (found {digits})")]
    PostcodeLength { digits: usize },
    #[error("must contain between 9 and 11 digits (found {digits})")]
    AbnLength { digits: usize },
    #[error("must be at most {max} characters (found {length})")]
    SenderTooLong { length: usize, max: usize },
    #[error("must be a valid email address")]
    EmailFormat,
    #[error("must be an http:// or https:// URL")]
    UrlFormat,
}

impl Violation {
    /// Whether this is the blank-input error rather than a format error.
    pub fn is_required(&self) -> bool {
        matches!(self, Violation::Required)
    }
}

/// A violation bound to the field it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub violation: Violation,
}

impl ValidationError {
    pub fn new(field: Field, violation: Violation) -> Self {
        Self { field, violation }
    }

    /// User-facing message shown next to the field.
    pub fn message(&self) -> String {
        self.violation.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.violation)
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("field", self.field.as_str())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Validation outcome for a whole form, in field order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.field == field)
    }

    pub fn required_count(&self) -> usize {
        self.errors
            .iter()
            .filter(|error| error.violation.is_required())
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl Extend<ValidationError> for ValidationReport {
    fn extend<T: IntoIterator<Item = ValidationError>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}
