//! Integration tests for field and form validation.

use sms_model::{Field, Violation};
use sms_validate::{RegistrationForm, normalize_phone, validate_field, validate_fields};

fn message(field: Field, raw: &str) -> Option<String> {
    validate_field(field, raw).map(|error| error.message())
}

#[test]
fn phone_examples() {
    assert_eq!(validate_field(Field::Phone, "61412345678"), None);
    assert_eq!(validate_field(Field::Phone, "0412345678"), None);
    assert_eq!(
        normalize_phone("0412345678"),
        normalize_phone("61412345678")
    );
    insta::assert_snapshot!(message(Field::Phone, "61512345678").unwrap(), @"must start with 4");
}

#[test]
fn phone_length_and_leading_digit_are_distinct() {
    let length = validate_field(Field::Phone, "04123").unwrap();
    assert_eq!(length.violation, Violation::PhoneLength { digits: 4 });
    let leading = validate_field(Field::Phone, "0312345678").unwrap();
    assert_eq!(leading.violation, Violation::PhoneLeadingDigit);
}

#[test]
fn postcode_examples() {
    assert_eq!(validate_field(Field::Postcode, "2000"), None);
    let error = validate_field(Field::Postcode, "20000").unwrap();
    assert_eq!(error.field, Field::Postcode);
    insta::assert_snapshot!(error.to_string(), @"postcode: must be exactly 4 digits (found 5)");
}

#[test]
fn abn_accepts_nine_to_eleven_digits() {
    assert_eq!(validate_field(Field::Abn, "51 824 753 556"), None);
    assert_eq!(validate_field(Field::Abn, "004-085-616"), None);
    assert!(validate_field(Field::Abn, "1234").is_some());
}

#[test]
fn required_is_distinct_from_format_errors() {
    for field in [
        Field::Phone,
        Field::Postcode,
        Field::Abn,
        Field::Sender,
        Field::Email,
        Field::BusinessName,
    ] {
        let error = validate_field(field, "   ").expect("blank input rejected");
        assert_eq!(error.violation, Violation::Required, "{field}");
    }
    assert_eq!(
        validate_field(Field::Email, "nope").map(|e| e.violation),
        Some(Violation::EmailFormat)
    );
}

#[test]
fn url_is_optional() {
    assert_eq!(validate_field(Field::Url, ""), None);
    assert_eq!(validate_field(Field::Url, "https://shop.example"), None);
    assert_eq!(
        validate_field(Field::Url, "shop.example").map(|e| e.violation),
        Some(Violation::UrlFormat)
    );
}

#[test]
fn sender_name_limit() {
    assert_eq!(validate_field(Field::Sender, "MyShop"), None);
    insta::assert_snapshot!(
        message(Field::Sender, "My Great Shop").unwrap(),
        @"must be at most 11 characters (found 13)"
    );
}

#[test]
fn validators_do_not_mutate_input() {
    let raw = String::from("+61 412 345 678");
    let before = raw.clone();
    let _ = validate_field(Field::Phone, &raw);
    assert_eq!(raw, before);
}

#[test]
fn validate_fields_keeps_order() {
    let report = validate_fields([
        (Field::Email, "bad"),
        (Field::Phone, "0412345678"),
        (Field::Postcode, ""),
    ]);
    let fields: Vec<Field> = report.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Email, Field::Postcode]);
    assert_eq!(report.required_count(), 1);
}

#[test]
fn registration_form_collects_every_error() {
    let form = RegistrationForm {
        business_name: "Corner Store".to_string(),
        abn: "12".to_string(),
        phone: "0412 345 678".to_string(),
        postcode: "".to_string(),
        email: "owner@cornerstore.com.au".to_string(),
        sender: "CornerStoreAU".to_string(),
    };
    let report = form.validate();
    let fields: Vec<Field> = report.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Abn, Field::Postcode, Field::Sender]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["errors"][1]["field"], "postcode");
    assert_eq!(json["errors"][1]["message"], "is required");
}

#[test]
fn valid_registration_form() {
    let form = RegistrationForm {
        business_name: "Corner Store".to_string(),
        abn: "51 824 753 556".to_string(),
        phone: "+61 412 345 678".to_string(),
        postcode: "2000".to_string(),
        email: "owner@cornerstore.com.au".to_string(),
        sender: "CornerStore".to_string(),
    };
    assert!(form.validate().is_valid());
}
