use std::fs;

use sms_cli::config::Settings;
use sms_model::SegmentPolicy;

#[test]
fn empty_config_uses_defaults() {
    let settings = Settings::from_toml("").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.segments, SegmentPolicy::default());
    assert_eq!(settings.pricing.cost_per_segment, 0.05);
    assert_eq!(settings.pricing.currency, "AUD");
    assert!(settings.catalog.path.is_none());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let settings = Settings::from_toml(
        r#"
[pricing]
cost_per_segment = 0.045
"#,
    )
    .unwrap();
    assert_eq!(settings.pricing.cost_per_segment, 0.045);
    assert_eq!(settings.pricing.currency, "AUD");
    assert_eq!(settings.segments.single_limit, 160);
    assert_eq!(settings.segments.concat_overhead, 7);
}

#[test]
fn rejects_overhead_at_or_above_limit() {
    let error = Settings::from_toml(
        r#"
[segments]
single_limit = 70
concat_overhead = 70
"#,
    )
    .unwrap_err();
    assert!(error.to_string().contains("invalid segment limits"));
}

#[test]
fn rejects_negative_price() {
    let error = Settings::from_toml(
        r#"
[pricing]
cost_per_segment = -0.01
"#,
    )
    .unwrap_err();
    assert!(error.to_string().contains("invalid pricing"));
}

#[test]
fn relative_catalog_resolves_against_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("sms-notify.toml");
    fs::write(&config, "[catalog]\npath = \"tags.csv\"\n").unwrap();
    fs::write(
        dir.path().join("tags.csv"),
        "Tag,Replacement,Label\n[first_name],Alexandra,First name\n",
    )
    .unwrap();

    let settings = Settings::load(Some(&config)).unwrap();
    assert_eq!(settings.catalog.path, Some(dir.path().join("tags.csv")));

    let catalog = settings.catalog().unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.get("[first_name]").map(|tag| tag.replacement.as_str()),
        Some("Alexandra")
    );
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = Settings::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(format!("{error:#}").contains("read config"));
}

#[test]
fn default_settings_use_builtin_catalog() {
    let catalog = Settings::default().catalog().unwrap();
    assert!(catalog.contains("[first_name]"));
    assert!(catalog.contains("[unsubscribe]"));
}

#[test]
fn shipped_sample_config_loads() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let settings = Settings::load_from(&root.join("sms-notify.toml")).unwrap();
    assert_eq!(settings.segments, SegmentPolicy::default());
    let catalog = settings.catalog().unwrap();
    assert_eq!(catalog.len(), 9);
    assert!(catalog.contains("[tracking_number]"));
}
