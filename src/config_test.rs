use super::*;

#[test]
fn default_config_matches_page_contract() {
    let config = PageConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.toggle_id, "theme-toggle");
    assert_eq!(config.text_input_selector, "textarea");
    assert_eq!(config.default_theme, Theme::Dark);
}

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}").unwrap();
    assert_eq!(config, PageConfig::default());
}

#[test]
fn partial_object_overrides_named_fields() {
    let config = PageConfig::from_json(r#"{"toggle_id":"mode-switch","default_theme":"light-mode"}"#).unwrap();
    assert_eq!(config.toggle_id, "mode-switch");
    assert_eq!(config.default_theme, Theme::Light);
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn unknown_field_is_rejected() {
    let err = PageConfig::from_json(r#"{"toggle":"x"}"#).unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG");
}

#[test]
fn unknown_theme_is_rejected() {
    let err = PageConfig::from_json(r#"{"default_theme":"sepia"}"#).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}
