#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_markup() {
    let config = PageConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.default_theme, Theme::Dark);
    assert_eq!(config.theme_toggle_id, "theme-toggle");
    assert_eq!(config.modal_id, "sample-code-modal");
    assert_eq!(config.reveal_threshold, 0.1);
    assert_eq!(config.progress_delay_ms, 200);
    assert_eq!(config.scrollbar_delay_ms, 200);
    assert_eq!(config.scrollbar_settle_ms, 100);
}

#[test]
fn from_json_keeps_defaults_for_missing_fields() {
    let config = PageConfig::from_json(r#"{ "progress_delay_ms": 50, "default_theme": "light" }"#)
        .expect("config should parse");
    assert_eq!(config.progress_delay_ms, 50);
    assert_eq!(config.default_theme, Theme::Light);
    assert_eq!(config.modal_id, "sample-code-modal");
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(PageConfig::from_json("{ not json").is_err());
}

#[test]
fn load_or_default_falls_back_on_bad_input() {
    assert_eq!(PageConfig::load_or_default(Some("[1, 2")), PageConfig::default());
    assert_eq!(PageConfig::load_or_default(Some("   ")), PageConfig::default());
    assert_eq!(PageConfig::load_or_default(None), PageConfig::default());
}

#[test]
fn modal_code_selector_targets_modal_pre_blocks() {
    assert_eq!(PageConfig::default().modal_code_selector(), "#sample-code-modal pre");
}
