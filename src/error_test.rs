use super::*;

#[test]
fn missing_element_is_classified() {
    let err = PageError::MissingElement("theme-icon".to_owned());
    assert!(err.is_missing_element());
    assert_eq!(err.to_string(), "element not found: theme-icon");
}

#[test]
fn other_errors_are_not_missing_element() {
    assert!(!PageError::StorageUnavailable.is_missing_element());
    assert!(!PageError::Js("boom".to_owned()).is_missing_element());
}

#[test]
fn config_error_wraps_serde_json() {
    let err = serde_json::from_str::<serde_json::Value>("{").map_err(PageError::from);
    assert!(matches!(err, Err(PageError::Config(_))));
}
