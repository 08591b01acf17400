use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TestStructId {
    #[serde(
        default,
        deserialize_with = "recognize_client::presentation::serialization::string_or_number_opt::deserialize"
    )]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TestStructStatus {
    #[serde(
        deserialize_with = "recognize_client::presentation::serialization::number_as_i64::deserialize"
    )]
    value: i64,
}

#[test]
fn test_string_or_number_opt_string() {
    let result: TestStructId = serde_json::from_str(r#"{"value": "abc"}"#).unwrap();
    assert_eq!(result.value.as_deref(), Some("abc"));
}

#[test]
fn test_string_or_number_opt_number() {
    let result: TestStructId = serde_json::from_str(r#"{"value": 42}"#).unwrap();
    assert_eq!(result.value.as_deref(), Some("42"));
}

#[test]
fn test_string_or_number_opt_null() {
    let result: TestStructId = serde_json::from_str(r#"{"value": null}"#).unwrap();
    assert_eq!(result.value, None);
}

#[test]
fn test_string_or_number_opt_missing() {
    let result: TestStructId = serde_json::from_str("{}").unwrap();
    assert_eq!(result.value, None);
}

#[test]
fn test_number_as_i64_from_string() {
    let result: TestStructStatus = serde_json::from_str(r#"{"value": " 3 "}"#).unwrap();
    assert_eq!(result.value, 3);
}

#[test]
fn test_number_as_i64_from_number() {
    let result: TestStructStatus = serde_json::from_str(r#"{"value": 0}"#).unwrap();
    assert_eq!(result.value, 0);
}

#[test]
fn test_number_as_i64_rejects_text() {
    assert!(serde_json::from_str::<TestStructStatus>(r#"{"value": "ok"}"#).is_err());
}
