use dnsview_application::ports::RecordsRepository;
use dnsview_domain::DomainError;
use dnsview_infrastructure::repositories::JsonFileRecordsRepository;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[tokio::test]
async fn test_load_valid_records_file() {
    let document = json!({
        "a.iana-servers.net": {
            "199.43.135.53": {
                "A": ["93.184.216.34"],
                "MX": ["0 ."],
                "TXT": ["v=spf1 -all"]
            }
        }
    });
    let temp_file = write_temp(&serde_json::to_string_pretty(&document).unwrap());

    let repository = JsonFileRecordsRepository::new(temp_file.path());
    let table = repository.load().await.unwrap();

    assert_eq!(table.entry_count(), 1);
    assert_eq!(table.record_count(), 3);
    assert_eq!(serde_json::to_value(&table).unwrap(), document);
}

#[tokio::test]
async fn test_round_trip_drops_empty_and_null_types() {
    let temp_file = write_temp(
        r#"{"ns1.example": {"192.0.2.53": {"A": ["192.0.2.1"], "AAAA": [], "CAA": null}}}"#,
    );

    let repository = JsonFileRecordsRepository::new(temp_file.path());
    let table = repository.load().await.unwrap();

    let value: Value = serde_json::to_value(&table).unwrap();
    assert_eq!(
        value,
        json!({ "ns1.example": { "192.0.2.53": { "A": ["192.0.2.1"] } } })
    );
}

#[tokio::test]
async fn test_missing_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let repository = JsonFileRecordsRepository::new(dir.path().join("dns_output.json"));

    let result = repository.load().await;

    match result {
        Err(DomainError::RecordsUnavailable { file, .. }) => assert_eq!(file, "dns_output.json"),
        other => panic!("expected RecordsUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_directory_path_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let repository = JsonFileRecordsRepository::new(dir.path());

    let result = repository.load().await;

    assert!(matches!(result, Err(DomainError::RecordsUnavailable { .. })));
}

#[tokio::test]
async fn test_malformed_json_is_invalid_format() {
    let temp_file = write_temp("{\"ns1.example\": {");

    let repository = JsonFileRecordsRepository::new(temp_file.path());
    let result = repository.load().await;

    assert!(matches!(result, Err(DomainError::InvalidRecordsFormat(_))));
}

#[tokio::test]
async fn test_wrong_shape_is_invalid_format() {
    let temp_file = write_temp(r#"{"ns1.example": ["192.0.2.53"]}"#);

    let repository = JsonFileRecordsRepository::new(temp_file.path());
    let result = repository.load().await;

    assert!(matches!(result, Err(DomainError::InvalidRecordsFormat(_))));
}

#[tokio::test]
async fn test_empty_file_is_invalid_format() {
    let temp_file = write_temp("");

    let repository = JsonFileRecordsRepository::new(temp_file.path());
    let result = repository.load().await;

    assert!(matches!(result, Err(DomainError::InvalidRecordsFormat(_))));
}

#[tokio::test]
async fn test_null_record_set_is_accepted() {
    let temp_file = write_temp(r#"{"ns1.example": {"192.0.2.53": null}, "ns2.example": null}"#);

    let repository = JsonFileRecordsRepository::new(temp_file.path());
    let table = repository.load().await.unwrap();

    assert_eq!(
        serde_json::to_value(&table).unwrap(),
        json!({ "ns1.example": { "192.0.2.53": {} }, "ns2.example": {} })
    );
}
