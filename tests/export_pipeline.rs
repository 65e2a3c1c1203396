//! End-to-end pipeline: generate, filter, export, read back.

use metrics_core::{SearchCriteria, StoreMetricsRecord};
use mockdata_generator::MockDataGenerator;
use storedash_mock::export::{csv::export_csv, jsonl::export_jsonl};
use tempfile::TempDir;

#[test]
fn jsonl_export_preserves_the_frontend_contract() {
    let mut generator = MockDataGenerator::seeded(42);
    let records = generator.generate_batch(126).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("batch.jsonl");
    let metrics = export_jsonl(&records, &path).unwrap();

    assert_eq!(metrics.rows_written, 126);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 126);

    for line in content.lines() {
        let json: serde_json::Value = serde_json::from_str(line).unwrap();
        let obj = json.as_object().unwrap();

        // String-vs-number representation must survive the trip
        assert!(obj["id"].is_string());
        assert!(obj["totalScore"].is_i64());
        assert!(obj["monthlyTotalLoss"].is_number());
        assert!(obj["monthlyCanceledRate"].as_str().unwrap().ends_with('%'));
        assert!(!obj.contains_key("store_name"), "no snake_case leaks");
    }
}

#[test]
fn csv_export_reads_back_identically() {
    let mut generator = MockDataGenerator::seeded(7);
    let records = generator.generate_batch(30).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("batch.csv");
    export_csv(&records, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().next(), Some("id"));
    assert!(headers.iter().any(|h| h == "totalScoreWithoutWeightingPenalty"));

    let parsed: Vec<StoreMetricsRecord> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(parsed, records);
}

#[test]
fn filtered_export_only_contains_matching_records() {
    let mut generator = MockDataGenerator::seeded(42);
    let records = generator.generate_batch(500).unwrap();

    let criteria = SearchCriteria {
        area: Some("1区".to_string()),
        date_from: Some("2025-01-01".to_string()),
        date_to: Some("2025-06-30".to_string()),
        ..Default::default()
    };

    let filtered: Vec<StoreMetricsRecord> = records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();
    // A uniform draw over 5 zones and 12 months leaves plenty of matches
    assert!(!filtered.is_empty());
    assert!(filtered.len() < records.len());

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("filtered.jsonl");
    export_jsonl(&filtered, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    for line in content.lines() {
        let record: StoreMetricsRecord = serde_json::from_str(line).unwrap();
        assert_eq!(record.area, "1区");
        assert!(record.report_date.as_str() <= "2025-06-30");
    }
}

#[test]
fn resumed_batches_continue_the_sequence() {
    let mut first = MockDataGenerator::seeded(1);
    let head = first.generate_batch(100).unwrap();

    let mut second = MockDataGenerator::seeded(2).with_start_sequence(101).unwrap();
    let tail = second.generate_batch(26).unwrap();

    let last_head_id: u64 = head.last().unwrap().id.parse().unwrap();
    let first_tail_id: u64 = tail.first().unwrap().id.parse().unwrap();
    assert_eq!(first_tail_id, last_head_id + 1);
    assert_eq!(tail.first().unwrap().store_code, "S101");
}
