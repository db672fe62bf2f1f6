// Bulk analysis: per-target failure isolation.

#[path = "helpers.rs"]
mod helpers;

use helpers::{analyzer_with, FakeGeo, FakeResolver};
use netintel::providers::SourceId;

#[tokio::test]
async fn test_bulk_isolates_invalid_targets() {
    let geo = FakeGeo::answering(SourceId::IpApiCom, |r| {
        r.country_code = Some("US".to_string());
    });
    let analyzer = analyzer_with(vec![geo], None, FakeResolver::empty());

    let targets = vec![
        "8.8.8.8".to_string(),
        "not-an-ip!!".to_string(),
        "1.1.1.1".to_string(),
    ];
    let entries = analyzer.analyze_bulk(&targets).await;

    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].target, "8.8.8.8");
    assert!(entries[0].report.is_some());
    assert!(entries[0].error.is_none());

    assert!(entries[1].report.is_none());
    let message = entries[1].error.as_deref().expect("error entry");
    assert!(message.contains("invalid target"), "got: {message}");

    // The batch continues past the failure
    assert!(entries[2].report.is_some());
    assert_eq!(
        entries[2]
            .report
            .as_ref()
            .unwrap()
            .geographic
            .country_code
            .as_deref(),
        Some("US")
    );
}

#[tokio::test]
async fn test_bulk_trims_whitespace_per_target() {
    let analyzer = analyzer_with(vec![], None, FakeResolver::empty());
    let entries = analyzer
        .analyze_bulk(&["  8.8.8.8  ".to_string()])
        .await;
    assert_eq!(entries[0].target, "8.8.8.8");
    assert!(entries[0].report.is_some());
}

#[tokio::test]
async fn test_bulk_empty_list() {
    let analyzer = analyzer_with(vec![], None, FakeResolver::empty());
    let entries = analyzer.analyze_bulk(&[]).await;
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_bulk_entries_serialize() {
    let analyzer = analyzer_with(vec![], None, FakeResolver::empty());
    let entries = analyzer
        .analyze_bulk(&["8.8.8.8".to_string(), ";".to_string()])
        .await;
    let json = serde_json::to_value(&entries).expect("entries serialize");
    assert!(json[0]["report"].is_object());
    assert!(json[0]["error"].is_null());
    assert!(json[1]["report"].is_null());
    assert!(json[1]["error"].is_string());
}
