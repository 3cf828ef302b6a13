use serde_json::json;
use trial_scout::registry::summary::project;

#[test]
fn full_record_populates_every_field() {
    let record = json!({
        "protocolSection": {
            "identificationModule": {
                "nctId": "NCT01234567",
                "officialTitle": "A Phase 3 Study of Drug X in Type 2 Diabetes"
            },
            "statusModule": { "overallStatus": "COMPLETED" },
            "designModule": { "phaseList": { "phases": ["PHASE3"] } }
        }
    });

    let summary = project(&record);
    assert_eq!(summary.nct_id.as_deref(), Some("NCT01234567"));
    assert_eq!(
        summary.title.as_deref(),
        Some("A Phase 3 Study of Drug X in Type 2 Diabetes")
    );
    assert_eq!(summary.status.as_deref(), Some("COMPLETED"));
    assert_eq!(summary.phase, Some(vec!["PHASE3".to_string()]));
}

#[test]
fn record_missing_every_field_yields_all_nulls() {
    let summary = project(&json!({}));
    assert!(summary.nct_id.is_none());
    assert!(summary.title.is_none());
    assert!(summary.status.is_none());
    assert!(summary.phase.is_none());

    // All four keys serialize, as nulls.
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        value,
        json!({ "nctId": null, "title": null, "status": null, "phase": null })
    );
}

#[test]
fn null_record_is_tolerated() {
    let summary = project(&json!(null));
    assert!(summary.nct_id.is_none());
    assert!(summary.phase.is_none());
}

#[test]
fn partial_record_keeps_what_it_has() {
    let record = json!({
        "protocolSection": {
            "identificationModule": { "nctId": "NCT76543210" },
            "designModule": {}
        }
    });

    let summary = project(&record);
    assert_eq!(summary.nct_id.as_deref(), Some("NCT76543210"));
    assert!(summary.title.is_none());
    assert!(summary.status.is_none());
    assert!(summary.phase.is_none());
}
