use gads_client::presentation::update::{
    FieldUpdate, UpdateKind, UpdateOutcome, UpdateResult, UpdateValue,
};
use serde_json::json;

#[test]
fn test_update_result_round_trips_through_json() {
    let json = json!({
        "success": false,
        "message": "Error updating bidding strategy: boom",
        "update_details": {
            "customer_id": "1",
            "campaign_id": "2",
            "campaign_name": "Brand",
            "updates": [{
                "type": "bidding_strategy",
                "previous_value": "MANUAL_CPC",
                "new_value": "TARGET_ROAS",
                "status": "failed",
                "error": "boom"
            }]
        }
    });

    let result: UpdateResult = serde_json::from_value(json.clone()).unwrap();
    let update = &result.update_details.updates[0];
    assert_eq!(update.kind, UpdateKind::BiddingStrategy);
    assert_eq!(update.new_value, UpdateValue::Name("TARGET_ROAS".to_string()));
    assert!(!update.is_ok());
    assert_eq!(serde_json::to_value(&result).unwrap(), json);
}

#[test]
fn test_success_record_keeps_message() {
    let mut result = UpdateResult::initiated("Budget update initiated", "1", "2", "Brand");
    result.record(
        FieldUpdate {
            kind: UpdateKind::Budget,
            previous_value: Some("Unknown".to_string()),
            new_value: UpdateValue::Amount(5.0),
            new_value_micros: Some(5_000_000),
            outcome: UpdateOutcome::Success,
        },
        |e| format!("Error updating budget: {e}"),
    );

    assert!(result.success);
    assert_eq!(result.message, "Budget update initiated");
    assert_eq!(result.failed_updates().count(), 0);
}

#[test]
fn test_display_is_json() {
    let result = UpdateResult::initiated("Bidding strategy update initiated", "1", "2", "Brand");
    let printed = result.to_string();
    let value: serde_json::Value = serde_json::from_str(&printed).unwrap();
    assert_eq!(value["update_details"]["campaign_name"], "Brand");
}
