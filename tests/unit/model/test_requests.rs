use gads_client::error::AppError;
use gads_client::model::requests::{
    BiddingStrategy, CampaignStatus, MutateRequest, SearchRequest, UpdateOperation,
};
use serde_json::json;

#[test]
fn test_search_request_serialization() {
    let first = SearchRequest::new("SELECT campaign.id FROM campaign");
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        json!({"query": "SELECT campaign.id FROM campaign"})
    );

    let next = first.with_page_token("abc");
    assert_eq!(
        serde_json::to_value(&next).unwrap(),
        json!({"query": "SELECT campaign.id FROM campaign", "pageToken": "abc"})
    );
}

#[test]
fn test_budget_mutation_body() {
    let request = MutateRequest::single(UpdateOperation::budget_amount(
        "customers/1/campaignBudgets/2",
        12_340_000,
    ));
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "operations": [{
                "updateMask": "amountMicros",
                "update": {
                    "resourceName": "customers/1/campaignBudgets/2",
                    "amountMicros": "12340000"
                }
            }]
        })
    );
}

#[test]
fn test_bidding_strategy_payloads() {
    let expected = [
        (BiddingStrategy::MaximizeConversions, json!({"maximizeConversions": {}})),
        (
            BiddingStrategy::MaximizeConversionValue,
            json!({"maximizeConversionValue": {}}),
        ),
        (
            BiddingStrategy::TargetCpa,
            json!({"targetCpa": {"targetCpaMicros": "1000000"}}),
        ),
        (BiddingStrategy::TargetRoas, json!({"targetRoas": {"targetRoas": 1.0}})),
        (
            BiddingStrategy::ManualCpc,
            json!({"manualCpc": {"enhancedCpcEnabled": true}}),
        ),
        (BiddingStrategy::TargetSpend, json!({"targetSpend": {}})),
    ];
    for (strategy, payload) in expected {
        assert_eq!(strategy.payload(), payload, "{strategy}");
        assert_eq!(strategy.as_str().parse::<BiddingStrategy>().unwrap(), strategy);
    }
}

#[test]
fn test_bidding_strategy_operation_uses_mask() {
    let op = UpdateOperation::bidding_strategy("customers/1/campaigns/2", BiddingStrategy::TargetSpend);
    assert_eq!(
        serde_json::to_value(&op).unwrap(),
        json!({
            "updateMask": "biddingStrategy",
            "update": {
                "resourceName": "customers/1/campaigns/2",
                "biddingStrategy": {"targetSpend": {}}
            }
        })
    );
}

#[test]
fn test_bidding_strategy_parse_is_exact() {
    assert!("maximize_conversions".parse::<BiddingStrategy>().is_err());
    match "INVALID".parse::<BiddingStrategy>() {
        Err(AppError::Validation(msg)) => {
            for strategy in BiddingStrategy::ALL {
                assert!(msg.contains(strategy.as_str()));
            }
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_campaign_status_parse() {
    assert_eq!("paused".parse::<CampaignStatus>().unwrap(), CampaignStatus::Paused);
    assert_eq!(CampaignStatus::Enabled.to_string(), "ENABLED");
    assert!(matches!(
        "ARCHIVED".parse::<CampaignStatus>(),
        Err(AppError::Validation(_))
    ));
}
