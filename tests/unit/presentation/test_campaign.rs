use gads_client::model::responses::{CampaignRow, CampaignResource, Metrics};
use gads_client::presentation::campaign::{Campaign, CampaignInfo, CampaignPerformance};

fn row() -> CampaignRow {
    serde_json::from_value(serde_json::json!({
        "campaign": {
            "id": 7,
            "name": "Generic",
            "status": "ENABLED",
            "advertisingChannelType": "DISPLAY",
            "biddingStrategyType": "TARGET_SPEND",
            "campaignBudget": "customers/1/campaignBudgets/9"
        },
        "campaignBudget": {"amountMicros": 5000000},
        "metrics": {"impressions": "10", "clicks": "1", "costMicros": "250000", "averageCpc": 250000}
    }))
    .unwrap()
}

#[test]
fn test_campaign_from_row() {
    let campaign = Campaign::from(row());
    assert_eq!(campaign.campaign_id, "7");
    assert_eq!(campaign.channel_type, "DISPLAY");
    assert_eq!(campaign.bidding_strategy, "TARGET_SPEND");
    assert_eq!(campaign.budget, 5.0);
}

#[test]
fn test_campaign_info_from_resource() {
    let info = CampaignInfo::from(CampaignResource {
        id: "7".to_string(),
        name: "Generic".to_string(),
        campaign_budget: "customers/1/campaignBudgets/9".to_string(),
        ..CampaignResource::default()
    });
    assert_eq!(info.id, "7");
    assert_eq!(info.campaign_budget, "customers/1/campaignBudgets/9");
    assert!(info.bidding_strategy_type.is_empty());
}

#[test]
fn test_performance_from_row() {
    let perf = CampaignPerformance::from(row());
    assert_eq!(perf.impressions, 10);
    assert_eq!(perf.cost, 0.25);
    assert_eq!(perf.average_cpc, 0.25);
    assert_eq!(perf.conversions, 0.0);
}

#[test]
fn test_performance_defaults_when_metrics_missing() {
    let perf = CampaignPerformance::from(CampaignRow {
        metrics: Metrics::default(),
        ..CampaignRow::default()
    });
    assert_eq!(perf.cost, 0.0);
    assert_eq!(perf.average_cpc, 0.0);
}
