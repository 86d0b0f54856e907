/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::responses::{CampaignResource, CampaignRow};
use crate::utils::finance::{from_micros, from_micros_f64};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Campaign summary with its daily budget in account currency
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Numeric campaign id
    pub campaign_id: String,
    /// Campaign name
    pub campaign_name: String,
    /// Serving status
    pub status: String,
    /// Advertising channel type, e.g. `SEARCH`
    #[serde(rename = "type")]
    pub channel_type: String,
    /// Bidding strategy type
    pub bidding_strategy: String,
    /// Daily budget in account currency
    pub budget: f64,
}

impl From<CampaignRow> for Campaign {
    fn from(row: CampaignRow) -> Self {
        let budget = from_micros(row.campaign_budget.amount_micros);
        debug!(
            "Campaign ID: {}, Budget Micros: {}, Budget: {}",
            row.campaign.id, row.campaign_budget.amount_micros, budget
        );
        Campaign {
            campaign_id: row.campaign.id,
            campaign_name: row.campaign.name,
            status: row.campaign.status,
            channel_type: row.campaign.advertising_channel_type,
            bidding_strategy: row.campaign.bidding_strategy_type,
            budget,
        }
    }
}

/// Attributes of a single campaign needed to build mutations
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInfo {
    /// Numeric campaign id
    pub id: String,
    /// Campaign name
    pub name: String,
    /// Serving status
    pub status: String,
    /// Current bidding strategy type
    pub bidding_strategy_type: String,
    /// Budget resource name, `customers/{id}/campaignBudgets/{id}`
    pub campaign_budget: String,
}

impl From<CampaignResource> for CampaignInfo {
    fn from(campaign: CampaignResource) -> Self {
        CampaignInfo {
            id: campaign.id,
            name: campaign.name,
            status: campaign.status,
            bidding_strategy_type: campaign.bidding_strategy_type,
            campaign_budget: campaign.campaign_budget,
        }
    }
}

/// Campaign metrics over a date range, costs in account currency
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPerformance {
    /// Numeric campaign id
    pub campaign_id: String,
    /// Campaign name
    pub campaign_name: String,
    /// Serving status
    pub status: String,
    /// Number of impressions
    pub impressions: i64,
    /// Number of clicks
    pub clicks: i64,
    /// Total cost in account currency
    pub cost: f64,
    /// Number of conversions
    pub conversions: f64,
    /// Average cost per click in account currency
    pub average_cpc: f64,
}

impl From<CampaignRow> for CampaignPerformance {
    fn from(row: CampaignRow) -> Self {
        CampaignPerformance {
            campaign_id: row.campaign.id,
            campaign_name: row.campaign.name,
            status: row.campaign.status,
            impressions: row.metrics.impressions,
            clicks: row.metrics.clicks,
            cost: from_micros(row.metrics.cost_micros),
            conversions: row.metrics.conversions,
            average_cpc: from_micros_f64(row.metrics.average_cpc),
        }
    }
}
