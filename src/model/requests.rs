/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{BIDDING_STRATEGY_UPDATE_MASK, BUDGET_UPDATE_MASK};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;

/// Body of a `googleAds:search` call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// GAQL query
    pub query: String,
    /// Token of the page to fetch, from a previous response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl SearchRequest {
    /// Creates a request for the first page of results
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page_token: None,
        }
    }

    /// Same query, positioned at the given page
    #[must_use]
    pub fn with_page_token(&self, token: impl Into<String>) -> Self {
        Self {
            query: self.query.clone(),
            page_token: Some(token.into()),
        }
    }
}

/// Body of a `<service>:mutate` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutateRequest<O: Serialize> {
    /// Operations applied in order
    pub operations: Vec<O>,
}

impl<O: Serialize> MutateRequest<O> {
    /// Wraps a single operation
    pub fn single(operation: O) -> Self {
        Self {
            operations: vec![operation],
        }
    }
}

/// An `update` operation restricted by an update mask
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOperation<T: Serialize> {
    /// Comma separated list of updated fields
    pub update_mask: String,
    /// The resource with its new values
    pub update: T,
}

/// Campaign budget resource carrying only a new amount
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAmountUpdate {
    /// `customers/{id}/campaignBudgets/{id}`
    pub resource_name: String,
    /// New amount in micros, encoded as a decimal string (int64)
    pub amount_micros: String,
}

impl UpdateOperation<BudgetAmountUpdate> {
    /// Builds the operation that sets a budget amount in micros
    pub fn budget_amount(resource_name: impl Into<String>, amount_micros: i64) -> Self {
        Self {
            update_mask: BUDGET_UPDATE_MASK.to_string(),
            update: BudgetAmountUpdate {
                resource_name: resource_name.into(),
                amount_micros: amount_micros.to_string(),
            },
        }
    }
}

/// Campaign resource carrying only a new bidding strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignBiddingUpdate {
    /// `customers/{id}/campaigns/{id}`
    pub resource_name: String,
    /// Strategy payload, see [`BiddingStrategy::payload`]
    pub bidding_strategy: Value,
}

impl UpdateOperation<CampaignBiddingUpdate> {
    /// Builds the operation that switches a campaign to a bidding strategy
    pub fn bidding_strategy(resource_name: impl Into<String>, strategy: BiddingStrategy) -> Self {
        Self {
            update_mask: BIDDING_STRATEGY_UPDATE_MASK.to_string(),
            update: CampaignBiddingUpdate {
                resource_name: resource_name.into(),
                bidding_strategy: strategy.payload(),
            },
        }
    }
}

/// Campaign serving status usable as a list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    /// Campaign is active
    Enabled,
    /// Campaign is paused by the advertiser
    Paused,
    /// Campaign has been removed
    Removed,
}

impl CampaignStatus {
    /// GAQL enum literal
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Enabled => "ENABLED",
            CampaignStatus::Paused => "PAUSED",
            CampaignStatus::Removed => "REMOVED",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ENABLED" => Ok(CampaignStatus::Enabled),
            "PAUSED" => Ok(CampaignStatus::Paused),
            "REMOVED" => Ok(CampaignStatus::Removed),
            _ => Err(AppError::Validation(format!(
                "invalid campaign status: {s}. Valid statuses are: ENABLED, PAUSED, REMOVED"
            ))),
        }
    }
}

/// Bidding strategies a campaign can be switched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiddingStrategy {
    /// Maximize conversions within the budget
    MaximizeConversions,
    /// Maximize conversion value within the budget
    MaximizeConversionValue,
    /// Target cost per acquisition
    TargetCpa,
    /// Target return on ad spend
    TargetRoas,
    /// Manual cost per click
    ManualCpc,
    /// Maximize clicks within the budget
    TargetSpend,
}

impl BiddingStrategy {
    /// Every supported strategy, in display order
    pub const ALL: [BiddingStrategy; 6] = [
        BiddingStrategy::MaximizeConversions,
        BiddingStrategy::MaximizeConversionValue,
        BiddingStrategy::TargetCpa,
        BiddingStrategy::TargetRoas,
        BiddingStrategy::ManualCpc,
        BiddingStrategy::TargetSpend,
    ];

    /// API enum name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BiddingStrategy::MaximizeConversions => "MAXIMIZE_CONVERSIONS",
            BiddingStrategy::MaximizeConversionValue => "MAXIMIZE_CONVERSION_VALUE",
            BiddingStrategy::TargetCpa => "TARGET_CPA",
            BiddingStrategy::TargetRoas => "TARGET_ROAS",
            BiddingStrategy::ManualCpc => "MANUAL_CPC",
            BiddingStrategy::TargetSpend => "TARGET_SPEND",
        }
    }

    /// Fixed mutate payload for this strategy
    ///
    /// Sub-parameters are not configurable: TARGET_CPA always submits a 1.00
    /// target and TARGET_ROAS a 100% target.
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            BiddingStrategy::MaximizeConversions => json!({ "maximizeConversions": {} }),
            BiddingStrategy::MaximizeConversionValue => json!({ "maximizeConversionValue": {} }),
            BiddingStrategy::TargetCpa => json!({ "targetCpa": { "targetCpaMicros": "1000000" } }),
            BiddingStrategy::TargetRoas => json!({ "targetRoas": { "targetRoas": 1.0 } }),
            BiddingStrategy::ManualCpc => json!({ "manualCpc": { "enhancedCpcEnabled": true } }),
            BiddingStrategy::TargetSpend => json!({ "targetSpend": {} }),
        }
    }
}

impl fmt::Display for BiddingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiddingStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BiddingStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| {
                let valid = BiddingStrategy::ALL
                    .iter()
                    .map(BiddingStrategy::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                AppError::Validation(format!(
                    "invalid bidding strategy: {s}. Valid strategies are: {valid}"
                ))
            })
    }
}
