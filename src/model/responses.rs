/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::utils::{f64_from_any, i64_from_any, string_from_any};
use serde::Deserialize;

/// Response of a `googleAds:search` call
///
/// The API omits `results` entirely when nothing matches.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<R> {
    /// One row per matching resource
    #[serde(default = "Vec::new")]
    pub results: Vec<R>,
    /// Present when more pages are available
    #[serde(default)]
    pub next_page_token: Option<String>,
    /// Fields populated in the rows
    #[serde(default)]
    pub field_mask: Option<String>,
}

impl<R> SearchResponse<R> {
    /// Token of the next page, ignoring empty tokens
    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Response of a `<service>:mutate` call
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutateResponse {
    /// One result per operation
    #[serde(default)]
    pub results: Vec<MutateResult>,
}

/// Result of a single mutate operation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutateResult {
    /// Resource name of the mutated resource
    #[serde(default)]
    pub resource_name: String,
}

/// Response of `customers:listAccessibleCustomers`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAccessibleCustomersResponse {
    /// `customers/{id}` resource names
    #[serde(default)]
    pub resource_names: Vec<String>,
}

/// Row of a `customer_client` query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerClientRow {
    /// The selected customer client
    #[serde(default)]
    pub customer_client: CustomerClient,
}

/// A client account linked under the manager account
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerClient {
    /// `customers/{id}` of the client
    #[serde(default)]
    pub client_customer: String,
    /// Distance from the manager in the account hierarchy
    #[serde(default, deserialize_with = "i64_from_any")]
    pub level: i64,
    /// Account currency, ISO 4217
    #[serde(default)]
    pub currency_code: String,
    /// Account name
    #[serde(default)]
    pub descriptive_name: String,
    /// Account status, e.g. `ENABLED`
    #[serde(default)]
    pub status: String,
    /// Whether the client is itself a manager
    #[serde(default)]
    pub manager: bool,
}

/// Row of a `campaign` query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRow {
    /// Campaign attributes
    #[serde(default)]
    pub campaign: CampaignResource,
    /// Attributes of the linked budget, when selected
    #[serde(default)]
    pub campaign_budget: CampaignBudgetResource,
    /// Metrics, when selected
    #[serde(default)]
    pub metrics: Metrics,
}

/// Campaign attributes returned by search
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResource {
    /// `customers/{id}/campaigns/{id}`
    #[serde(default)]
    pub resource_name: String,
    /// Numeric campaign id
    #[serde(default, deserialize_with = "string_from_any")]
    pub id: String,
    /// Campaign name
    #[serde(default)]
    pub name: String,
    /// Serving status
    #[serde(default)]
    pub status: String,
    /// Channel type, e.g. `SEARCH`
    #[serde(default)]
    pub advertising_channel_type: String,
    /// Bidding strategy type, e.g. `MANUAL_CPC`
    #[serde(default)]
    pub bidding_strategy_type: String,
    /// `customers/{id}/campaignBudgets/{id}`
    #[serde(default)]
    pub campaign_budget: String,
}

/// Campaign budget attributes returned by search
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignBudgetResource {
    /// `customers/{id}/campaignBudgets/{id}`
    #[serde(default)]
    pub resource_name: String,
    /// Daily amount in micros
    #[serde(default, deserialize_with = "i64_from_any")]
    pub amount_micros: i64,
}

/// Performance metrics returned by search
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Number of impressions
    #[serde(default, deserialize_with = "i64_from_any")]
    pub impressions: i64,
    /// Number of clicks
    #[serde(default, deserialize_with = "i64_from_any")]
    pub clicks: i64,
    /// Total cost in micros
    #[serde(default, deserialize_with = "i64_from_any")]
    pub cost_micros: i64,
    /// Number of conversions (fractional with data-driven attribution)
    #[serde(default, deserialize_with = "f64_from_any")]
    pub conversions: f64,
    /// Average cost per click in micros
    #[serde(default, deserialize_with = "f64_from_any")]
    pub average_cpc: f64,
}
