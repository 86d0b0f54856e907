/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::campaign::CampaignService;
use crate::application::interfaces::mutation::CampaignMutationService;
use crate::error::AppError;
use crate::model::gaql::{DateRange, QueryBuilder, normalize_customer_id, validate_id};
use crate::model::http::HttpClient;
use crate::model::requests::{
    BiddingStrategy, CampaignStatus, MutateRequest, SearchRequest, UpdateOperation,
};
use crate::model::responses::{
    CampaignRow, CustomerClientRow, ListAccessibleCustomersResponse, MutateResponse,
    SearchResponse,
};
use crate::model::utils::resource_id;
use crate::presentation::account::ClientAccount;
use crate::presentation::campaign::{Campaign, CampaignInfo, CampaignPerformance};
use crate::presentation::update::{
    FieldUpdate, UpdateKind, UpdateOutcome, UpdateResult, UpdateValue,
};
use crate::utils::finance::to_micros;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const CUSTOMER_CLIENT_FIELDS: &[&str] = &[
    "customer_client.client_customer",
    "customer_client.level",
    "customer_client.currency_code",
    "customer_client.descriptive_name",
    "customer_client.status",
];

const CAMPAIGN_LIST_FIELDS: &[&str] = &[
    "campaign.id",
    "campaign.name",
    "campaign.status",
    "campaign.advertising_channel_type",
    "campaign.bidding_strategy_type",
    "campaign_budget.amount_micros",
    "campaign.campaign_budget",
];

const CAMPAIGN_INFO_FIELDS: &[&str] = &[
    "campaign.id",
    "campaign.name",
    "campaign.status",
    "campaign.bidding_strategy_type",
    "campaign.campaign_budget",
];

const CAMPAIGN_PERFORMANCE_FIELDS: &[&str] = &[
    "campaign.id",
    "campaign.name",
    "campaign.status",
    "metrics.impressions",
    "metrics.clicks",
    "metrics.cost_micros",
    "metrics.conversions",
    "metrics.average_cpc",
];

const PREVIOUS_VALUE_UNKNOWN: &str = "Unknown";

/// Google Ads client implementing the account, campaign and mutation services
///
/// Cloning is cheap: clones share the HTTP connection pool and the cached
/// access token.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from an explicit configuration
    ///
    /// No request is made; the first call authenticates.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client from environment variables (and `.env`)
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new()?)
    }

    /// Wraps an existing HTTP client
    pub fn with_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets the underlying HTTP client
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Runs a search query and follows `nextPageToken` until every row is read
    ///
    /// Stops early if the API hands back the token it was just given.
    async fn search_all<R: DeserializeOwned>(
        &self,
        customer_id: &str,
        query: String,
    ) -> Result<Vec<R>, AppError> {
        let endpoint = format!("customers/{customer_id}/googleAds:search");
        debug!("GAQL: {}", query);

        let mut request = SearchRequest::new(query);
        let mut rows = Vec::new();
        let mut current_token: Option<String> = None;
        loop {
            let page: SearchResponse<R> = self.http_client.post(&endpoint, &request).await?;
            let next = page.next_page().map(str::to_string);
            rows.extend(page.results);

            match next {
                Some(token) if current_token.as_deref() == Some(token.as_str()) => {
                    warn!("nextPageToken {} repeated, stopping pagination", token);
                    break;
                }
                Some(token) => {
                    debug!("Fetching next page ({} rows so far)", rows.len());
                    request = request.with_page_token(token.clone());
                    current_token = Some(token);
                }
                None => break,
            }
        }
        Ok(rows)
    }

    /// Sends a single-operation mutate call to `customers/{id}/{service}:mutate`
    async fn mutate<O: Serialize + Send + Sync>(
        &self,
        customer_id: &str,
        service: &str,
        operation: O,
    ) -> Result<MutateResponse, AppError> {
        let endpoint = format!("customers/{customer_id}/{service}:mutate");
        let request = MutateRequest::single(operation);
        self.http_client.post(&endpoint, &request).await
    }

    async fn fetch_campaign_info(
        &self,
        customer_id: &str,
        campaign_id: &str,
    ) -> Result<CampaignInfo, AppError> {
        let query = QueryBuilder::select(CAMPAIGN_INFO_FIELDS)
            .from("campaign")
            .where_id("campaign.id", campaign_id)?
            .build()?;

        let rows: Vec<CampaignRow> = self.search_all(customer_id, query).await?;
        rows.into_iter()
            .next()
            .map(|row| CampaignInfo::from(row.campaign))
            .ok_or_else(|| AppError::NotFound(format!("campaign {campaign_id} not found")))
    }
}

/// Rejects missing, zero, negative and non-finite amounts
fn validate_amount(name: &str, value: Option<f64>) -> Result<(), AppError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(AppError::Validation(format!(
            "{name} must be a positive number, got {v}"
        ))),
        _ => Ok(()),
    }
}

#[async_trait]
impl AccountService for Client {
    async fn list_client_accounts(&self) -> Result<Vec<ClientAccount>, AppError> {
        let login_customer_id = self.http_client.config().credentials.login_customer_id();
        info!("Listing client accounts of {}", login_customer_id);

        let query = QueryBuilder::select(CUSTOMER_CLIENT_FIELDS)
            .from("customer_client")
            .where_bool("customer_client.manager", false)?
            .build()?;

        let rows: Vec<CustomerClientRow> = self.search_all(&login_customer_id, query).await?;
        let accounts: Vec<ClientAccount> = rows
            .into_iter()
            .map(|row| ClientAccount::from(row.customer_client))
            .collect();

        info!("Successfully listed {} client accounts", accounts.len());
        Ok(accounts)
    }

    async fn list_accessible_customers(&self) -> Result<Vec<String>, AppError> {
        info!("Listing accessible customers");
        let response: ListAccessibleCustomersResponse = self
            .http_client
            .get("customers:listAccessibleCustomers")
            .await?;

        Ok(response
            .resource_names
            .iter()
            .map(|name| resource_id(name).to_string())
            .collect())
    }
}

#[async_trait]
impl CampaignService for Client {
    async fn list_campaigns(
        &self,
        customer_id: &str,
        status: Option<CampaignStatus>,
    ) -> Result<Vec<Campaign>, AppError> {
        let customer_id = normalize_customer_id(customer_id)?;
        info!("Listing campaigns for customer ID: {}", customer_id);

        let mut builder = QueryBuilder::select(CAMPAIGN_LIST_FIELDS).from("campaign");
        if let Some(status) = status {
            builder = builder.where_enum("campaign.status", status.as_str())?;
        }
        let query = builder.build()?;

        let rows: Vec<CampaignRow> = self.search_all(&customer_id, query).await?;
        let campaigns: Vec<Campaign> = rows.into_iter().map(Campaign::from).collect();

        info!(
            "Successfully listed {} campaigns for customer ID: {}",
            campaigns.len(),
            customer_id
        );
        Ok(campaigns)
    }

    async fn get_campaign_info(
        &self,
        customer_id: &str,
        campaign_id: &str,
    ) -> Result<CampaignInfo, AppError> {
        let customer_id = normalize_customer_id(customer_id)?;
        self.fetch_campaign_info(&customer_id, campaign_id).await
    }

    async fn get_campaign_performance(
        &self,
        customer_id: &str,
        campaign_ids: Option<&[String]>,
        date_range: DateRange,
    ) -> Result<Vec<CampaignPerformance>, AppError> {
        let customer_id = normalize_customer_id(customer_id)?;
        info!(
            "Getting campaign performance for customer ID: {} ({})",
            customer_id, date_range
        );

        let mut builder = QueryBuilder::select(CAMPAIGN_PERFORMANCE_FIELDS)
            .from("campaign")
            .where_date_range("segments.date", &date_range)?;
        if let Some(ids) = campaign_ids.filter(|ids| !ids.is_empty()) {
            builder = builder.where_ids_in("campaign.id", ids)?;
        }
        let query = builder.build()?;

        let rows: Vec<CampaignRow> = self.search_all(&customer_id, query).await?;
        let performance: Vec<CampaignPerformance> =
            rows.into_iter().map(CampaignPerformance::from).collect();

        info!(
            "Successfully retrieved performance data for {} campaigns",
            performance.len()
        );
        Ok(performance)
    }
}

#[async_trait]
impl CampaignMutationService for Client {
    async fn update_budget_and_bid(
        &self,
        customer_id: &str,
        campaign_id: &str,
        new_budget: Option<f64>,
        new_bid: Option<f64>,
    ) -> Result<UpdateResult, AppError> {
        if new_budget.is_none() && new_bid.is_none() {
            return Err(AppError::Validation(
                "either new budget or new bid must be provided".to_string(),
            ));
        }
        validate_amount("budget", new_budget)?;
        validate_amount("bid", new_bid)?;
        let budget_micros = new_budget.map(to_micros).transpose()?;
        let customer_id = normalize_customer_id(customer_id)?;
        validate_id(campaign_id)?;

        info!(
            "Updating bid/budget for campaign {} in account {}",
            campaign_id, customer_id
        );

        let campaign = self.fetch_campaign_info(&customer_id, campaign_id).await?;
        debug!("Campaign info: {:?}", campaign);

        let mut result = UpdateResult::initiated(
            "Budget update initiated",
            &customer_id,
            campaign_id,
            &campaign.name,
        );

        if let (Some(budget), Some(budget_micros)) = (new_budget, budget_micros) {
            if campaign.campaign_budget.is_empty() {
                return Err(AppError::NotFound(format!(
                    "campaign budget resource not found for campaign {campaign_id}"
                )));
            }
            let operation = UpdateOperation::budget_amount(&campaign.campaign_budget, budget_micros);

            let outcome = match self
                .mutate(&customer_id, "campaignBudgets", operation)
                .await
            {
                Ok(response) => {
                    info!("Budget update result: {:?}", response.results);
                    UpdateOutcome::Success
                }
                Err(e) => {
                    error!("Error updating budget: {}", e);
                    UpdateOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            let previous_value = match outcome {
                UpdateOutcome::Success => Some(PREVIOUS_VALUE_UNKNOWN.to_string()),
                _ => None,
            };
            result.record(
                FieldUpdate {
                    kind: UpdateKind::Budget,
                    previous_value,
                    new_value: UpdateValue::Amount(budget),
                    new_value_micros: Some(budget_micros),
                    outcome,
                },
                |e| format!("Error updating budget: {e}"),
            );
        }

        if let Some(bid) = new_bid {
            result.record(
                FieldUpdate {
                    kind: UpdateKind::Bid,
                    previous_value: Some(PREVIOUS_VALUE_UNKNOWN.to_string()),
                    new_value: UpdateValue::Amount(bid),
                    new_value_micros: None,
                    outcome: UpdateOutcome::NotImplemented,
                },
                str::to_string,
            );
            result.message.push_str(", bid update not implemented yet");
        }

        Ok(result)
    }

    async fn update_bidding_strategy(
        &self,
        customer_id: &str,
        campaign_id: &str,
        strategy: &str,
    ) -> Result<UpdateResult, AppError> {
        let strategy: BiddingStrategy = strategy.parse()?;
        let customer_id = normalize_customer_id(customer_id)?;
        validate_id(campaign_id)?;

        info!(
            "Updating bidding strategy for campaign {} in account {} to {}",
            campaign_id, customer_id, strategy
        );

        let campaign = self.fetch_campaign_info(&customer_id, campaign_id).await?;
        debug!("Campaign info: {:?}", campaign);

        let previous_value = if campaign.bidding_strategy_type.is_empty() {
            PREVIOUS_VALUE_UNKNOWN.to_string()
        } else {
            campaign.bidding_strategy_type.clone()
        };

        let mut result = UpdateResult::initiated(
            "Bidding strategy update initiated",
            &customer_id,
            campaign_id,
            &campaign.name,
        );

        let resource_name = format!("customers/{customer_id}/campaigns/{campaign_id}");
        let operation = UpdateOperation::bidding_strategy(resource_name, strategy);

        let outcome = match self.mutate(&customer_id, "campaigns", operation).await {
            Ok(response) => {
                info!("Bidding strategy update result: {:?}", response.results);
                UpdateOutcome::Success
            }
            Err(e) => {
                error!("Error updating bidding strategy: {}", e);
                UpdateOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };
        result.record(
            FieldUpdate {
                kind: UpdateKind::BiddingStrategy,
                previous_value: Some(previous_value),
                new_value: UpdateValue::Name(strategy.as_str().to_string()),
                new_value_micros: None,
                outcome,
            },
            |e| format!("Error updating bidding strategy: {e}"),
        );

        Ok(result)
    }
}
