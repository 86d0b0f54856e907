/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::update::UpdateResult;
use async_trait::async_trait;

/// Interface for campaign mutations
///
/// Invalid input and lookup failures are returned as errors. A failed mutate
/// call is not: it is recorded in the returned [`UpdateResult`].
#[async_trait]
pub trait CampaignMutationService: Send + Sync {
    /// Updates the daily budget and/or the bid of a campaign
    ///
    /// # Arguments
    /// * `customer_id` - Customer id, dashes allowed
    /// * `campaign_id` - Numeric campaign id
    /// * `new_budget` - New daily budget in account currency
    /// * `new_bid` - New bid modifier; recorded as not implemented
    async fn update_budget_and_bid(
        &self,
        customer_id: &str,
        campaign_id: &str,
        new_budget: Option<f64>,
        new_bid: Option<f64>,
    ) -> Result<UpdateResult, AppError>;

    /// Switches a campaign to another bidding strategy
    ///
    /// `strategy` must be one of the names in
    /// [`BiddingStrategy::ALL`](crate::model::requests::BiddingStrategy::ALL).
    async fn update_bidding_strategy(
        &self,
        customer_id: &str,
        campaign_id: &str,
        strategy: &str,
    ) -> Result<UpdateResult, AppError>;
}
