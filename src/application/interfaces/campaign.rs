/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::gaql::DateRange;
use crate::model::requests::CampaignStatus;
use crate::presentation::campaign::{Campaign, CampaignInfo, CampaignPerformance};
use async_trait::async_trait;

/// Interface for campaign queries
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Lists the campaigns of a customer
    ///
    /// # Arguments
    /// * `customer_id` - Customer id, dashes allowed
    /// * `status` - Optional serving status filter
    async fn list_campaigns(
        &self,
        customer_id: &str,
        status: Option<CampaignStatus>,
    ) -> Result<Vec<Campaign>, AppError>;

    /// Gets one campaign by numeric id
    ///
    /// Fails with [`AppError::NotFound`] when the campaign does not exist.
    async fn get_campaign_info(
        &self,
        customer_id: &str,
        campaign_id: &str,
    ) -> Result<CampaignInfo, AppError>;

    /// Gets campaign metrics over a date range
    ///
    /// # Arguments
    /// * `customer_id` - Customer id, dashes allowed
    /// * `campaign_ids` - Restricts the report to these campaigns when given
    /// * `date_range` - Reporting window
    async fn get_campaign_performance(
        &self,
        customer_id: &str,
        campaign_ids: Option<&[String]>,
        date_range: DateRange,
    ) -> Result<Vec<CampaignPerformance>, AppError>;
}
