use gads_client::application::client::Client;
use gads_client::application::interfaces::account::AccountService;
use gads_client::application::interfaces::campaign::CampaignService;
use gads_client::model::requests::CampaignStatus;
use gads_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple client example");

    // Authentication happens on the first request
    let client = Client::from_env()?;
    info!("✓ Client created");

    let accounts = client.list_client_accounts().await?;
    info!("Found {} client accounts", accounts.len());

    for account in &accounts {
        info!("{}", account);
        let campaigns = client
            .list_campaigns(&account.account_id, Some(CampaignStatus::Enabled))
            .await?;
        for campaign in campaigns {
            info!(
                "  {} [{}] budget {:.2} {}",
                campaign.campaign_name, campaign.campaign_id, campaign.budget, account.currency_code
            );
        }
    }

    Ok(())
}
