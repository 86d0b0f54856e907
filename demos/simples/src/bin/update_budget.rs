use gads_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [customer_id, campaign_id, budget] = args.as_slice() else {
        return Err("usage: update_budget <customer-id> <campaign-id> <daily-budget>".into());
    };
    let budget: f64 = budget.parse()?;

    let client = Client::from_env()?;
    let info = client.get_campaign_info(customer_id, campaign_id).await?;
    info!("Updating {} ({})", info.name, info.campaign_budget);

    let result = client
        .update_budget_and_bid(customer_id, campaign_id, Some(budget), None)
        .await?;

    if result.success {
        info!("✓ {}", result.message);
    } else {
        for update in result.failed_updates() {
            warn!("Failed update: {:?}", update);
        }
    }
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
