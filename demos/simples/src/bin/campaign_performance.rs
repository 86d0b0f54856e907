use chrono::{Duration, Utc};
use gads_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = std::env::args().skip(1);
    let customer_id = args
        .next()
        .ok_or("usage: campaign_performance <customer-id> [campaign-id...]")?;
    let campaign_ids: Vec<String> = args.collect();

    let client = Client::from_env()?;

    let end = Utc::now().date_naive();
    let range = DateRange::custom(end - Duration::days(13), end)?;
    let ids = (!campaign_ids.is_empty()).then_some(campaign_ids.as_slice());

    let rows = client
        .get_campaign_performance(&customer_id, ids, range)
        .await?;

    info!("{} campaigns in {}", rows.len(), range);
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
