// Integration tests for account endpoints

use crate::common;
use gads_client::prelude::*;
use tokio::runtime::Runtime;
use tracing::info;

#[test]
#[ignore]
fn test_list_accessible_customers() {
    let client = common::create_test_client();
    let rt = Runtime::new().expect("Failed to create runtime");

    rt.block_on(async {
        let ids = client
            .list_accessible_customers()
            .await
            .expect("Failed to list accessible customers");

        assert!(!ids.is_empty(), "Should return at least one customer");
        for id in &ids {
            assert!(id.chars().all(|c| c.is_ascii_digit()), "{id}");
        }
        info!("Accessible customers: {}", ids.join(", "));
    });
}

#[test]
#[ignore]
fn test_list_client_accounts() {
    let client = common::create_test_client();
    let rt = Runtime::new().expect("Failed to create runtime");

    rt.block_on(async {
        info!("Listing client accounts");
        let accounts = client
            .list_client_accounts()
            .await
            .expect("Failed to list client accounts");

        for (i, account) in accounts.iter().enumerate() {
            info!(
                "{}. {} (ID: {}) {} {}",
                i + 1,
                account.account_name,
                account.account_id,
                account.currency_code,
                account.status
            );
            assert!(!account.account_id.contains('/'));
        }
    });
}
