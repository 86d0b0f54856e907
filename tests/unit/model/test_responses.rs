use gads_client::model::responses::{
    CustomerClientRow, ListAccessibleCustomersResponse, MutateResponse, SearchResponse,
};

#[test]
fn test_customer_client_row_accepts_numeric_level() {
    let json = r#"{"results":[{"customerClient":{"clientCustomer":"customers/1","level":1,"manager":false}}]}"#;
    let resp: SearchResponse<CustomerClientRow> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.results[0].customer_client.level, 1);
    assert!(!resp.results[0].customer_client.manager);
}

#[test]
fn test_mutate_response_defaults() {
    let resp: MutateResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.results.is_empty());

    let resp: MutateResponse =
        serde_json::from_str(r#"{"results":[{"resourceName":"customers/1/campaigns/2"}]}"#)
            .unwrap();
    assert_eq!(resp.results[0].resource_name, "customers/1/campaigns/2");
}

#[test]
fn test_list_accessible_customers_response() {
    let resp: ListAccessibleCustomersResponse =
        serde_json::from_str(r#"{"resourceNames":["customers/1","customers/2"]}"#).unwrap();
    assert_eq!(resp.resource_names.len(), 2);
}

#[test]
fn test_empty_next_page_token_ends_pagination() {
    let resp: SearchResponse<CustomerClientRow> =
        serde_json::from_str(r#"{"results":[],"nextPageToken":""}"#).unwrap();
    assert_eq!(resp.next_page(), None);
}
