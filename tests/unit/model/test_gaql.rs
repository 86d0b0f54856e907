use chrono::NaiveDate;
use gads_client::model::gaql::{DateRange, QueryBuilder, validate_id};

#[test]
fn test_where_bool_and_where_id() {
    let query = QueryBuilder::select(&["customer_client.client_customer"])
        .from("customer_client")
        .where_bool("customer_client.manager", false)
        .unwrap()
        .where_id("customer_client.level", "1")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        query,
        "SELECT customer_client.client_customer FROM customer_client \
         WHERE customer_client.manager = FALSE AND customer_client.level = 1"
    );
}

#[test]
fn test_date_range_literals_round_trip_through_display() {
    for literal in [
        "TODAY",
        "YESTERDAY",
        "LAST_7_DAYS",
        "LAST_14_DAYS",
        "LAST_30_DAYS",
        "LAST_BUSINESS_WEEK",
        "LAST_WEEK_MON_SUN",
        "LAST_WEEK_SUN_SAT",
        "THIS_WEEK_SUN_TODAY",
        "THIS_WEEK_MON_TODAY",
        "THIS_MONTH",
        "LAST_MONTH",
    ] {
        let range: DateRange = literal.parse().unwrap();
        assert_eq!(range.to_string(), literal);
    }
}

#[test]
fn test_custom_range_has_no_literal() {
    let day = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    let range = DateRange::custom(day, day).unwrap();
    assert_eq!(range.literal(), None);
}

#[test]
fn test_validate_id() {
    assert!(validate_id("42").is_ok());
    assert!(validate_id("").is_err());
    assert!(validate_id("42 OR 1=1").is_err());
    assert!(validate_id("-1").is_err());
}

#[test]
fn test_field_names_are_validated() {
    assert!(
        QueryBuilder::select(&["campaign.id"])
            .from("campaign")
            .where_bool("campaign.id = 1 OR campaign.status", true)
            .is_err()
    );
}
