use gads_client::error::AppError;
use gads_client::utils::finance::{from_micros, from_micros_f64, to_micros};

#[test]
fn test_to_micros_rounds_to_nearest() {
    assert_eq!(to_micros(12.34).unwrap(), 12_340_000);
    assert_eq!(to_micros(0.29).unwrap(), 290_000);
    assert_eq!(to_micros(100.0).unwrap(), 100_000_000);
    assert_eq!(to_micros(0.0000004).unwrap(), 0);
    assert_eq!(to_micros(0.0000006).unwrap(), 1);
}

#[test]
fn test_to_micros_rejects_values_outside_i64() {
    for amount in [1.0e13, -1.0e13, f64::INFINITY, f64::NAN] {
        let err = to_micros(amount).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "{amount}");
    }
    assert_eq!(to_micros(9_000_000_000_000.0).unwrap(), 9_000_000_000_000_000_000);
}

#[test]
fn test_from_micros() {
    assert_eq!(from_micros(12_340_000), 12.34);
    assert_eq!(from_micros(0), 0.0);
    assert_eq!(from_micros(1), 0.000001);
}

#[test]
fn test_from_micros_f64_keeps_fraction() {
    assert_eq!(from_micros_f64(1_500_000.0), 1.5);
    assert_eq!(from_micros_f64(0.0), 0.0);
}
