//! Tests for sliding-window evaluation

mod common;

use approx::assert_relative_eq;
use common::{create_nullable_df, create_test_df, extract_column};
use window_polars::{Error, WindowStatsExt};

fn assert_column_eq(actual: &[Option<f64>], expected: &[Option<f64>]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        match (a, e) {
            (Some(a), Some(e)) => assert_relative_eq!(*a, *e, epsilon = 1e-9),
            _ => assert_eq!(a, e, "row {i}"),
        }
    }
}

#[test]
fn test_rolling_population_variance() {
    let df = create_test_df(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let result = df.rolling_statistic("values", "var_pop", 3).unwrap();
    assert_eq!(result.shape(), (5, 1));

    let values = extract_column(&result, "values_variance_pop_w3");
    assert_column_eq(
        &values,
        &[
            Some(0.0),
            Some(0.25),
            Some(2.0 / 3.0),
            Some(2.0 / 3.0),
            Some(2.0 / 3.0),
        ],
    );
}

#[test]
fn test_rolling_sample_stddev_needs_two_rows() {
    let df = create_test_df(&[1.0, 3.0, 5.0, 7.0]);
    let result = df.rolling_statistic("values", "STDDEV", 2).unwrap();
    let values = extract_column(&result, "values_stddev_samp_w2");
    let s = 2.0_f64.sqrt();
    assert_column_eq(&values, &[None, Some(s), Some(s), Some(s)]);
}

#[test]
fn test_rolling_with_nulls() {
    let df = create_nullable_df(&[None, Some(1.0), Some(3.0), Some(5.0)]);
    let result = df.rolling_statistic("values", "variance_population", 2).unwrap();
    let values = extract_column(&result, "values_variance_pop_w2");
    assert_column_eq(&values, &[None, Some(0.0), Some(1.0), Some(1.0)]);
}

#[test]
fn test_rolling_recovers_after_infinite_cell() {
    let df = create_test_df(&[1.0, f64::INFINITY, 3.0, 5.0, 7.0]);
    let result = df.rolling_statistic("values", "var_pop", 2).unwrap();
    let values = extract_column(&result, "values_variance_pop_w2");
    assert_column_eq(&values, &[Some(0.0), None, None, Some(1.0), Some(1.0)]);
}

#[test]
fn test_window_larger_than_frame_is_cumulative() {
    let df = create_test_df(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    let result = df.rolling_statistic("values", "var_pop", 100).unwrap();
    let values = extract_column(&result, "values_variance_pop_w100");
    assert_relative_eq!(values[7].unwrap(), 4.0, epsilon = 1e-12);
}

#[test]
fn test_rolling_errors() {
    let df = create_test_df(&[1.0, 2.0]);
    assert!(matches!(
        df.rolling_statistic("values", "stddev", 0),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        df.rolling_statistic("other", "stddev", 2),
        Err(Error::InvalidColumn(_))
    ));
    assert!(matches!(
        df.rolling_statistic("values", "mean", 2),
        Err(Error::Functions(_))
    ));
}
