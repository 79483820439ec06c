//! Common test utilities for window-polars tests

use polars::prelude::*;

/// DataFrame with a single `values` column
pub fn create_test_df(values: &[f64]) -> DataFrame {
    df!["values" => values].unwrap()
}

/// DataFrame with a single nullable `values` column
pub fn create_nullable_df(values: &[Option<f64>]) -> DataFrame {
    let series = Series::new("values".into(), values.to_vec());
    DataFrame::new(vec![series.into()]).unwrap()
}

/// First cell of `col_name`, `None` when null
pub fn extract_single_value(df: &DataFrame, col_name: &str) -> Option<f64> {
    df.column(col_name).unwrap().f64().unwrap().get(0)
}

/// All cells of `col_name`
pub fn extract_column(df: &DataFrame, col_name: &str) -> Vec<Option<f64>> {
    df.column(col_name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}
