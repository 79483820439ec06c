use super::{lookup_function, observations, step};
use crate::Result;
use polars::prelude::*;
use tracing::instrument;
use window_functions::AggregateContext;

#[instrument(skip(df))]
pub(crate) fn aggregate_statistic_impl(
    df: &DataFrame,
    columns: &[&str],
    function_name: &str,
) -> Result<DataFrame> {
    let function = lookup_function(function_name)?;
    let canonical = function.kind().canonical_name();
    let mut result_series = Vec::new();

    for col_name in columns {
        let values = observations(df, col_name)?;

        let mut ctx = AggregateContext::new();
        for value in values {
            step(&function, &mut ctx, value)?;
        }
        let result = function.finalize(&ctx).as_f64();
        function.destroy(&mut ctx);

        let col_name = format!("{}_{}", col_name, canonical);
        let series = Series::new(col_name.as_str().into(), vec![result]);
        result_series.push(series.into());
    }

    Ok(DataFrame::new(result_series)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aggregate_impl_names_column_by_canonical_name() {
        let df = df!["x" => [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]].unwrap();
        let result = aggregate_statistic_impl(&df, &["x"], "STDEV_POP").unwrap();
        let value = result
            .column("x_stddev_pop")
            .unwrap()
            .f64()
            .unwrap()
            .get(0)
            .unwrap();
        assert_relative_eq!(value, 2.0, epsilon = 1e-12);
    }
}
