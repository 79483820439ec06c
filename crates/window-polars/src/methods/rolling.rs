use super::{lookup_function, observations, step};
use crate::{Error, Result};
use polars::prelude::*;
use tracing::{debug, instrument};
use window_functions::{AggregateContext, Value};

#[instrument(skip(df))]
pub(crate) fn rolling_statistic_impl(
    df: &DataFrame,
    col_name: &str,
    function_name: &str,
    window: usize,
) -> Result<DataFrame> {
    if window == 0 {
        return Err(Error::InvalidParameter(
            "window must contain at least one row".to_string(),
        ));
    }
    let function = lookup_function(function_name)?;
    let values = observations(df, col_name)?;

    let mut ctx = AggregateContext::new();
    let mut results = Vec::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        step(&function, &mut ctx, *value)?;
        if i >= window {
            function.inverse(&mut ctx, &[Value::from(values[i - window])])?;
        }
        results.push(function.value(&ctx).as_f64());
    }
    if let Some(state) = ctx.get() {
        debug!(capacity = state.capacity(), rows = values.len(), "rolling evaluation done");
    }
    function.destroy(&mut ctx);

    let name = format!("{}_{}_w{}", col_name, function.kind().canonical_name(), window);
    let series = Series::new(name.as_str().into(), results);
    Ok(DataFrame::new(vec![series.into()])?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_of_one_row() {
        let df = df!["x" => [1.0, 5.0, 9.0]].unwrap();
        let result = rolling_statistic_impl(&df, "x", "var_pop", 1).unwrap();
        let values: Vec<Option<f64>> = result
            .column("x_variance_pop_w1")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(values, vec![Some(0.0), Some(0.0), Some(0.0)]);
    }

    #[test]
    fn test_zero_window_rejected() {
        let df = df!["x" => [1.0, 2.0]].unwrap();
        let err = rolling_statistic_impl(&df, "x", "stddev", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
}
