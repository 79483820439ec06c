//! Implementations backing [`WindowStatsExt`](crate::WindowStatsExt)

mod aggregate;
mod rolling;

use crate::{Error, Result};
use polars::prelude::*;
use window_functions::{AggregateContext, StatisticFunction, Value, STANDARD_REGISTRY};

impl crate::WindowStatsExt for DataFrame {
    fn aggregate_statistic(&self, columns: &[&str], function: &str) -> Result<DataFrame> {
        aggregate::aggregate_statistic_impl(self, columns, function)
    }

    fn rolling_statistic(
        &self,
        column: &str,
        function: &str,
        window: usize,
    ) -> Result<DataFrame> {
        rolling::rolling_statistic_impl(self, column, function, window)
    }
}

fn lookup_function(name: &str) -> Result<StatisticFunction> {
    Ok(STANDARD_REGISTRY.function(name)?)
}

/// Column values as observations, casting numeric types to f64
fn observations(df: &DataFrame, col_name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(col_name)
        .map_err(|_| Error::InvalidColumn(col_name.to_string()))?;

    let column = match column.dtype() {
        DataType::Float64 => column.clone(),
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::UInt64
        | DataType::UInt32 => column.cast(&DataType::Float64)?,
        dt => {
            return Err(Error::TypeMismatch {
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    let ca = column.f64()?;
    Ok(ca.into_iter().collect())
}

fn step(function: &StatisticFunction, ctx: &mut AggregateContext, value: Option<f64>) -> Result<()> {
    function.step(ctx, &[Value::from(value)])?;
    Ok(())
}
