//! Extension trait for windowed statistics on Polars DataFrames

use crate::Result;
use polars::prelude::*;

/// Variance and standard deviation over DataFrame columns
///
/// `function` is any name or alias understood by
/// [`STANDARD_REGISTRY`](window_functions::STANDARD_REGISTRY), e.g. `"stddev"`,
/// `"VAR_POP"` or `"standard_deviation"`. Null cells are ignored; a statistic
/// that is undefined for its rows is returned as null.
pub trait WindowStatsExt {
    /// Aggregate each column over all of its rows
    ///
    /// # Arguments
    /// * `columns` - Numeric column names
    /// * `function` - Statistic name or alias
    ///
    /// # Returns
    /// One-row DataFrame with columns named `{column}_{canonical_name}`
    fn aggregate_statistic(&self, columns: &[&str], function: &str) -> Result<DataFrame>;

    /// Evaluate the statistic over a sliding frame ending at each row
    ///
    /// # Arguments
    /// * `column` - Numeric column name
    /// * `function` - Statistic name or alias
    /// * `window` - Frame size in rows: the current row and `window - 1`
    ///   preceding rows
    ///
    /// # Returns
    /// DataFrame with one column named `{column}_{canonical_name}_w{window}`
    /// and one row per input row
    fn rolling_statistic(&self, column: &str, function: &str, window: usize)
        -> Result<DataFrame>;
}
