//! Polars integration for windowed variance and standard deviation
//!
//! This crate drives the [`window_functions`] callbacks over DataFrame
//! columns, acting as the host that a SQL engine would otherwise be.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use window_polars::WindowStatsExt;
//!
//! let df = df!["values" => [1.0, 2.0, 3.0, 4.0, 5.0]]?;
//!
//! // Cumulative aggregate
//! let total = df.aggregate_statistic(&["values"], "stddev")?;
//!
//! // ROWS BETWEEN 2 PRECEDING AND CURRENT ROW
//! let rolling = df.rolling_statistic("values", "var_pop", 3)?;
//! ```

mod error;
mod methods;
mod traits;

pub use error::{Error, Result};
pub use traits::*;

// Re-export commonly used types from dependencies
pub use window_core::StatisticKind;
