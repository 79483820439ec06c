//! Incremental variance and standard deviation for cumulative and sliding windows
//!
//! This crate provides the statistics engine behind the `window-stats`
//! aggregate and window functions. It keeps the observations currently in
//! scope in a growable ring and maintains their running sum and sum of
//! squares, so that adding a row, removing the oldest row, and reading a
//! statistic are all O(1) amortized.
//!
//! # Components
//!
//! - [`CircularBuffer`]: ring store with head/tail indices that doubles its
//!   capacity when full
//! - [`RunningMoments`]: running `Σx` and `Σx²`, updated in lock-step with the
//!   buffer
//! - [`StatisticKind`]: sample/population variance and standard deviation
//! - [`StatisticsContext`]: one evaluation's state and its add / remove /
//!   snapshot / finalize / teardown protocol
//!
//! # Example
//!
//! ```rust
//! use window_core::{StatisticKind, StatisticsContext};
//!
//! let mut ctx = StatisticsContext::new();
//! for x in [Some(1.0), None, Some(2.0), None, Some(3.0)] {
//!     ctx.add(x).unwrap();
//! }
//!
//! let var = ctx.finalize(StatisticKind::PopulationVariance).unwrap();
//! assert!((var - 2.0 / 3.0).abs() < 1e-12);
//! assert_eq!(ctx.count(), 3);
//! ctx.teardown();
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod moments;
pub mod ring;
pub mod statistic;

pub use config::EngineConfig;
pub use engine::{ContextState, StatisticsContext};
pub use error::{Error, Result};
pub use moments::{RunningMoments, MIN_COUNT_POPULATION, MIN_COUNT_SAMPLE};
pub use ring::CircularBuffer;
pub use statistic::StatisticKind;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ContextState, EngineConfig, Error, Result, StatisticKind, StatisticsContext,
    };
}
