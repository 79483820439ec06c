//! Incremental variance and standard deviation for cumulative and
//! sliding-window aggregates
//!
//! This crate re-exports the workspace crates:
//!
//! - [`window_core`]: the statistics engine (ring buffer, running moments,
//!   context protocol)
//! - [`window_functions`]: aggregate / window function callbacks, function
//!   names and host registration
//! - `window_polars` (feature `polars`): DataFrame extension for aggregate
//!   and rolling evaluation
//!
//! # Example
//!
//! ```rust
//! use window_stats::prelude::*;
//!
//! let function = STANDARD_REGISTRY.function("stddev").unwrap();
//! let mut ctx = AggregateContext::new();
//! for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     function.step(&mut ctx, &[Value::Float(x)]).unwrap();
//! }
//! let sd = function.finalize(&ctx).as_f64().unwrap();
//! assert!((sd - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
//! function.destroy(&mut ctx);
//! ```

pub use window_core;
pub use window_functions;

#[cfg(feature = "polars")]
pub use window_polars;

pub use window_core::{EngineConfig, StatisticKind, StatisticsContext};
pub use window_functions::{
    register_functions, AggregateContext, FunctionHost, FunctionRegistry, StatisticFunction,
    Value, STANDARD_REGISTRY,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use window_core::prelude::*;
    pub use window_functions::{
        AggregateContext, FunctionRegistry, StatisticFunction, Value, STANDARD_REGISTRY,
    };

    #[cfg(feature = "polars")]
    pub use window_polars::WindowStatsExt;
}
