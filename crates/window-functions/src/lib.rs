//! Aggregate and window function adapters for the statistics engine
//!
//! This crate sits between a query host and [`window_core`]. It validates
//! host arguments, owns the per-evaluation [`AggregateContext`], and exposes
//! the four statistics under their SQL names and aliases.
//!
//! | Statistic | Canonical name | Aliases |
//! |---|---|---|
//! | sample stddev | `stddev_samp` | `stddev_sample`, `stdev_samp`, `stdev_sample`, `stddev`, `stdev`, `std_dev`, `standard_deviation` |
//! | population stddev | `stddev_pop` | `stddev_population`, `stdev_pop`, `stdev_population` |
//! | sample variance | `variance_samp` | `variance_sample`, `var_samp`, `var_sample`, `variance`, `var` |
//! | population variance | `variance_pop` | `variance_population`, `var_pop`, `var_population` |
//!
//! # Example
//!
//! ```rust
//! use window_functions::{AggregateContext, Value, STANDARD_REGISTRY};
//!
//! let stddev = STANDARD_REGISTRY.function("STDDEV").unwrap();
//! let mut ctx = AggregateContext::new();
//! for row in [Value::Integer(1), Value::Null, Value::Float(3.0)] {
//!     stddev.step(&mut ctx, &[row]).unwrap();
//! }
//! assert!(matches!(stddev.finalize(&ctx), Value::Float(_)));
//! stddev.destroy(&mut ctx);
//! ```

mod context;
mod error;
mod function;
mod host;
mod registry;
mod value;

pub use context::AggregateContext;
pub use error::{Error, Result};
pub use function::{StatisticFunction, ARGUMENT_COUNT};
pub use host::{register_functions, FunctionHost};
pub use registry::{FunctionRegistry, STANDARD_REGISTRY};
pub use value::Value;

// Re-export the engine types callers need alongside the adapters
pub use window_core::{EngineConfig, StatisticKind};
