//! Per-evaluation statistics context
//!
//! A [`StatisticsContext`] couples a [`CircularBuffer`] of the observations in
//! scope with their [`RunningMoments`]. Hosts drive it with one call per row
//! event:
//!
//! - [`add`](StatisticsContext::add) when a row enters the frame,
//! - [`remove`](StatisticsContext::remove) when a row leaves it,
//! - [`snapshot`](StatisticsContext::snapshot) once per frame position,
//! - [`finalize`](StatisticsContext::finalize) at the end of a cumulative
//!   aggregate,
//! - [`teardown`](StatisticsContext::teardown) exactly once, on completion or
//!   abort.
//!
//! Rows leave a sliding frame in the order they entered it, so removal always
//! takes the oldest buffered observation. `None` observations are ignored on
//! both sides, which keeps the rows added and removed in step.
//!
//! NaN and infinite observations are accepted but kept out of the running
//! moments. While one is in scope every statistic is `None`; the frame
//! recovers once it has been removed.
//!
//! # Example
//!
//! ```rust
//! use window_core::{StatisticKind, StatisticsContext};
//!
//! let mut ctx = StatisticsContext::new();
//! for x in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     ctx.add(Some(x)).unwrap();
//! }
//! assert_eq!(ctx.finalize(StatisticKind::PopulationVariance), Some(2.0));
//!
//! // Slide the frame forward by two rows
//! ctx.remove(Some(1.0));
//! ctx.remove(Some(2.0));
//! let var = ctx.snapshot(StatisticKind::PopulationVariance).unwrap();
//! assert!((var - 2.0 / 3.0).abs() < 1e-12);
//!
//! ctx.teardown();
//! ```

use crate::config::EngineConfig;
use crate::moments::RunningMoments;
use crate::ring::CircularBuffer;
use crate::statistic::StatisticKind;
use crate::{Error, Result};
use tracing::{debug, trace};

/// Observable lifecycle state of a context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// No observations in scope
    Empty,
    /// At least one observation in scope
    Populated,
    /// Released; terminal
    TornDown,
}

/// Running statistics over the observations currently in scope
#[derive(Debug, Clone)]
pub struct StatisticsContext {
    config: EngineConfig,
    buffer: Option<CircularBuffer<f64>>,
    moments: RunningMoments,
    non_finite: usize,
    released: bool,
}

impl Default for StatisticsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl StatisticsContext {
    /// Context with the default buffer sizing
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            buffer: None,
            moments: RunningMoments::new(),
            non_finite: 0,
            released: false,
        }
    }

    /// Context with custom buffer sizing
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> ContextState {
        if self.released {
            ContextState::TornDown
        } else if self.count() == 0 {
            ContextState::Empty
        } else {
            ContextState::Populated
        }
    }

    /// Bring an observation into scope.
    ///
    /// `None` is ignored. A failure to allocate or grow the buffer leaves the
    /// context unchanged.
    pub fn add(&mut self, value: Option<f64>) -> Result<()> {
        if self.released {
            return Err(Error::ContextReleased);
        }
        let Some(value) = value else {
            trace!("ignoring null observation");
            return Ok(());
        };
        let buffer = match self.buffer.take() {
            Some(buffer) => buffer,
            None => {
                debug!(
                    capacity = self.config.initial_capacity,
                    "allocating observation buffer"
                );
                CircularBuffer::with_capacity(self.config.initial_capacity)?
            }
        };
        self.buffer
            .insert(buffer)
            .push_growing(value, self.config.growth_factor)?;
        if value.is_finite() {
            self.moments.push(value);
        } else {
            trace!(value, "non-finite observation in scope");
            self.non_finite += 1;
        }
        Ok(())
    }

    /// Take the oldest observation out of scope.
    ///
    /// `hint` is the value of the row leaving the frame; only its nullness is
    /// used. A `None` hint, an empty context and a released context are all
    /// no-ops. Returns the removed observation.
    pub fn remove(&mut self, hint: Option<f64>) -> Option<f64> {
        if hint.is_none() {
            trace!("ignoring null observation leaving the frame");
            return None;
        }
        let removed = self.buffer.as_mut().and_then(CircularBuffer::pop_front);
        match removed {
            Some(value) if value.is_finite() => self.moments.pop(value),
            Some(_) => self.non_finite -= 1,
            None => trace!("removal requested from an empty context"),
        }
        removed
    }

    /// Current value of `kind`, or `None` when it is undefined.
    ///
    /// Never mutates; may be interleaved freely with `add` and `remove`.
    pub fn snapshot(&self, kind: StatisticKind) -> Option<f64> {
        if self.released || self.non_finite > 0 {
            return None;
        }
        kind.evaluate(&self.moments)
    }

    /// Final value of a cumulative aggregate.
    ///
    /// Does not release the buffer; [`teardown`](Self::teardown) does.
    pub fn finalize(&self, kind: StatisticKind) -> Option<f64> {
        self.snapshot(kind)
    }

    /// Release the buffer and enter the terminal state. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            debug!(
                capacity = buffer.capacity(),
                live = buffer.len(),
                "releasing observation buffer"
            );
        }
        self.moments.reset();
        self.non_finite = 0;
        self.released = true;
    }

    /// Number of observations in scope, including non-finite ones
    pub fn count(&self) -> usize {
        self.moments.count() + self.non_finite
    }

    /// Number of NaN or infinite observations in scope
    pub fn non_finite_count(&self) -> usize {
        self.non_finite
    }

    pub fn sum(&self) -> f64 {
        self.moments.sum()
    }

    pub fn sum_squares(&self) -> f64 {
        self.moments.sum_squares()
    }

    pub fn mean(&self) -> Option<f64> {
        self.moments.mean()
    }

    pub fn moments(&self) -> &RunningMoments {
        &self.moments
    }

    /// Allocated buffer slots; 0 before the first observation and after teardown
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().map_or(0, CircularBuffer::capacity)
    }

    /// The `index`-th oldest observation in scope
    pub fn get(&self, index: usize) -> Option<f64> {
        self.buffer.as_ref().and_then(|buffer| buffer.get(index))
    }

    /// Observations in scope, oldest first
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.buffer.iter().flat_map(|buffer| buffer.iter())
    }
}
