//! Host-owned per-evaluation state slot

use crate::Result;
use tracing::debug;
use window_core::{EngineConfig, StatisticsContext};

/// Opaque state the host keeps for one aggregate or window evaluation.
///
/// The slot starts empty; the first `step` creates the statistics context.
/// [`destroy`](AggregateContext::destroy) tears it down and is safe to call
/// any number of times, whether or not a context was ever created. Dropping
/// the slot destroys it, so an aborted evaluation still releases its buffer.
#[derive(Debug, Default)]
pub struct AggregateContext {
    config: EngineConfig,
    state: Option<StatisticsContext>,
    destroyed: bool,
}

impl AggregateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
            destroyed: false,
        })
    }

    /// The statistics context, created on first use
    pub fn get_or_init(&mut self) -> Result<&mut StatisticsContext> {
        if self.destroyed {
            return Err(window_core::Error::ContextReleased.into());
        }
        let state = match self.state.take() {
            Some(state) => state,
            None => {
                debug!("creating statistics context");
                StatisticsContext::with_config(self.config)?
            }
        };
        Ok(self.state.insert(state))
    }

    pub fn get(&self) -> Option<&StatisticsContext> {
        self.state.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut StatisticsContext> {
        self.state.as_mut()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Tear down the statistics context, if any. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if let Some(state) = self.state.as_mut() {
            state.teardown();
        }
        self.destroyed = true;
    }
}

impl Drop for AggregateContext {
    fn drop(&mut self) {
        self.destroy();
    }
}
