//! Engine configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of slots allocated on the first observation
pub const DEFAULT_INITIAL_CAPACITY: usize = 100;

/// Factor applied to the capacity whenever the buffer is full
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Sizing of the observation buffer behind a statistics context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Capacity of the buffer when it is first allocated
    pub initial_capacity: usize,

    /// Multiplier used when growing a full buffer
    pub growth_factor: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl EngineConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Check that the buffer can be allocated and can always grow
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::InvalidParameter(
                "initial capacity must be at least 1".to_string(),
            ));
        }
        if self.growth_factor < 2 {
            return Err(Error::InvalidParameter(format!(
                "growth factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.initial_capacity, 100);
        assert_eq!(config.growth_factor, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(EngineConfig::default()
            .with_initial_capacity(0)
            .validate()
            .is_err());
        assert!(EngineConfig::default()
            .with_growth_factor(1)
            .validate()
            .is_err());
        assert!(EngineConfig::default()
            .with_initial_capacity(1)
            .with_growth_factor(3)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"initial_capacity": 8}"#).unwrap();
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.growth_factor, DEFAULT_GROWTH_FACTOR);
    }
}
