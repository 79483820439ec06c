//! Function names and aliases
//!
//! Names resolve case-insensitively: they are stored lowercase and looked up
//! after ASCII lowercasing.

use crate::function::StatisticFunction;
use crate::{Error, Result};
use lazy_static::lazy_static;
use std::collections::BTreeMap;
use window_core::StatisticKind;

lazy_static! {
    /// Registry holding every standard name and alias
    pub static ref STANDARD_REGISTRY: FunctionRegistry = FunctionRegistry::standard();
}

/// Mapping from function name to the statistic it computes
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    entries: BTreeMap<String, StatisticKind>,
}

impl FunctionRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// All canonical names and aliases of the four statistics
    pub fn standard() -> Self {
        let entries = StatisticKind::ALL
            .into_iter()
            .flat_map(|kind| kind.aliases().iter().map(move |name| (name.to_string(), kind)))
            .collect();
        Self { entries }
    }

    /// Add `name` as another name for `kind`.
    ///
    /// Re-registering a name for the same statistic is a no-op; binding it to
    /// a different statistic is an error.
    pub fn register_alias(&mut self, name: &str, kind: StatisticKind) -> Result<()> {
        let key = name.trim().to_ascii_lowercase();
        if key.is_empty() {
            return Err(Error::Registration("function name is empty".to_string()));
        }
        match self.entries.get(&key).copied() {
            Some(existing) if existing != kind => Err(Error::Registration(format!(
                "{key} is already registered for {existing}"
            ))),
            Some(_) => Ok(()),
            None => {
                self.entries.insert(key, kind);
                Ok(())
            }
        }
    }

    pub fn resolve(&self, name: &str) -> Option<StatisticKind> {
        self.entries.get(&name.to_ascii_lowercase()).copied()
    }

    /// Callbacks for `name`, or [`Error::UnknownFunction`]
    pub fn function(&self, name: &str) -> Result<StatisticFunction> {
        self.resolve(name)
            .map(StatisticFunction::new)
            .ok_or_else(|| Error::UnknownFunction(name.to_string()))
    }

    /// Registered names in lowercase, sorted
    pub fn names(&self) -> impl Iterator<Item = (&str, StatisticKind)> + '_ {
        self.entries.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_aliases() {
        let registry = FunctionRegistry::standard();
        assert_eq!(registry.len(), 22);

        let cases = [
            ("stddev", StatisticKind::SampleStdDev),
            ("standard_deviation", StatisticKind::SampleStdDev),
            ("STDEV_POPULATION", StatisticKind::PopulationStdDev),
            ("Var", StatisticKind::SampleVariance),
            ("variance", StatisticKind::SampleVariance),
            ("VAR_POP", StatisticKind::PopulationVariance),
        ];
        for (name, kind) in cases {
            assert_eq!(registry.resolve(name), Some(kind), "{name}");
        }
        assert_eq!(registry.resolve("median"), None);
    }

    #[test]
    fn test_unknown_function() {
        let err = STANDARD_REGISTRY.function("mode").unwrap_err();
        assert!(matches!(err, Error::UnknownFunction(name) if name == "mode"));
    }

    #[test]
    fn test_register_alias() {
        let mut registry = FunctionRegistry::empty();
        registry.register_alias("SD", StatisticKind::SampleStdDev).unwrap();
        registry.register_alias("sd", StatisticKind::SampleStdDev).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("Sd"), Some(StatisticKind::SampleStdDev));

        assert!(registry
            .register_alias("sd", StatisticKind::PopulationVariance)
            .is_err());
        assert!(registry.register_alias("  ", StatisticKind::SampleStdDev).is_err());
    }

    #[test]
    fn test_names_are_lowercase() {
        for (name, _) in STANDARD_REGISTRY.names() {
            assert_eq!(name, name.to_ascii_lowercase());
        }
    }
}
