//! Registration of the statistics functions with a host

use crate::function::{StatisticFunction, ARGUMENT_COUNT};
use crate::registry::FunctionRegistry;
use crate::Result;
use tracing::debug;

/// A host that can expose a function under a name
pub trait FunctionHost {
    /// Register `function` as both aggregate and window function `name`
    fn create_window_function(
        &mut self,
        name: &str,
        argument_count: usize,
        function: StatisticFunction,
    ) -> Result<()>;
}

/// Register every name in `registry` with `host`, in lowercase and uppercase.
///
/// Stops at the first host error. Returns the number of names registered.
pub fn register_functions<H>(host: &mut H, registry: &FunctionRegistry) -> Result<usize>
where
    H: FunctionHost + ?Sized,
{
    let mut registered = 0;
    for (name, kind) in registry.names() {
        let function = StatisticFunction::new(kind);
        host.create_window_function(name, ARGUMENT_COUNT, function)?;
        registered += 1;

        let upper = name.to_ascii_uppercase();
        if upper != name {
            host.create_window_function(&upper, ARGUMENT_COUNT, function)?;
            registered += 1;
        }
    }
    debug!(registered, "registered statistics functions");
    Ok(registered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::STANDARD_REGISTRY;
    use crate::Error;
    use std::collections::HashMap;
    use window_core::StatisticKind;

    #[derive(Default)]
    struct RecordingHost {
        functions: HashMap<String, (usize, StatisticFunction)>,
        fail_on: Option<String>,
    }

    impl FunctionHost for RecordingHost {
        fn create_window_function(
            &mut self,
            name: &str,
            argument_count: usize,
            function: StatisticFunction,
        ) -> Result<()> {
            if self.fail_on.as_deref() == Some(name) {
                return Err(Error::Registration(format!("host rejected {name}")));
            }
            self.functions
                .insert(name.to_string(), (argument_count, function));
            Ok(())
        }
    }

    #[test]
    fn test_registers_lower_and_upper_case() {
        let mut host = RecordingHost::default();
        let count = register_functions(&mut host, &STANDARD_REGISTRY).unwrap();
        assert_eq!(count, 44);
        assert_eq!(host.functions.len(), 44);

        let (args, function) = host.functions["STDDEV"];
        assert_eq!(args, 1);
        assert_eq!(function.kind(), StatisticKind::SampleStdDev);
        assert_eq!(host.functions["var_pop"].1.kind(), StatisticKind::PopulationVariance);
    }

    #[test]
    fn test_host_failure_aborts_registration() {
        let mut host = RecordingHost {
            fail_on: Some("VAR".to_string()),
            ..Default::default()
        };
        let err = register_functions(&mut host, &STANDARD_REGISTRY).unwrap_err();
        assert!(matches!(err, Error::Registration(_)));
        assert!(host.functions.contains_key("var"));
        assert!(!host.functions.contains_key("VAR"));
    }
}
