//! Aggregate / window function callbacks for one statistic
//!
//! A host evaluating `stddev(x) OVER (ROWS 2 PRECEDING)` calls `step` for each
//! row entering the frame, `inverse` for each row leaving it, `value` once per
//! frame position, and `destroy` when the evaluation ends. A plain aggregate
//! uses `step`, `finalize` and `destroy` only.

use crate::context::AggregateContext;
use crate::value::Value;
use crate::{Error, Result};
use window_core::StatisticKind;

/// Number of arguments every statistics function takes
pub const ARGUMENT_COUNT: usize = 1;

/// Callbacks computing one [`StatisticKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatisticFunction {
    kind: StatisticKind,
}

impl StatisticFunction {
    pub fn new(kind: StatisticKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> StatisticKind {
        self.kind
    }

    /// A row enters the frame.
    ///
    /// Creates the statistics context on first call. Null arguments are
    /// ignored; non-numeric arguments fail without touching the context.
    pub fn step(&self, ctx: &mut AggregateContext, args: &[Value]) -> Result<()> {
        let arg = single_argument(args)?;
        let state = ctx.get_or_init()?;
        let observation = arg.as_observation()?;
        state.add(observation)?;
        Ok(())
    }

    /// A row leaves the frame.
    ///
    /// The oldest observation is removed. Null, text and blob arguments never
    /// entered the context through `step`, so they are ignored here too.
    /// Without a context there is nothing to remove.
    pub fn inverse(&self, ctx: &mut AggregateContext, args: &[Value]) -> Result<()> {
        let arg = single_argument(args)?;
        if let Some(state) = ctx.get_mut() {
            state.remove(arg.as_f64());
        }
        Ok(())
    }

    /// Current value for the frame; `Value::Null` when undefined
    pub fn value(&self, ctx: &AggregateContext) -> Value {
        ctx.get()
            .and_then(|state| state.snapshot(self.kind))
            .into()
    }

    /// Result of a cumulative aggregate. Does not release the context.
    pub fn finalize(&self, ctx: &AggregateContext) -> Value {
        ctx.get()
            .and_then(|state| state.finalize(self.kind))
            .into()
    }

    /// End of evaluation; safe to call on a context that never saw a row
    pub fn destroy(&self, ctx: &mut AggregateContext) {
        ctx.destroy();
    }
}

fn single_argument(args: &[Value]) -> Result<&Value> {
    match args {
        [arg] => Ok(arg),
        _ => Err(Error::ArgumentCount {
            expected: ARGUMENT_COUNT,
            actual: args.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn run_aggregate(kind: StatisticKind, rows: &[Value]) -> Value {
        let function = StatisticFunction::new(kind);
        let mut ctx = AggregateContext::new();
        for row in rows {
            function.step(&mut ctx, std::slice::from_ref(row)).unwrap();
        }
        let result = function.finalize(&ctx);
        function.destroy(&mut ctx);
        result
    }

    #[test]
    fn test_mixed_integer_and_float_arguments() {
        let rows = [Value::Integer(1), Value::Float(2.0), Value::Integer(3)];
        match run_aggregate(StatisticKind::SampleVariance, &rows) {
            Value::Float(v) => assert_relative_eq!(v, 1.0, epsilon = 1e-12),
            other => panic!("expected float, got {other:?}"),
        }
    }

    #[test]
    fn test_no_rows_is_null() {
        for kind in StatisticKind::ALL {
            assert_eq!(run_aggregate(kind, &[]), Value::Null);
        }
    }

    #[test]
    fn test_argument_count_checked() {
        let function = StatisticFunction::new(StatisticKind::SampleStdDev);
        let mut ctx = AggregateContext::new();

        let err = function.step(&mut ctx, &[]).unwrap_err();
        assert!(matches!(err, Error::ArgumentCount { expected: 1, actual: 0 }));

        let err = function
            .step(&mut ctx, &[Value::Integer(1), Value::Integer(2)])
            .unwrap_err();
        assert!(matches!(err, Error::ArgumentCount { expected: 1, actual: 2 }));
        assert!(!ctx.is_initialized());

        assert!(function.inverse(&mut ctx, &[]).is_err());
    }

    #[test]
    fn test_null_step_creates_context_without_observation() {
        let function = StatisticFunction::new(StatisticKind::PopulationVariance);
        let mut ctx = AggregateContext::new();
        function.step(&mut ctx, &[Value::Null]).unwrap();
        assert!(ctx.is_initialized());
        assert_eq!(ctx.get().unwrap().count(), 0);
        assert_eq!(ctx.get().unwrap().capacity(), 0);
        assert_eq!(function.value(&ctx), Value::Null);
    }

    #[test]
    fn test_inverse_without_context_is_noop() {
        let function = StatisticFunction::new(StatisticKind::PopulationVariance);
        let mut ctx = AggregateContext::new();
        function.inverse(&mut ctx, &[Value::Float(1.0)]).unwrap();
        assert!(!ctx.is_initialized());
    }

    #[test]
    fn test_destroy_without_rows() {
        let function = StatisticFunction::new(StatisticKind::SampleVariance);
        let mut ctx = AggregateContext::new();
        function.destroy(&mut ctx);
        function.destroy(&mut ctx);
        assert_eq!(function.finalize(&ctx), Value::Null);
    }
}
