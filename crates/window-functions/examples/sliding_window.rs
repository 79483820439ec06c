//! Registers the statistics functions with a toy host and evaluates
//! `stddev(x) OVER (ROWS BETWEEN 2 PRECEDING AND CURRENT ROW)`.
//!
//! Run with `RUST_LOG=debug cargo run -p window-functions --example sliding_window`
//! to see the engine's buffer growth and teardown logs.

use anyhow::{anyhow, Result};
use std::collections::HashMap;
use tracing::info;
use tracing_subscriber::EnvFilter;
use window_functions::{
    register_functions, AggregateContext, FunctionHost, StatisticFunction, Value,
    STANDARD_REGISTRY,
};

#[derive(Default)]
struct ToyHost {
    functions: HashMap<String, StatisticFunction>,
}

impl FunctionHost for ToyHost {
    fn create_window_function(
        &mut self,
        name: &str,
        _argument_count: usize,
        function: StatisticFunction,
    ) -> window_functions::Result<()> {
        self.functions.insert(name.to_string(), function);
        Ok(())
    }
}

impl ToyHost {
    fn window(&self, name: &str, rows: &[Value], preceding: usize) -> Result<Vec<Value>> {
        let function = *self
            .functions
            .get(name)
            .ok_or_else(|| anyhow!("no such function: {name}"))?;

        let mut ctx = AggregateContext::new();
        let mut out = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            function.step(&mut ctx, std::slice::from_ref(row))?;
            if i > preceding {
                function.inverse(&mut ctx, std::slice::from_ref(&rows[i - preceding - 1]))?;
            }
            out.push(function.value(&ctx));
        }
        function.destroy(&mut ctx);
        Ok(out)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut host = ToyHost::default();
    let registered = register_functions(&mut host, &STANDARD_REGISTRY)?;
    info!(registered, "functions registered");

    let rows: Vec<Value> = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0]
        .into_iter()
        .map(Value::from)
        .collect();

    for name in ["STDDEV", "var_pop"] {
        let values = host.window(name, &rows, 2)?;
        println!("{name}(x) OVER (ROWS 2 PRECEDING)");
        for (row, value) in rows.iter().zip(values) {
            println!("  x = {row}  ->  {value}");
        }
    }
    Ok(())
}
