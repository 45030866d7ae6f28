//! Prints the Euler trace, error table, and summary for dy/dx = k·y.
//!
//! # Usage
//!
//! ```text
//! cargo run -p slope-growth --example report --features serde
//! cargo run -p slope-growth --example report --features serde -- 0.1 0 1 2 0.05
//! cargo run -p slope-growth --example report --features serde -- -0.5 0 10 1 0.25 --json
//! ```
//!
//! Positional arguments are `k x0 y0 x_target h`. Missing trailing values fall
//! back to the defaults (k = 0.1, x0 = 0, y0 = 1, x_target = 2, h = 0.1).
//! `--json` prints the trace as JSON instead of tables.

use std::error::Error;

use slope_growth::{ErrorReport, Parameters, Summary, compute_trace};

fn main() -> Result<(), Box<dyn Error>> {
    let mut json = false;
    let mut values = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            values.push(arg.parse::<f64>().map_err(|e| format!("invalid number {arg:?}: {e}"))?);
        }
    }

    let parameters = parameters_from(&values)?;
    let trace = match compute_trace(&parameters) {
        Ok(trace) => trace,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
        return Ok(());
    }

    let report = ErrorReport::new(&trace);
    let summary = Summary::new(&trace, &report);

    println!(
        "dy/dx = {}y, initial ({}, {}), step size {}\n",
        parameters.k, parameters.x0, parameters.y0, parameters.h
    );
    println!("{summary}");
    println!("Step-by-step calculations\n{trace}");
    println!("Error analysis\n{report}");

    if !trace.is_finite() {
        eprintln!("warning: the approximation overflowed; try a smaller k or h");
    }

    Ok(())
}

/// Fills `Parameters` from up to five positional values.
fn parameters_from(values: &[f64]) -> Result<Parameters, String> {
    let mut parameters = Parameters::default();
    let fields = [
        &mut parameters.k,
        &mut parameters.x0,
        &mut parameters.y0,
        &mut parameters.x_target,
        &mut parameters.h,
    ];
    if values.len() > fields.len() {
        return Err("usage: report [k [x0 [y0 [x_target [h]]]]] [--json]".into());
    }
    for (field, value) in fields.into_iter().zip(values) {
        *field = *value;
    }
    Ok(parameters)
}
