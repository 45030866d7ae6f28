//! Plots a forward Euler trace of dy/dx = k·y against the exact solution.
//!
//! # Usage
//!
//! ```text
//! cargo run -p slope-observers --example compare --features plot
//! cargo run -p slope-observers --example compare --features plot -- 0.1 0 1 2 0.5
//! cargo run -p slope-observers --example compare --features plot -- -2 0 1 5 0.9
//! cargo run -p slope-observers --example compare --features plot -- 3 0 1 10 0.5 --log-y
//! ```
//!
//! Positional arguments are `k x0 y0 x_target h`; missing values use the
//! defaults. Larger step sizes make the gap between the two curves easy to
//! see, and `k·h < -1` shows the oscillating instability of explicit Euler.
//! `--log-y` plots y on a logarithmic axis, which suits fast growth.

use std::error::Error;

use slope_growth::{Config, ErrorReport, Exponential, Parameters, Summary, observe_trace};
use slope_observers::{PlotObserver, ShowConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let mut log_y = false;
    let mut values = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--log-y" {
            log_y = true;
            continue;
        }
        let value = arg.parse::<f64>().unwrap_or_else(|_| {
            eprintln!("Invalid argument {arg:?}, expected numbers: k x0 y0 x_target h");
            std::process::exit(1);
        });
        values.push(value);
    }

    let defaults = Parameters::default();
    let value = |index: usize, default: f64| values.get(index).copied().unwrap_or(default);
    let parameters = Parameters::new(
        value(0, defaults.k),
        value(1, defaults.x0),
        value(2, defaults.y0),
        value(3, defaults.x_target),
        value(4, defaults.h),
    );
    let config = Config::default();

    let mut obs = PlotObserver::<2>::new(["Euler's method", "Analytical solution"]);
    let trace = observe_trace(&parameters, &config, &mut obs)?;
    let report = ErrorReport::new(&trace);
    print!("{}", Summary::new(&trace, &report));

    let exact = Exponential::from(&parameters);
    obs.extend(1, exact.curve(parameters.x_target, &config));

    let mut show = ShowConfig::new()
        .title(format!(
            "dy/dx = {}y, initial ({}, {}), step size {}: Euler vs. analytical",
            parameters.k, parameters.x0, parameters.y0, parameters.h
        ))
        .legend()
        .markers(0);
    if log_y {
        show = show.log_y();
    }
    obs.show(show)?;

    Ok(())
}
