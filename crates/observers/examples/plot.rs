//! Interactive view of the logistic map's route to chaos.
//!
//! Sweeps r, collects the bifurcation diagram and the Lyapunov profile with
//! plot observers, and opens one window with both plots stacked.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot
//! cargo run --example plot --features plot -- 3.4 4.0
//! ```
//!
//! The optional arguments set `r_min` and `r_max` (default 2.5 to 4.0).
//! Zooming into a narrow band such as `3.82 3.86` shows the period-3 window
//! and the negative dip it produces in λ.

use std::error::Error;

use feigen_core::ParameterSweep;
use feigen_observers::{PlotObserver, ShowConfig, show_all};
use feigen_solvers::{bifurcation, lyapunov};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1).map(|arg| arg.parse::<f64>());
    let r_min = args.next().transpose()?.unwrap_or(2.5);
    let r_max = args.next().transpose()?.unwrap_or(4.0);

    let sweep = ParameterSweep::linspace(r_min, r_max, 800)?;

    let mut diagram = PlotObserver::points("x");
    bifurcation::solve(&sweep, &bifurcation::Config::new(600, 400, 0.5)?, &mut diagram);

    let mut profile = PlotObserver::line("λ");
    lyapunov::solve(&sweep, &lyapunov::Config::new(2000, 0.5)?, &mut profile);

    show_all(
        vec![diagram, profile],
        ShowConfig::new()
            .title(format!("Logistic map, r ∈ [{r_min}, {r_max}]"))
            .legend()
            .zero_line(),
    )?;

    Ok(())
}
