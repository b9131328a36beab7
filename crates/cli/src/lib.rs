//! The `feigen` command-line tool.
//!
//! Builds a parameter sweep from layered settings, computes the bifurcation
//! diagram and the Lyapunov profile, and writes both as CSV.
//!
//! - [`settings`] — defaults, TOML file, overrides, validation into a [`RunPlan`]
//! - [`run`] — runs both solvers over the sweep
//! - [`export`] — writes the two `r,x` CSV files
//!
//! [`RunPlan`]: settings::RunPlan

pub mod args;
pub mod export;
pub mod run;
pub mod settings;

pub use args::Args;
pub use run::{Dataset, run};
pub use settings::{ConfigError, RunPlan, Settings};
