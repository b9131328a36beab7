use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::settings::SummationSetting;

/// Command-line arguments.
///
/// Every sweep option is optional here. Unset options fall back to the
/// settings file (if any), then to the built-in defaults.
#[derive(Debug, Parser)]
#[command(
    name = "feigen",
    about = "Bifurcation diagram and Lyapunov exponent profile of the logistic map",
    version
)]
pub struct Args {
    /// Settings file (TOML)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Lower end of the r sweep
    #[arg(long, value_name = "R", allow_negative_numbers = true)]
    pub r_min: Option<f64>,

    /// Upper end of the r sweep
    #[arg(long, value_name = "R", allow_negative_numbers = true)]
    pub r_max: Option<f64>,

    /// Number of evenly spaced r values (at least 2)
    #[arg(long, value_name = "N")]
    pub r_count: Option<usize>,

    /// Total iterations per r
    #[arg(long, short = 'g', value_name = "N")]
    pub generations: Option<usize>,

    /// Bifurcation burn-in iterations per r (less than generations)
    #[arg(long, short = 't', value_name = "N")]
    pub transients: Option<usize>,

    /// Seed state for every trajectory
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    pub initial_x: Option<f64>,

    /// Directory for the CSV output
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Lyapunov burn-in iterations per r (default 0)
    #[arg(long, value_name = "N")]
    pub lyapunov_transients: Option<usize>,

    /// Lyapunov summation mode
    #[arg(long, value_enum, value_name = "MODE")]
    pub summation: Option<SummationSetting>,

    /// Print the resolved settings and exit without computing
    #[arg(long, action = ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Open a window with both plots after exporting (needs the `plot` feature)
    #[arg(long, action = ArgAction::SetTrue)]
    pub plot: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_sweep_options() {
        let args = Args::parse_from([
            "feigen",
            "--r-min",
            "2.5",
            "--r-max",
            "4",
            "--r-count",
            "1000",
            "-g",
            "2000",
            "-t",
            "1000",
            "--summation",
            "compensated",
        ]);

        assert_eq!(args.r_min, Some(2.5));
        assert_eq!(args.r_max, Some(4.0));
        assert_eq!(args.r_count, Some(1000));
        assert_eq!(args.generations, Some(2000));
        assert_eq!(args.transients, Some(1000));
        assert_eq!(args.summation, Some(SummationSetting::Compensated));
        assert!(args.config.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn everything_is_optional() {
        let args = Args::parse_from(["feigen"]);
        assert!(args.r_min.is_none());
        assert!(args.generations.is_none());
        assert!(args.output_dir.is_none());
    }
}
