//! Run settings: defaults, TOML file, command-line overrides, validation.
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults (the reference run: r ∈ [1, 4], 300 values,
//!    1000 generations, 500 transients, x0 = 0.5);
//! 2. a TOML file;
//! 3. command-line flags.
//!
//! Nothing is clamped. [`Settings::plan`] either returns a fully validated
//! [`RunPlan`] or a single [`ConfigError`] describing the first problem, and
//! no computation starts until it succeeds.

use std::{
    fs,
    path::{Path, PathBuf},
};

use feigen_core::{ParameterSweep, SweepError};
use feigen_solvers::{bifurcation, lyapunov};
use serde::Deserialize;
use thiserror::Error;

use crate::args::Args;

/// All options recognized by the command-line tool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub r_min: f64,
    pub r_max: f64,
    pub r_count: usize,

    /// Total iterations per r.
    pub generations: usize,

    /// Bifurcation burn-in. Must be less than `generations`.
    pub transients: usize,

    pub initial_x: f64,

    pub output_dir: PathBuf,
    pub bifurcation_file: String,
    pub lyapunov_file: String,

    pub lyapunov: LyapunovSettings,
}

/// Optional Lyapunov estimator strengthenings, off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LyapunovSettings {
    pub transients: usize,
    pub summation: SummationSetting,
}

/// Summation mode as spelled in settings files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummationSetting {
    #[default]
    Naive,
    Compensated,
}

impl From<SummationSetting> for lyapunov::Summation {
    fn from(setting: SummationSetting) -> Self {
        match setting {
            SummationSetting::Naive => Self::Naive,
            SummationSetting::Compensated => Self::Compensated,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            r_min: 1.0,
            r_max: 4.0,
            r_count: 300,
            generations: 1000,
            transients: 500,
            initial_x: 0.5,
            output_dir: PathBuf::from("data"),
            bifurcation_file: "bifurcation_data.csv".to_owned(),
            lyapunov_file: "lyapunov_data.csv".to_owned(),
            lyapunov: LyapunovSettings::default(),
        }
    }
}

/// Errors that can occur when reading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors that reject a configuration before any computation starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("generations must be at least 1")]
    Generations,

    #[error("invalid sweep: {0}")]
    Sweep(#[from] SweepError),

    #[error("invalid bifurcation settings: {0}")]
    Bifurcation(#[from] bifurcation::ConfigError),

    #[error("invalid lyapunov settings: {0}")]
    Lyapunov(#[from] lyapunov::ConfigError),

    #[error("{name} must be a file name, got an empty string")]
    EmptyFileName { name: &'static str },
}

/// A validated run: the sweep and both solver configs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub sweep: ParameterSweep,
    pub bifurcation: bifurcation::Config,
    pub lyapunov: lyapunov::Config,
}

impl Settings {
    /// Parses settings from TOML text, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text is malformed or names an unknown field.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Applies command-line overrides in place.
    pub fn apply(&mut self, args: &Args) {
        if let Some(r_min) = args.r_min {
            self.r_min = r_min;
        }
        if let Some(r_max) = args.r_max {
            self.r_max = r_max;
        }
        if let Some(r_count) = args.r_count {
            self.r_count = r_count;
        }
        if let Some(generations) = args.generations {
            self.generations = generations;
        }
        if let Some(transients) = args.transients {
            self.transients = transients;
        }
        if let Some(initial_x) = args.initial_x {
            self.initial_x = initial_x;
        }
        if let Some(output_dir) = &args.output_dir {
            self.output_dir.clone_from(output_dir);
        }
        if let Some(transients) = args.lyapunov_transients {
            self.lyapunov.transients = transients;
        }
        if let Some(summation) = args.summation {
            self.lyapunov.summation = summation;
        }
    }

    /// Validates the settings and builds the run plan.
    ///
    /// # Errors
    ///
    /// Returns the first problem found. Nothing is adjusted to make an invalid
    /// configuration pass.
    pub fn plan(&self) -> Result<RunPlan, ConfigError> {
        if self.generations == 0 {
            return Err(ConfigError::Generations);
        }
        if self.bifurcation_file.is_empty() {
            return Err(ConfigError::EmptyFileName {
                name: "bifurcation_file",
            });
        }
        if self.lyapunov_file.is_empty() {
            return Err(ConfigError::EmptyFileName {
                name: "lyapunov_file",
            });
        }

        let bifurcation =
            bifurcation::Config::new(self.generations, self.transients, self.initial_x)?;
        let lyapunov = lyapunov::Config::new(self.generations, self.initial_x)?
            .with_transients(self.lyapunov.transients)?
            .with_summation(self.lyapunov.summation.into());
        let sweep = ParameterSweep::linspace(self.r_min, self.r_max, self.r_count)?;

        Ok(RunPlan {
            sweep,
            bifurcation,
            lyapunov,
        })
    }

    /// Returns the bifurcation CSV path.
    #[must_use]
    pub fn bifurcation_path(&self) -> PathBuf {
        self.output_dir.join(&self.bifurcation_file)
    }

    /// Returns the Lyapunov CSV path.
    #[must_use]
    pub fn lyapunov_path(&self) -> PathBuf {
        self.output_dir.join(&self.lyapunov_file)
    }
}
