use thiserror::Error;

use super::Summation;

/// Configuration for the Lyapunov estimator.
///
/// Construct with [`Config::new`] and chain the optional builder methods.
/// The defaults (no transients, naive summation) reproduce the reference
/// output exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    generations: usize,
    transients: usize,
    initial_x: f64,
    summation: Summation,
}

/// Errors that can occur when validating a Lyapunov estimator config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("generations must be at least 1")]
    Generations,

    #[error("transients ({transients}) must be less than generations ({generations})")]
    Transients {
        generations: usize,
        transients: usize,
    },

    #[error("initial_x must be finite, got {0}")]
    InitialX(f64),
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1000, 0.5).unwrap()
    }
}

impl Config {
    /// Creates a new config that accumulates over all `generations` steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `generations` is zero or `initial_x` is not finite.
    pub fn new(generations: usize, initial_x: f64) -> Result<Self, ConfigError> {
        if generations == 0 {
            return Err(ConfigError::Generations);
        }
        if !initial_x.is_finite() {
            return Err(ConfigError::InitialX(initial_x));
        }

        Ok(Self {
            generations,
            transients: 0,
            initial_x,
            summation: Summation::Naive,
        })
    }

    /// Discards the first `transients` steps before accumulating.
    ///
    /// The exponent is then averaged over the `generations − transients`
    /// accumulated steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `transients >= generations`.
    pub fn with_transients(mut self, transients: usize) -> Result<Self, ConfigError> {
        if transients >= self.generations {
            return Err(ConfigError::Transients {
                generations: self.generations,
                transients,
            });
        }
        self.transients = transients;
        Ok(self)
    }

    /// Sets how log-derivative terms are summed.
    #[must_use]
    pub fn with_summation(mut self, summation: Summation) -> Self {
        self.summation = summation;
        self
    }

    /// Returns the total number of steps per r.
    #[must_use]
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Returns the number of discarded steps per r.
    #[must_use]
    pub fn transients(&self) -> usize {
        self.transients
    }

    /// Returns the seed state.
    #[must_use]
    pub fn initial_x(&self) -> f64 {
        self.initial_x
    }

    /// Returns the summation mode.
    #[must_use]
    pub fn summation(&self) -> Summation {
        self.summation
    }
}
