use thiserror::Error;

/// Configuration for the bifurcation sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    generations: usize,
    transients: usize,
    initial_x: f64,
}

/// Errors that can occur when validating a bifurcation sampler config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
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
        Self::new(1000, 500, 0.5).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `generations` is the total number of steps per r, of which the first
    /// `transients` are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if `transients >= generations` or `initial_x` is not
    /// finite.
    pub fn new(
        generations: usize,
        transients: usize,
        initial_x: f64,
    ) -> Result<Self, ConfigError> {
        if transients >= generations {
            return Err(ConfigError::Transients {
                generations,
                transients,
            });
        }
        if !initial_x.is_finite() {
            return Err(ConfigError::InitialX(initial_x));
        }

        Ok(Self {
            generations,
            transients,
            initial_x,
        })
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

    /// Returns the number of observed points per r.
    #[must_use]
    pub fn observed(&self) -> usize {
        self.generations - self.transients
    }

    /// Returns the seed state.
    #[must_use]
    pub fn initial_x(&self) -> f64 {
        self.initial_x
    }
}
