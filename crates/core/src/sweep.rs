use std::ops::Deref;

use thiserror::Error;

/// An ordered, finite, non-decreasing sequence of control parameters.
///
/// A sweep is validated on construction and immutable afterward, so solvers
/// can iterate it without rechecking its invariants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterSweep {
    values: Vec<f64>,
}

/// Errors that can occur when building a [`ParameterSweep`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SweepError {
    #[error("sweep must contain at least one value")]
    Empty,

    #[error("evenly spaced sweep needs at least 2 values, got {0}")]
    TooFewValues(usize),

    #[error("sweep bounds must be finite (r_min = {r_min}, r_max = {r_max})")]
    NonFiniteBounds { r_min: f64, r_max: f64 },

    #[error("r_min ({r_min}) must not exceed r_max ({r_max})")]
    ReversedBounds { r_min: f64, r_max: f64 },

    #[error("sweep value at index {index} is not finite")]
    NonFinite { index: usize },

    #[error("sweep decreases at index {index} ({prev} > {next})")]
    Decreasing { index: usize, prev: f64, next: f64 },
}

impl ParameterSweep {
    /// Creates `count` evenly spaced values over `[r_min, r_max]`.
    ///
    /// Both endpoints are included, and the last value is exactly `r_max`.
    ///
    /// # Errors
    ///
    /// Returns an error if `count < 2`, if either bound is not finite, or if
    /// `r_min > r_max`.
    pub fn linspace(r_min: f64, r_max: f64, count: usize) -> Result<Self, SweepError> {
        if count < 2 {
            return Err(SweepError::TooFewValues(count));
        }
        if !r_min.is_finite() || !r_max.is_finite() {
            return Err(SweepError::NonFiniteBounds { r_min, r_max });
        }
        if r_min > r_max {
            return Err(SweepError::ReversedBounds { r_min, r_max });
        }

        let last = count - 1;
        let span = r_max - r_min;
        #[allow(clippy::cast_precision_loss)]
        let increment = span / last as f64;

        // A span wider than f64::MAX overflows, so fall back to a weighted
        // sum of the bounds, which stays finite and monotone.
        #[allow(clippy::cast_precision_loss)]
        let values = (0..count)
            .map(|i| {
                if i == 0 {
                    r_min
                } else if i == last {
                    r_max
                } else if span.is_finite() {
                    r_min + i as f64 * increment
                } else {
                    let t = i as f64 / last as f64;
                    r_min * (1.0 - t) + r_max * t
                }
            })
            .collect();

        Ok(Self { values })
    }

    /// Wraps an explicit list of values.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty, contains a non-finite value, or
    /// decreases anywhere.
    pub fn from_values(values: Vec<f64>) -> Result<Self, SweepError> {
        if values.is_empty() {
            return Err(SweepError::Empty);
        }
        if let Some(index) = values.iter().position(|r| !r.is_finite()) {
            return Err(SweepError::NonFinite { index });
        }
        if let Some(index) = values.windows(2).position(|w| w[0] > w[1]) {
            return Err(SweepError::Decreasing {
                index: index + 1,
                prev: values[index],
                next: values[index + 1],
            });
        }

        Ok(Self { values })
    }

    /// Returns the sweep values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns the first value.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    /// Returns the last value.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}

impl Deref for ParameterSweep {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for ParameterSweep {
    type Error = SweepError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl<'a> IntoIterator for &'a ParameterSweep {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
