//! The logistic recurrence and a trajectory that steps it.
//!
//! Every function here is defined for any real `x` and `r`, but the system is
//! only numerically meaningful for `x ∈ [0, 1]` and `r ∈ [0, 4]`. Outside that
//! range iterates run off to −∞ and eventually become `NaN`. Nothing is
//! guarded: bounding the sweep is the caller's job, and divergence is
//! sometimes exactly the behavior being studied.

/// Returns the next state of the logistic map, `r·x·(1−x)`.
#[inline]
#[must_use]
pub fn advance(x: f64, r: f64) -> f64 {
    r * x * (1.0 - x)
}

/// Returns the analytic derivative of the logistic map at `x`, `r·(1−2x)`.
#[inline]
#[must_use]
pub fn derivative(x: f64, r: f64) -> f64 {
    r * (1.0 - 2.0 * x)
}

/// The logistic map for one fixed control parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logistic {
    r: f64,
}

impl Logistic {
    /// Creates the map `x → r·x·(1−x)`.
    #[must_use]
    pub fn new(r: f64) -> Self {
        Self { r }
    }

    /// Returns the control parameter.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Returns the next state after `x`.
    #[inline]
    #[must_use]
    pub fn advance(&self, x: f64) -> f64 {
        advance(x, self.r)
    }

    /// Returns the derivative of the map at `x`.
    #[inline]
    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        derivative(x, self.r)
    }

    /// Starts a trajectory at `x0`.
    #[must_use]
    pub fn trajectory(&self, x0: f64) -> Trajectory {
        Trajectory::new(*self, x0)
    }
}

/// The evolving state of the logistic map for a single `r`.
///
/// A trajectory owns its state outright. Each r in a sweep gets its own
/// trajectory, so there is nothing to share or lock between r values.
///
/// As an [`Iterator`], it advances the state and yields the new value on
/// every call to `next`, so the first item is `advance(x0)`, not `x0`.
/// The iterator never ends.
#[derive(Debug, Clone)]
pub struct Trajectory {
    map: Logistic,
    x: f64,
}

impl Trajectory {
    /// Creates a trajectory of `map` seeded at `x0`.
    #[must_use]
    pub fn new(map: Logistic, x0: f64) -> Self {
        Self { map, x: x0 }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> f64 {
        self.x
    }

    /// Returns the map being iterated.
    #[must_use]
    pub fn map(&self) -> Logistic {
        self.map
    }

    /// Advances the state one step in place and returns the new state.
    #[inline]
    pub fn step(&mut self) -> f64 {
        self.x = self.map.advance(self.x);
        self.x
    }

    /// Advances `steps` times, discarding every intermediate state.
    pub fn burn(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }
}

impl Iterator for Trajectory {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.step())
    }
}
