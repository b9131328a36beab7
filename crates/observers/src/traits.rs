//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across the bifurcation and Lyapunov solvers.
//!
//! # Event traits
//!
//! - [`HasParameter`] — events that belong to one r of a sweep
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use feigen_core::Observer;
//! use feigen_observers::traits::{CanStopEarly, HasParameter};
//!
//! /// Stops a sweep once it passes a given r.
//! struct StopPast {
//!     r_max: f64,
//! }
//!
//! impl<E: HasParameter, A: CanStopEarly> Observer<E, A> for StopPast {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.r() >= self.r_max).then(A::stop_early)
//!     }
//! }
//! ```

use feigen_solvers::{bifurcation, lyapunov};

/// An event emitted for one r of a sweep.
pub trait HasParameter {
    /// Returns the position of this r in the sweep.
    fn index(&self) -> usize;

    /// Returns the control parameter.
    fn r(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasParameter impls ---

impl HasParameter for bifurcation::Event<'_> {
    fn index(&self) -> usize {
        self.index
    }

    fn r(&self) -> f64 {
        self.r
    }
}

impl HasParameter for lyapunov::Event {
    fn index(&self) -> usize {
        self.index
    }

    fn r(&self) -> f64 {
        self.point.r
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bifurcation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for lyapunov::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
