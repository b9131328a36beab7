//! Core types for the Feigen logistic map diagnostics.
//!
//! This crate defines the shared building blocks that solvers, observers, and
//! the command-line tool build on:
//!
//! - [`advance`], [`derivative`], [`Logistic`], [`Trajectory`] — the logistic
//!   recurrence `x → r·x·(1−x)` and a per-r state that steps it
//! - [`ParameterSweep`] — an ordered, validated sequence of control parameters
//! - [`BifurcationPoint`], [`LyapunovPoint`] — immutable output records
//! - [`Observer`] — receives solver events and optionally returns control actions

mod logistic;
mod observer;
mod point;
mod sweep;

pub use logistic::{Logistic, Trajectory, advance, derivative};
pub use observer::Observer;
pub use point::{BifurcationPoint, LyapunovPoint, Regime};
pub use sweep::{ParameterSweep, SweepError};
