//! Sweep solvers for the logistic map.
//!
//! Each solver maps a [`ParameterSweep`] to an ordered collection of output
//! records, one r at a time, with no state shared between r values:
//!
//! - [`bifurcation`] — discards transients, then records every visited state
//! - [`lyapunov`] — averages `ln|f'(x)|` along the orbit into one exponent per r
//!
//! The two solvers deliberately treat transients differently. The bifurcation
//! sampler must never leak a transient state into its output, while the
//! Lyapunov estimator accumulates from the first step by default.
//!
//! # Features
//!
//! - `parallel` (default) — distributes per-r work across a rayon thread
//!   pool. Output order and values are identical with or without it.
//!
//! [`ParameterSweep`]: feigen_core::ParameterSweep

pub mod bifurcation;
pub mod lyapunov;
pub mod sweep;
