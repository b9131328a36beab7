//! Lyapunov exponent estimation.
//!
//! # Algorithm
//!
//! For each r in the sweep, a fresh trajectory is seeded at `x0` and advanced
//! `generations` times. After every step, the derivative magnitude at the new
//! state, `d = |r·(1 − 2x)|`, contributes `ln d` to a running sum. The
//! exponent is
//!
//! ```text
//! λ = sum / generations
//! ```
//!
//! - `λ < 0`: stable fixed point or periodic orbit
//! - `λ ≈ 0`: bifurcation boundary
//! - `λ > 0`: chaos
//!
//! # Zero derivatives
//!
//! When the orbit lands exactly on `x = 0.5`, `d = 0` and `ln d = −∞`. That
//! term is skipped rather than clamped, so a single exact hit cannot poison
//! the average. The divisor stays the full step count even when terms are
//! skipped.
//!
//! # Transients
//!
//! Unlike the bifurcation sampler, the estimator accumulates from the first
//! step. The transient's contribution is diluted by `1 / generations`, so the
//! average converges regardless. [`Config::with_transients`] can opt in to a
//! burn-in, after which the average is taken over the remaining steps.
//!
//! # Observer Events
//!
//! [`solve`] emits one [`Event`] per r, in sweep order. Observers can return
//! [`Action::StopEarly`] to end the sweep after the current r.

mod action;
mod config;
mod event;
mod solution;
mod summation;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use solution::{Solution, Status};
pub use summation::Summation;

use feigen_core::{Logistic, LyapunovPoint, Observer, ParameterSweep};
use log::debug;

use crate::sweep;

/// Estimates the Lyapunov exponent at every r in the sweep.
///
/// Returns exactly one point per r, in sweep order. With `generations == 0`
/// there are no terms to average and every exponent is `NaN`.
#[must_use]
pub fn estimate(sweep: &ParameterSweep, generations: usize, x0: f64) -> Vec<LyapunovPoint> {
    sweep::map(sweep, |r| {
        LyapunovPoint::new(r, exponent(r, generations, 0, x0, Summation::Naive))
    })
}

/// Estimates the Lyapunov exponent over a sweep with a validated config.
///
/// The observer receives an [`Event`] for each r.
/// See the [module docs](self) for details on event timing and observer actions.
pub fn solve<Obs>(sweep: &ParameterSweep, config: &Config, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let estimates = sweep::map(sweep, |r| {
        let lambda = exponent(
            r,
            config.generations(),
            config.transients(),
            config.initial_x(),
            config.summation(),
        );
        LyapunovPoint::new(r, lambda)
    });

    let mut points = Vec::with_capacity(estimates.len());

    for (index, point) in estimates.into_iter().enumerate() {
        points.push(point);

        if let Some(Action::StopEarly) = observer.observe(&Event { index, point }) {
            debug!("lyapunov: stopped by observer at r = {} (index {index})", point.r);
            return Solution {
                status: Status::StoppedByObserver,
                points,
            };
        }
    }

    debug!("lyapunov: estimated {} exponents", points.len());

    Solution {
        status: Status::Complete,
        points,
    }
}

/// Estimates the Lyapunov exponent over a sweep without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
#[must_use]
pub fn solve_unobserved(sweep: &ParameterSweep, config: &Config) -> Solution {
    solve(sweep, config, ())
}

/// Returns the time-averaged log derivative along one orbit.
#[allow(clippy::float_cmp)]
fn exponent(r: f64, generations: usize, transients: usize, x0: f64, summation: Summation) -> f64 {
    let map = Logistic::new(r);
    let mut trajectory = map.trajectory(x0);
    trajectory.burn(transients);

    let steps = generations.saturating_sub(transients);
    let mut sum = summation.accumulator();

    for x in trajectory.take(steps) {
        let d = map.derivative(x).abs();
        if d != 0.0 {
            sum.add(d.ln());
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let steps = steps as f64;
    sum.total() / steps
}
