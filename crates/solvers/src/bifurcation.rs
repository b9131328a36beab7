//! Bifurcation diagram sampling.
//!
//! # Algorithm
//!
//! For each r in the sweep, a fresh trajectory is seeded at `x0` and:
//!
//! 1. advanced `transients` times, discarding every state;
//! 2. advanced `generations − transients` more times, emitting `(r, x)` after
//!    each step.
//!
//! The discarded steps let the orbit settle onto its attractor. Emitting even
//! one of them smears the diagram near bifurcation boundaries, where
//! transients decay slowly.
//!
//! Points come out r-ascending (sweep order), then iteration-ascending.
//! Nothing is deduplicated or binned: at a stable fixed point every point for
//! that r collapses to the same x, and at chaotic r they scatter across the
//! attractor.
//!
//! # Observer Events
//!
//! [`solve`] emits one [`Event`] per r, in sweep order, after that r's points
//! are computed. Observers can return [`Action::StopEarly`] to end the sweep;
//! the points of the r that triggered the stop are kept.

mod action;
mod config;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use solution::{Solution, Status};

use feigen_core::{BifurcationPoint, Logistic, Observer, ParameterSweep};
use log::debug;

use crate::sweep;

/// Samples the bifurcation diagram over a sweep.
///
/// If `generations <= transients` the observation phase is empty, so no
/// points are emitted for any r. This is not an error.
#[must_use]
pub fn sample(
    sweep: &ParameterSweep,
    generations: usize,
    transients: usize,
    x0: f64,
) -> Vec<BifurcationPoint> {
    sweep::flat_map(sweep, |r| orbit(r, generations, transients, x0))
}

/// Samples the bifurcation diagram over a sweep with a validated config.
///
/// The observer receives an [`Event`] for each r.
/// See the [module docs](self) for details on event timing and observer actions.
pub fn solve<Obs>(sweep: &ParameterSweep, config: &Config, mut observer: Obs) -> Solution
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut points = sweep::flat_map(sweep, |r| {
        orbit(r, config.generations(), config.transients(), config.initial_x())
    });

    // Every r yields exactly `observed` points, and a valid config keeps that
    // at least one.
    let observed = config.observed();

    let stopped_at = sweep
        .iter()
        .zip(points.chunks(observed))
        .enumerate()
        .find_map(|(index, (&r, orbit))| {
            let event = Event {
                index,
                r,
                points: orbit,
            };
            matches!(observer.observe(&event), Some(Action::StopEarly)).then_some((index, r))
        });

    if let Some((index, r)) = stopped_at {
        debug!("bifurcation: stopped by observer at r = {r} (index {index})");
        let parameters = index + 1;
        points.truncate(parameters * observed);
        return Solution {
            status: Status::StoppedByObserver,
            points,
            parameters,
        };
    }

    debug!(
        "bifurcation: sampled {} points over {} parameters",
        points.len(),
        sweep.len()
    );

    Solution {
        status: Status::Complete,
        points,
        parameters: sweep.len(),
    }
}

/// Samples the bifurcation diagram without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
#[must_use]
pub fn solve_unobserved(sweep: &ParameterSweep, config: &Config) -> Solution {
    solve(sweep, config, ())
}

/// Returns the observed points of a single r.
fn orbit(
    r: f64,
    generations: usize,
    transients: usize,
    x0: f64,
) -> impl Iterator<Item = BifurcationPoint> {
    let observed = generations.saturating_sub(transients);

    let mut trajectory = Logistic::new(r).trajectory(x0);
    if observed > 0 {
        trajectory.burn(transients);
    }

    trajectory
        .take(observed)
        .map(move |x| BifurcationPoint::new(r, x))
}
