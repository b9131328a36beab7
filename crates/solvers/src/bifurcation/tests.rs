use approx::assert_abs_diff_eq;

use feigen_core::{ParameterSweep, advance};

use super::{Action, Config, ConfigError, Event, Status, sample, solve, solve_unobserved};

fn sweep(values: &[f64]) -> ParameterSweep {
    ParameterSweep::from_values(values.to_vec()).unwrap()
}

#[test]
fn fixed_point_regime_converges() {
    // x* = 1 − 1/r = 0.6 for r = 2.5.
    let points = sample(&sweep(&[2.5]), 200, 50, 0.5);

    assert_eq!(points.len(), 150);
    for point in &points {
        assert_eq!(point.r, 2.5);
        assert_abs_diff_eq!(point.x, 0.6, epsilon = 1e-9);
    }
}

#[test]
fn period_four_orbit() {
    let points = sample(&sweep(&[3.5]), 1000, 500, 0.5);

    assert_eq!(points.len(), 500);

    let mut distinct: Vec<f64> = Vec::new();
    for point in &points {
        if !distinct.iter().any(|x| (x - point.x).abs() < 1e-6) {
            distinct.push(point.x);
        }
    }
    assert_eq!(distinct.len(), 4);

    for value in &distinct {
        let count = points
            .iter()
            .filter(|p| (p.x - value).abs() < 1e-6)
            .count();
        assert_eq!(count, 125);
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    let sweep = ParameterSweep::linspace(2.8, 4.0, 25).unwrap();

    let first = sample(&sweep, 400, 100, 0.5);
    let second = sample(&sweep, 400, 100, 0.5);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.r.to_bits(), b.r.to_bits());
        assert_eq!(a.x.to_bits(), b.x.to_bits());
    }
}

#[test]
fn zero_transients_keeps_every_step() {
    let points = sample(&sweep(&[3.2]), 10, 0, 0.5);

    assert_eq!(points.len(), 10);

    // The first observed point is one step past the seed, not the seed itself.
    assert_eq!(points[0].x, advance(0.5, 3.2));
}

#[test]
fn one_observed_point() {
    let points = sample(&sweep(&[3.2, 3.7]), 10, 9, 0.5);

    assert_eq!(points.len(), 2);

    let mut x = 0.5;
    for _ in 0..10 {
        x = advance(x, 3.7);
    }
    assert_eq!(points[1].x, x);
}

#[test]
fn transients_are_never_emitted() {
    let points = sample(&sweep(&[3.9]), 6, 3, 0.5);

    let mut x = 0.5;
    let mut expected = Vec::new();
    for step in 1..=6 {
        x = advance(x, 3.9);
        if step > 3 {
            expected.push(x);
        }
    }

    let observed: Vec<f64> = points.iter().map(|p| p.x).collect();
    assert_eq!(observed, expected);
}

#[test]
fn empty_observation_phase_emits_nothing() {
    let sweep = sweep(&[2.0, 3.0]);

    assert!(sample(&sweep, 100, 100, 0.5).is_empty());
    assert!(sample(&sweep, 10, 50, 0.5).is_empty());
    assert!(sample(&sweep, 0, 0, 0.5).is_empty());
}

#[test]
fn points_ordered_by_r_then_iteration() {
    let sweep = sweep(&[1.0, 2.0, 3.0, 4.0]);
    let points = sample(&sweep, 20, 15, 0.5);

    assert_eq!(points.len(), 20);
    for (chunk, &r) in points.chunks(5).zip(sweep.iter()) {
        assert!(chunk.iter().all(|p| p.r == r));
    }
}

#[test]
fn solve_matches_sample() {
    let sweep = ParameterSweep::linspace(1.0, 4.0, 30).unwrap();
    let config = Config::new(300, 200, 0.5).unwrap();

    let solution = solve_unobserved(&sweep, &config);

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.parameters, 30);
    assert_eq!(solution.points, sample(&sweep, 300, 200, 0.5));
}

#[test]
fn observer_sees_each_r_in_order() {
    let sweep = sweep(&[1.0, 2.0, 3.0]);
    let config = Config::new(10, 5, 0.5).unwrap();

    let mut seen = Vec::new();
    solve(&sweep, &config, |event: &Event<'_>| {
        seen.push((event.index, event.r, event.points.len()));
        None
    });

    assert_eq!(seen, vec![(0, 1.0, 5), (1, 2.0, 5), (2, 3.0, 5)]);
}

#[test]
fn event_points_are_that_r_orbit() {
    let sweep = ParameterSweep::linspace(2.8, 4.0, 64).unwrap();
    let config = Config::new(120, 100, 0.5).unwrap();
    let expected = sample(&sweep, 120, 100, 0.5);

    let mut offset = 0;
    let solution = solve(&sweep, &config, |event: &Event<'_>| {
        assert!(event.points.iter().all(|p| p.r == event.r));
        assert_eq!(event.points, &expected[offset..offset + 20]);
        offset += event.points.len();
        None
    });

    assert_eq!(offset, 64 * 20);
    assert_eq!(solution.points, expected);
}

#[test]
fn observer_can_stop_early() {
    let sweep = ParameterSweep::linspace(2.0, 4.0, 10).unwrap();
    let config = Config::new(20, 10, 0.5).unwrap();

    let solution = solve(&sweep, &config, |event: &Event<'_>| {
        (event.index == 3).then_some(Action::StopEarly)
    });

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.parameters, 4);
    assert_eq!(solution.points.len(), 40);
    assert_eq!(solution.points.last().unwrap().r, sweep[3]);
}

#[test]
fn config_rejects_transients_at_or_above_generations() {
    assert_eq!(
        Config::new(100, 100, 0.5),
        Err(ConfigError::Transients {
            generations: 100,
            transients: 100
        })
    );
    assert!(Config::new(100, 200, 0.5).is_err());
    assert!(Config::new(0, 0, 0.5).is_err());
}

#[test]
fn config_accepts_boundary_transients() {
    let config = Config::new(100, 99, 0.5).unwrap();
    assert_eq!(config.observed(), 1);

    let config = Config::new(100, 0, 0.5).unwrap();
    assert_eq!(config.observed(), 100);
}

#[test]
fn config_rejects_non_finite_seed() {
    assert!(matches!(
        Config::new(100, 10, f64::NAN),
        Err(ConfigError::InitialX(_))
    ));
}

#[test]
fn default_config_matches_reference_run() {
    let config = Config::default();
    assert_eq!(config.generations(), 1000);
    assert_eq!(config.transients(), 500);
    assert_eq!(config.initial_x(), 0.5);
}
