use std::fs;

use approx::assert_abs_diff_eq;

use feigen_cli::{Settings, run};

fn read_rows(text: &str) -> Vec<(f64, f64)> {
    text.lines()
        .skip(1)
        .map(|line| {
            let (r, x) = line.split_once(',').unwrap();
            (r.parse().unwrap(), x.parse().unwrap())
        })
        .collect()
}

#[test]
fn exports_both_datasets_in_sweep_order() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        r_count: 16,
        generations: 300,
        transients: 200,
        output_dir: dir.path().join("nested").join("data"),
        ..Settings::default()
    };
    let plan = settings.plan().unwrap();

    let dataset = run(&plan);
    dataset
        .export(&settings.bifurcation_path(), &settings.lyapunov_path())
        .unwrap();

    let bifurcation = fs::read_to_string(settings.bifurcation_path()).unwrap();
    let lyapunov = fs::read_to_string(settings.lyapunov_path()).unwrap();

    assert!(bifurcation.starts_with("r,x\n"));
    assert!(lyapunov.starts_with("r,x\n"));

    let bifurcation_rows = read_rows(&bifurcation);
    let lyapunov_rows = read_rows(&lyapunov);
    assert_eq!(bifurcation_rows.len(), 16 * 100);
    assert_eq!(lyapunov_rows.len(), 16);

    // Lossless: the file holds exactly the computed values.
    for (row, point) in lyapunov_rows.iter().zip(&dataset.lyapunov) {
        assert_eq!(row.0.to_bits(), point.r.to_bits());
        assert_eq!(row.1.to_bits(), point.lambda.to_bits());
    }

    let rs: Vec<f64> = lyapunov_rows.iter().map(|row| row.0).collect();
    assert!(rs.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(rs.first(), Some(&1.0));
    assert_eq!(rs.last(), Some(&4.0));
}

#[test]
fn stable_region_exports_the_fixed_point() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        r_min: 2.5,
        r_max: 2.5,
        r_count: 2,
        generations: 100,
        transients: 50,
        output_dir: dir.path().to_owned(),
        ..Settings::default()
    };

    let dataset = run(&settings.plan().unwrap());
    dataset
        .export(&settings.bifurcation_path(), &settings.lyapunov_path())
        .unwrap();

    let rows = read_rows(&fs::read_to_string(settings.bifurcation_path()).unwrap());
    assert_eq!(rows.len(), 100);
    for (r, x) in rows {
        assert_eq!(r, 2.5);
        assert_abs_diff_eq!(x, 0.6, epsilon = 1e-9);
    }
}

#[test]
fn export_into_a_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let settings = Settings {
        r_count: 2,
        output_dir: blocker.join("data"),
        ..Settings::default()
    };
    let dataset = run(&settings.plan().unwrap());

    let err = dataset
        .export(&settings.bifurcation_path(), &settings.lyapunov_path())
        .unwrap_err();
    assert!(err.to_string().contains("failed to create output directory"));
}
