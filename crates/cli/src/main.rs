use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use feigen_cli::{Args, Settings, run};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.apply(&args);

    let plan = settings.plan().context("invalid configuration")?;

    if args.dry_run {
        println!("{settings:#?}");
        return Ok(());
    }

    let dataset = run(&plan);

    let bifurcation_path = settings.bifurcation_path();
    let lyapunov_path = settings.lyapunov_path();
    dataset
        .export(&bifurcation_path, &lyapunov_path)
        .context("failed to export dataset")?;

    if args.plot {
        plot(&dataset)?;
    }

    info!("done");
    Ok(())
}

#[cfg(not(feature = "plot"))]
#[allow(clippy::unnecessary_wraps)]
fn plot(_dataset: &feigen_cli::Dataset) -> Result<()> {
    log::warn!("--plot ignored: built without the `plot` feature");
    Ok(())
}

#[cfg(feature = "plot")]
fn plot(dataset: &feigen_cli::Dataset) -> Result<()> {
    use feigen_observers::{PlotObserver, ShowConfig, show_all};

    let mut diagram = PlotObserver::points("x");
    for point in &dataset.bifurcation {
        diagram.record(point.r, point.x);
    }

    let mut profile = PlotObserver::line("λ");
    for point in &dataset.lyapunov {
        profile.record(point.r, point.lambda);
    }

    show_all(
        vec![diagram, profile],
        ShowConfig::new()
            .title("Bifurcation diagram and Lyapunov exponents")
            .legend()
            .zero_line(),
    )
    .map_err(|err| anyhow::anyhow!("failed to open plot window: {err}"))
}
