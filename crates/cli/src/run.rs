//! Sweep orchestration.
//!
//! Runs the two solvers over the same sweep, one after the other, and hands
//! both ordered result vectors to the exporter. The solvers share no state,
//! so the order in which they run has no effect on the output.

use std::{path::Path, time::Instant};

use feigen_core::{BifurcationPoint, LyapunovPoint};
use feigen_observers::LogProgress;
use feigen_solvers::{bifurcation, lyapunov};
use log::info;

use crate::{
    export::{self, ExportError},
    settings::RunPlan,
};

/// Number of progress lines logged per solver.
const PROGRESS_LINES: usize = 10;

/// Both result sequences of a run, in sweep order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub bifurcation: Vec<BifurcationPoint>,
    pub lyapunov: Vec<LyapunovPoint>,
}

impl Dataset {
    /// Writes both datasets as CSV.
    ///
    /// # Errors
    ///
    /// Returns the first export error. The bifurcation file is written first.
    pub fn export(
        &self,
        bifurcation_path: &Path,
        lyapunov_path: &Path,
    ) -> Result<(), ExportError> {
        export::write_bifurcation(bifurcation_path, &self.bifurcation)?;
        info!(
            "wrote {} bifurcation points to {}",
            self.bifurcation.len(),
            bifurcation_path.display()
        );

        export::write_lyapunov(lyapunov_path, &self.lyapunov)?;
        info!(
            "wrote {} lyapunov exponents to {}",
            self.lyapunov.len(),
            lyapunov_path.display()
        );

        Ok(())
    }
}

/// Computes the bifurcation diagram and Lyapunov profile for a validated plan.
#[must_use]
pub fn run(plan: &RunPlan) -> Dataset {
    let total = plan.sweep.len();
    let every = (total / PROGRESS_LINES).max(1);

    info!(
        "sweeping {total} values of r over [{}, {}]",
        plan.sweep.first(),
        plan.sweep.last()
    );

    let start = Instant::now();
    let progress = LogProgress::new("bifurcation", total, every);
    let bifurcation = bifurcation::solve(&plan.sweep, &plan.bifurcation, progress);
    info!(
        "bifurcation calculation time: {:.6} s ({} points)",
        start.elapsed().as_secs_f64(),
        bifurcation.points.len()
    );

    let start = Instant::now();
    let progress = LogProgress::new("lyapunov", total, every);
    let lyapunov = lyapunov::solve(&plan.sweep, &plan.lyapunov, progress);
    info!(
        "lyapunov calculation time: {:.6} s ({} exponents)",
        start.elapsed().as_secs_f64(),
        lyapunov.points.len()
    );

    Dataset {
        bifurcation: bifurcation.points,
        lyapunov: lyapunov.points,
    }
}
