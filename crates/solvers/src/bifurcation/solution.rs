use feigen_core::BifurcationPoint;

/// Indicates how the sampler terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Sampled every r in the sweep.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a bifurcation sweep.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the sampler terminated.
    pub status: Status,

    /// Observed points, r-ascending then iteration-ascending.
    pub points: Vec<BifurcationPoint>,

    /// Number of r values whose points are included.
    pub parameters: usize,
}
