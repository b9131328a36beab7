use feigen_core::LyapunovPoint;

/// Indicates how the estimator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Estimated an exponent for every r in the sweep.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a Lyapunov sweep.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the estimator terminated.
    pub status: Status,

    /// One exponent per r, in sweep order.
    pub points: Vec<LyapunovPoint>,
}
