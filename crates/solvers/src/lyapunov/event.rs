use feigen_core::LyapunovPoint;

/// Event emitted by the Lyapunov estimator once per r, in sweep order.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Position of this r in the sweep.
    pub index: usize,

    /// The estimated exponent for this r.
    pub point: LyapunovPoint,
}
