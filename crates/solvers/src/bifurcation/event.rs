use feigen_core::BifurcationPoint;

/// Event emitted by the bifurcation sampler once per r, in sweep order.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Position of this r in the sweep.
    pub index: usize,

    /// The control parameter.
    pub r: f64,

    /// Points observed for this r, in iteration order.
    pub points: &'a [BifurcationPoint],
}
