/// Control actions supported by the bifurcation sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current r and return the points collected so far.
    StopEarly,
}
