/// Control actions supported by the Lyapunov estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current r and return the exponents computed so far.
    StopEarly,
}
