/// One observed state of the logistic map after transients.
///
/// The points emitted for a single `r` approximate the attractor at that `r`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BifurcationPoint {
    /// Control parameter.
    pub r: f64,

    /// Observed state.
    pub x: f64,
}

impl BifurcationPoint {
    #[must_use]
    pub fn new(r: f64, x: f64) -> Self {
        Self { r, x }
    }
}

/// The Lyapunov exponent estimate for one control parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LyapunovPoint {
    /// Control parameter.
    pub r: f64,

    /// Time-averaged log growth rate.
    pub lambda: f64,
}

/// Qualitative dynamics implied by the sign of a Lyapunov exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `λ < 0`: a stable fixed point or periodic orbit.
    Stable,

    /// `λ ≈ 0`: at or near a bifurcation.
    Marginal,

    /// `λ > 0`: sensitive dependence on initial conditions.
    Chaotic,
}

impl LyapunovPoint {
    #[must_use]
    pub fn new(r: f64, lambda: f64) -> Self {
        Self { r, lambda }
    }

    /// Classifies the exponent, treating `|λ| ≤ tolerance` as marginal.
    ///
    /// Returns `None` if the exponent is `NaN`.
    #[must_use]
    pub fn regime(&self, tolerance: f64) -> Option<Regime> {
        if self.lambda.is_nan() {
            None
        } else if self.lambda.abs() <= tolerance {
            Some(Regime::Marginal)
        } else if self.lambda < 0.0 {
            Some(Regime::Stable)
        } else {
            Some(Regime::Chaotic)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regime_follows_sign() {
        assert_eq!(
            LyapunovPoint::new(1.5, -0.69).regime(0.01),
            Some(Regime::Stable)
        );
        assert_eq!(
            LyapunovPoint::new(3.9, 0.49).regime(0.01),
            Some(Regime::Chaotic)
        );
        assert_eq!(
            LyapunovPoint::new(3.0, -0.004).regime(0.01),
            Some(Regime::Marginal)
        );
    }

    #[test]
    fn regime_of_nan_is_none() {
        assert_eq!(LyapunovPoint::new(2.0, f64::NAN).regime(0.01), None);
    }

    #[test]
    fn negative_infinity_is_stable() {
        // Superstable orbits can drive the exponent toward −∞.
        assert_eq!(
            LyapunovPoint::new(2.0, f64::NEG_INFINITY).regime(0.01),
            Some(Regime::Stable)
        );
    }
}
