/// How log-derivative terms are added up along an orbit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Summation {
    /// Plain left-to-right `f64` addition.
    ///
    /// Reproduces the reference output bit for bit, and is accurate enough
    /// for horizons in the low thousands.
    #[default]
    Naive,

    /// Neumaier's compensated summation.
    ///
    /// Tracks the low-order bits lost by each addition. Worth enabling for
    /// horizons beyond roughly a million steps.
    Compensated,
}

impl Summation {
    pub(crate) fn accumulator(self) -> Accumulator {
        Accumulator {
            mode: self,
            sum: 0.0,
            compensation: 0.0,
        }
    }
}

/// A running sum in the chosen [`Summation`] mode.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Accumulator {
    mode: Summation,
    sum: f64,
    compensation: f64,
}

impl Accumulator {
    #[inline]
    pub(crate) fn add(&mut self, term: f64) {
        match self.mode {
            Summation::Naive => self.sum += term,
            Summation::Compensated => {
                let total = self.sum + term;
                if self.sum.abs() >= term.abs() {
                    self.compensation += (self.sum - total) + term;
                } else {
                    self.compensation += (term - total) + self.sum;
                }
                self.sum = total;
            }
        }
    }

    pub(crate) fn total(&self) -> f64 {
        self.sum + self.compensation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(mode: Summation, terms: &[f64]) -> f64 {
        let mut acc = mode.accumulator();
        for &term in terms {
            acc.add(term);
        }
        acc.total()
    }

    #[test]
    fn naive_is_plain_addition() {
        let terms = [0.1, 0.2, 0.3];
        assert_eq!(sum(Summation::Naive, &terms), 0.1 + 0.2 + 0.3);
    }

    #[test]
    fn compensated_recovers_lost_bits() {
        // 1 + 1e-16 + ... rounds back to 1 without compensation.
        let mut terms = vec![1.0];
        terms.extend(std::iter::repeat_n(1e-16, 10_000));

        let naive = sum(Summation::Naive, &terms);
        let compensated = sum(Summation::Compensated, &terms);

        assert_eq!(naive, 1.0);
        assert!((compensated - (1.0 + 1e-12)).abs() < 1e-15);
    }

    #[test]
    fn compensated_handles_cancellation() {
        let terms = [1.0, 1e100, 1.0, -1e100];
        assert_eq!(sum(Summation::Compensated, &terms), 2.0);
        assert_eq!(sum(Summation::Naive, &terms), 0.0);
    }

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(sum(Summation::Naive, &[]), 0.0);
        assert_eq!(sum(Summation::Compensated, &[]), 0.0);
    }
}
