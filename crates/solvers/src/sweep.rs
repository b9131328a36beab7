//! Per-r mapping over a parameter sweep.
//!
//! [`map`] and [`flat_map`] are the only places the solvers touch threads.
//! With the `parallel` feature they use rayon, whose `collect` into a `Vec`
//! keeps sweep order, so both builds return the same vector. Run the tests
//! with `--no-default-features` to cover the serial build.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use feigen_core::ParameterSweep;

/// Applies `f` to every r in the sweep and returns the results in sweep order.
pub fn map<T, F>(sweep: &ParameterSweep, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(f64) -> T + Sync,
{
    #[cfg(feature = "parallel")]
    {
        sweep.as_slice().par_iter().map(|&r| f(r)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        sweep.as_slice().iter().map(|&r| f(r)).collect()
    }
}

/// Applies `f` to every r in the sweep and concatenates the yielded items in
/// sweep order.
///
/// Each r's items are written straight into the output, with no intermediate
/// per-r vectors.
pub fn flat_map<T, I, F>(sweep: &ParameterSweep, f: F) -> Vec<T>
where
    T: Send,
    I: IntoIterator<Item = T>,
    F: Fn(f64) -> I + Sync,
{
    #[cfg(feature = "parallel")]
    {
        sweep.as_slice().par_iter().flat_map_iter(|&r| f(r)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        sweep.as_slice().iter().flat_map(|&r| f(r)).collect()
    }
}
