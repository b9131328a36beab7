use feigen_core::Observer;
use log::{Level, log};

use crate::traits::HasParameter;

/// An observer that logs sweep progress.
///
/// Logs one line every `every` parameters and always logs the last one.
/// Never returns an action, so it can wrap any solver.
#[derive(Debug, Clone)]
pub struct LogProgress {
    label: String,
    total: usize,
    every: usize,
    level: Level,
    logged: usize,
}

impl LogProgress {
    /// Creates a progress logger for a sweep of `total` parameters.
    ///
    /// `every` is clamped to at least 1.
    pub fn new(label: impl Into<String>, total: usize, every: usize) -> Self {
        Self {
            label: label.into(),
            total,
            every: every.max(1),
            level: Level::Debug,
            logged: 0,
        }
    }

    /// Sets the log level used for progress lines (default `Debug`).
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns how many progress lines have been written.
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }

    fn should_log(&self, index: usize) -> bool {
        let done = index + 1;
        done % self.every == 0 || done == self.total
    }
}

impl<E, A> Observer<E, A> for LogProgress
where
    E: HasParameter,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let index = event.index();
        if self.should_log(index) {
            log!(
                self.level,
                "{}: {}/{} (r = {:.6})",
                self.label,
                index + 1,
                self.total,
                event.r()
            );
            self.logged += 1;
        }
        None
    }
}

/// Allows `&mut LogProgress` to be passed to solvers that take an observer by
/// value, so its counters can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut LogProgress
where
    E: HasParameter,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
