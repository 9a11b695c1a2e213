//! Cooperative progress reporting and cancellation.
//!
//! Long running operations poll [ProgressSink::is_cancelled] at the top of each major loop
//! iteration (per feature, per polygon part, per line segment) and stop with
//! [SplitError::Cancelled](crate::split::SplitError::Cancelled) when it returns true.

/// Receives progress reports and answers cancellation polls.
pub trait ProgressSink {
    /// Called with the percentage complete (`0..=100`) whenever it increases.
    fn report(&mut self, percent: u32, message: &str);

    /// Polled cooperatively, returning true aborts the running operation.
    fn is_cancelled(&self) -> bool;
}

impl<S> ProgressSink for &mut S
where
    S: ProgressSink + ?Sized,
{
    #[inline]
    fn report(&mut self, percent: u32, message: &str) {
        (**self).report(percent, message)
    }

    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// Sink that ignores reports and never cancels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    #[inline]
    fn report(&mut self, _percent: u32, _message: &str) {}

    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Sink that forwards reports to the `log` facade at info level and never cancels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&mut self, percent: u32, message: &str) {
        log::info!("{}% {}", percent, message);
    }

    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Turns step counts into percentages, only emitting a report when the rounded percentage
/// increases.
#[derive(Debug, Clone)]
pub(crate) struct ProgressTracker {
    total: usize,
    last_percent: u32,
}

impl ProgressTracker {
    pub(crate) fn new(total: usize) -> Self {
        ProgressTracker {
            total,
            last_percent: 0,
        }
    }

    /// `round(done * 100 / total)`.
    fn percent(&self, done: usize) -> u32 {
        if self.total == 0 {
            return 100;
        }

        let p = (done.saturating_mul(100) + self.total / 2) / self.total;
        p.min(100) as u32
    }

    /// Report `done` steps completed to `sink` if the percentage went up.
    pub(crate) fn step<S>(&mut self, done: usize, message: &str, sink: &mut S)
    where
        S: ProgressSink + ?Sized,
    {
        let percent = self.percent(done);
        if percent > self.last_percent {
            self.last_percent = percent;
            sink.report(percent, message);
        }
    }
}
