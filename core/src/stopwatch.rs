use core::time::Duration;
use web_time::Instant;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
enum StopwatchState {
    #[default]
    Unset,
    Running(Instant),
    Stopped(Duration),
}

/// Presentational elapsed-time counter for the guess phase.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Stopwatch {
    state: StopwatchState,
}

impl Stopwatch {
    pub const fn new() -> Self {
        Self {
            state: StopwatchState::Unset,
        }
    }

    /// Restarts counting from zero at `now`.
    pub fn start(&mut self, now: Instant) {
        self.state = StopwatchState::Running(now);
    }

    /// Freezes the elapsed value; stopping an idle stopwatch does nothing.
    pub fn stop(&mut self, now: Instant) {
        if let StopwatchState::Running(started_at) = self.state {
            self.state = StopwatchState::Stopped(now.saturating_duration_since(started_at));
        }
    }

    pub fn reset(&mut self) {
        self.state = StopwatchState::Unset;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, StopwatchState::Running(_))
    }

    /// Elapsed time as of `now`, or `None` while unset.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        match self.state {
            StopwatchState::Unset => None,
            StopwatchState::Running(started_at) => Some(now.saturating_duration_since(started_at)),
            StopwatchState::Stopped(elapsed) => Some(elapsed),
        }
    }

    pub fn elapsed_secs(&self, now: Instant) -> Option<u64> {
        self.elapsed(now).map(|elapsed| elapsed.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn counts_whole_seconds_while_running() {
        let t0 = Instant::now();
        let mut stopwatch = Stopwatch::new();
        assert_eq!(stopwatch.elapsed_secs(t0), None);

        stopwatch.start(t0);

        assert!(stopwatch.is_running());
        assert_eq!(stopwatch.elapsed_secs(t0), Some(0));
        assert_eq!(stopwatch.elapsed_secs(t0 + ms(999)), Some(0));
        assert_eq!(stopwatch.elapsed_secs(t0 + ms(2250)), Some(2));
    }

    #[test]
    fn stop_freezes_and_reset_clears() {
        let t0 = Instant::now();
        let mut stopwatch = Stopwatch::new();

        stopwatch.start(t0);
        stopwatch.stop(t0 + ms(3500));

        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.elapsed_secs(t0 + ms(60_000)), Some(3));

        stopwatch.stop(t0 + ms(90_000));
        assert_eq!(stopwatch.elapsed_secs(t0 + ms(90_000)), Some(3));

        stopwatch.reset();
        assert_eq!(stopwatch.elapsed(t0 + ms(90_000)), None);
    }

    #[test]
    fn restart_counts_from_zero_again() {
        let t0 = Instant::now();
        let mut stopwatch = Stopwatch::new();

        stopwatch.start(t0);
        stopwatch.stop(t0 + ms(5000));
        stopwatch.start(t0 + ms(6000));

        assert_eq!(stopwatch.elapsed_secs(t0 + ms(7100)), Some(1));
    }
}
