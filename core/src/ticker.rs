use core::time::Duration;

/// Fixed-period timer driven by elapsed time reported by the host.
///
/// Stopping drops any partially accumulated period, so a ticker that is
/// restarted never fires early and a stopped ticker never fires at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
    accumulated: Duration,
    running: bool,
}

impl Ticker {
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
        self.accumulated = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    /// Feeds `elapsed` wall time and returns how many whole periods completed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running || self.period.is_zero() {
            return 0;
        }

        self.accumulated = self.accumulated.saturating_add(elapsed);
        let ticks = self.accumulated.as_nanos() / self.period.as_nanos();
        let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);
        self.accumulated = self
            .accumulated
            .saturating_sub(self.period.saturating_mul(ticks));
        ticks
    }
}
