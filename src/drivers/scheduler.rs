use std::time::{Duration, Instant};
/// Fixed-period tick source polled from the GUI's frame loop.
///
/// At most one tick fires per poll. If the host stalls for longer than a
/// period, the missed ticks are coalesced and the next deadline is measured
/// from the stalled poll.
#[derive(Clone, Debug)]
pub struct TickScheduler {
    period: Duration,
    next_due: Instant,
}
impl TickScheduler {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }
    pub fn period(&self) -> Duration {
        self.period
    }
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.period;
        if self.next_due <= now {
            log::warn!(
                "tick handler fell behind by {:?}; skipping missed ticks",
                now - self.next_due
            );
            self.next_due = now + self.period;
        }
        true
    }
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
