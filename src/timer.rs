use std::time::{Duration, Instant};

/// Wall-clock source for interrupt 0.
#[derive(Debug)]
pub struct Timer {
  period: Duration,
  next: Instant,
}

impl Timer {
  /// First tick one `period` from now.
  pub fn new(period: Duration) -> Timer {
    Timer::first_tick_at(period, Instant::now() + period)
  }

  pub fn first_tick_at(period: Duration, at: Instant) -> Timer {
    Timer { period, next: at }
  }

  /// Return true if a period has elapsed since the last tick.
  pub fn poll(&mut self) -> bool {
    self.poll_at(Instant::now())
  }

  /// Return true if `now` is past the deadline, and re-arm from `now`.
  pub fn poll_at(&mut self, now: Instant) -> bool {
    if now < self.next {
      return false;
    }
    self.next = now + self.period;
    true
  }
}
