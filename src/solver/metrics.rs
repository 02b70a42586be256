use std::time::{Duration, Instant};

/// Lifetime totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
  /// Attempts evaluated.
  pub iterations: u64,
  pub accepted: u64,
  pub refills: u64
}

/// Accepted iterations per fixed time window.
///
/// Counts into the open window; [`roll`](Throughput::roll) publishes the count once the
/// window has elapsed and starts the next one.
#[derive(Debug, Clone)]
pub struct Throughput {
  window: Duration,
  window_start: Option<Instant>,
  pending: u32,
  last: u32,
  windows: u64
}

impl Throughput {
  pub fn new(window: Duration) -> Self {
    Self {
      window,
      window_start: None,
      pending: 0,
      last: 0,
      windows: 0
    }
  }

  pub fn record(&mut self) {
    self.pending = self.pending.saturating_add(1);
  }

  /// Close the open window if it ended by `now`. The first call only opens a window.
  pub fn roll(&mut self, now: Instant) -> bool {
    let start = *self.window_start.get_or_insert(now);
    if now.saturating_duration_since(start) < self.window {
      return false;
    }
    self.last = std::mem::take(&mut self.pending);
    self.windows += 1;
    self.window_start = Some(now);
    true
  }

  /// Count of the last closed window.
  pub fn per_window(&self) -> u32 {
    self.last
  }

  /// Count so far in the open window.
  pub fn pending(&self) -> u32 {
    self.pending
  }

  pub fn windows_completed(&self) -> u64 {
    self.windows
  }

  pub fn window(&self) -> Duration {
    self.window
  }
}
