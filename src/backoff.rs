use std::time::Duration;

/// Starting point of the backoff sequence. The first computed delay is
/// twice this value.
pub const BACKOFF_FLOOR: Duration = Duration::from_millis(50);

/// Exponential backoff state for a single fetch.
#[derive(Clone, Debug)]
pub struct Backoff {
    current: Duration,
    max: Duration,
}

impl Backoff {
    pub fn new(max: Duration) -> Self {
        Self {
            current: BACKOFF_FLOOR,
            max,
        }
    }

    /// Doubles the delay, clamps it to the ceiling and returns it.
    pub fn next_delay(&mut self) -> Duration {
        self.current = self.current.saturating_mul(2).min(self.max);
        self.current
    }
}
