//! A monotonic countdown clock for timed retries and backoff loops.

use std::time::{Duration, Instant};

pub struct Countdown {
    deadline: Instant,
}

impl Countdown {
    pub fn new(duration: Duration) -> Self {
        Self { deadline: Instant::now() + duration }
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}
