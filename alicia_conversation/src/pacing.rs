//! Human-like reply latency.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::random::RandomSource;

pub const THINKING_SECS: (f64, f64) = (1.0, 2.0);
pub const START_PAUSE: Duration = Duration::from_millis(1500);
pub const COMMAND_PAUSE: Duration = Duration::from_secs(1);

/// Typing delay bounds in seconds for a reply of `chars` characters.
#[must_use]
pub const fn typing_bounds(chars: usize) -> (f64, f64) {
    if chars < 30 {
        (1.0, 1.5)
    } else if chars < 100 {
        (1.5, 2.5)
    } else {
        (2.5, 3.0)
    }
}

/// Sleeps that only delay the caller's own task.
#[derive(Clone)]
pub struct Pacer {
    random: Arc<RandomSource>,
    enabled: bool,
}

impl Pacer {
    #[must_use]
    pub const fn new(random: Arc<RandomSource>, enabled: bool) -> Self {
        Self { random, enabled }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Arc::new(RandomSource::default()), false)
    }

    #[must_use]
    pub fn thinking_delay(&self) -> Duration {
        let (low, high) = THINKING_SECS;
        Duration::from_secs_f64(self.random.uniform(low..=high))
    }

    #[must_use]
    pub fn typing_delay(&self, reply: &str) -> Duration {
        let (low, high) = typing_bounds(reply.chars().count());
        Duration::from_secs_f64(self.random.uniform(low..=high))
    }

    pub async fn think(&self) {
        self.pause(self.thinking_delay()).await;
    }

    pub async fn type_out(&self, reply: &str) {
        self.pause(self.typing_delay(reply)).await;
    }

    pub async fn pause(&self, delay: Duration) {
        if self.enabled {
            sleep(delay).await;
        }
    }
}
