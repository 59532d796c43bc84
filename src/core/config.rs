//! Consultation configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration shared by the numerology and tarot widgets.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial JSON object such as `{"seed": 7}` is a valid config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcanaConfig {
    /// Seed for card draws. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Artificial latency before a numerology result is published.
    pub calculation_delay_ms: u64,

    /// Artificial latency between shuffling and showing the drawn hand.
    pub draw_delay_ms: u64,

    /// Reject birth dates later than today.
    pub reject_future_dates: bool,
}

impl Default for ArcanaConfig {
    fn default() -> Self {
        Self {
            seed: None,
            calculation_delay_ms: 1000,
            draw_delay_ms: 800,
            reject_future_dates: true,
        }
    }
}

impl ArcanaConfig {
    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the numerology latency in milliseconds.
    #[must_use]
    pub fn with_calculation_delay_ms(mut self, ms: u64) -> Self {
        self.calculation_delay_ms = ms;
        self
    }

    /// Set the draw latency in milliseconds.
    #[must_use]
    pub fn with_draw_delay_ms(mut self, ms: u64) -> Self {
        self.draw_delay_ms = ms;
        self
    }

    /// Allow or reject birth dates in the future.
    #[must_use]
    pub fn with_reject_future_dates(mut self, reject: bool) -> Self {
        self.reject_future_dates = reject;
        self
    }

    #[must_use]
    pub fn calculation_delay(&self) -> Duration {
        Duration::from_millis(self.calculation_delay_ms)
    }

    #[must_use]
    pub fn draw_delay(&self) -> Duration {
        Duration::from_millis(self.draw_delay_ms)
    }
}
