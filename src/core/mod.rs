//! Shared building blocks: RNG, configuration, errors, latency.

pub mod config;
pub mod delay;
pub mod error;
pub mod rng;

pub use config::ArcanaConfig;
pub use delay::{Delay, NoDelay, RecordingDelay, ThreadSleep};
pub use error::{ArcanaError, ArcanaResult};
pub use rng::{ReadingRng, ReadingRngState};
