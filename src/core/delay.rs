//! Injectable latency.
//!
//! The widgets hold back their results for a moment to feel like work is
//! being done. Controllers wait on a `Delay` so tests can skip the pause.

use std::cell::RefCell;
use std::time::Duration;

/// Blocks the caller for a cosmetic pause.
pub trait Delay {
    fn wait(&self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Returns immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) {}
}

/// Returns immediately and remembers every requested pause.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    waits: RefCell<Vec<Duration>>,
}

impl RecordingDelay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pauses requested so far, in order.
    #[must_use]
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.borrow().clone()
    }
}

impl Delay for RecordingDelay {
    fn wait(&self, duration: Duration) {
        self.waits.borrow_mut().push(duration);
    }
}

impl<D: Delay + ?Sized> Delay for &D {
    fn wait(&self, duration: Duration) {
        (**self).wait(duration);
    }
}

impl<D: Delay + ?Sized> Delay for Box<D> {
    fn wait(&self, duration: Duration) {
        (**self).wait(duration);
    }
}
