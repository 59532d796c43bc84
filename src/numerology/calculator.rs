//! State behind the numerology widget.
//!
//! The widget holds the raw date text, a busy flag while the artificial
//! latency runs, and the last published profile. A calculation is split into
//! `begin_calculation` and `complete_calculation` so a UI loop can run the
//! pause itself; `calculate` does both around an injected `Delay`.

use std::time::Duration;

use super::date::BirthDate;
use super::engine::{NumerologyEngine, NumerologyResult};
use crate::core::{ArcanaError, ArcanaResult, Delay};

#[derive(Clone, Debug, Default)]
pub struct NumerologyCalculator {
    birth_date: String,
    pending: Option<BirthDate>,
    result: Option<NumerologyResult>,
}

impl NumerologyCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_birth_date(&mut self, input: impl Into<String>) {
        self.birth_date = input.into();
    }

    #[must_use]
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    #[must_use]
    pub fn is_calculating(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<&NumerologyResult> {
        self.result.as_ref()
    }

    /// Validate the input and mark the calculator busy.
    pub fn begin_calculation(&mut self, engine: &NumerologyEngine) -> ArcanaResult<BirthDate> {
        if self.pending.is_some() {
            return Err(ArcanaError::Busy("calculation"));
        }
        let date = engine.parse_date(&self.birth_date)?;
        self.pending = Some(date);
        tracing::debug!(%date, "calculation started");
        Ok(date)
    }

    /// Publish the profile for the pending date and clear the busy flag.
    pub fn complete_calculation(&mut self, engine: &NumerologyEngine) -> ArcanaResult<&NumerologyResult> {
        let date = self.pending.take().ok_or(ArcanaError::InvalidTransition {
            state: "idle",
            event: "complete calculation",
        })?;
        Ok(&*self.result.insert(engine.analyze(&date)))
    }

    /// Begin, wait out `latency`, complete.
    pub fn calculate<D: Delay + ?Sized>(
        &mut self,
        engine: &NumerologyEngine,
        delay: &D,
        latency: Duration,
    ) -> ArcanaResult<&NumerologyResult> {
        self.begin_calculation(engine)?;
        delay.wait(latency);
        self.complete_calculation(engine)
    }

    /// Start over: drop the result and the typed date.
    ///
    /// Refused while a calculation is pending; there is no cancellation.
    pub fn clear(&mut self) -> ArcanaResult<()> {
        if self.pending.is_some() {
            return Err(ArcanaError::Busy("calculation"));
        }
        self.birth_date.clear();
        self.result = None;
        Ok(())
    }
}
