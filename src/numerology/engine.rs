//! Numerology profile for a birth date.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::date::BirthDate;
use super::meanings::lookup_meaning;
use super::reduce::{compute_destiny, compute_life_path, compute_personality};
use crate::core::{ArcanaConfig, ArcanaResult};

/// The three numbers of a profile and the text for each.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyResult {
    pub life_path: u32,
    pub destiny: u32,
    pub personality: u32,
    pub life_path_meaning: String,
    pub destiny_meaning: String,
    pub personality_meaning: String,
}

/// Turns birth dates into numerology profiles.
///
/// ## Example
///
/// ```
/// use arcana::numerology::{BirthDate, NumerologyEngine};
///
/// let engine = NumerologyEngine::new();
/// let result = engine.analyze(&BirthDate::new(1988, 11, 29).unwrap());
///
/// assert_eq!((result.life_path, result.destiny, result.personality), (3, 3, 11));
/// ```
#[derive(Clone, Debug)]
pub struct NumerologyEngine {
    reject_future_dates: bool,
    today: Option<NaiveDate>,
}

impl Default for NumerologyEngine {
    fn default() -> Self {
        Self {
            reject_future_dates: true,
            today: None,
        }
    }
}

impl NumerologyEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &ArcanaConfig) -> Self {
        Self {
            reject_future_dates: config.reject_future_dates,
            today: None,
        }
    }

    /// Pin "today" instead of reading the local clock.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Parse and validate picker input.
    pub fn parse_date(&self, input: &str) -> ArcanaResult<BirthDate> {
        let parsed = BirthDate::parse(input).and_then(|date| {
            if self.reject_future_dates {
                date.ensure_not_after(self.today())
            } else {
                Ok(date)
            }
        });
        if let Err(err) = &parsed {
            tracing::warn!(input, %err, "rejected birth date");
        }
        parsed
    }

    /// Build the profile for `date`.
    ///
    /// Each number is looked up on its own, so any of them may land on the
    /// fallback entry independently.
    #[must_use]
    pub fn analyze(&self, date: &BirthDate) -> NumerologyResult {
        let life_path = compute_life_path(date);
        let destiny = compute_destiny(date);
        let personality = compute_personality(date);

        tracing::debug!(%date, life_path, destiny, personality, "computed numerology profile");

        NumerologyResult {
            life_path,
            destiny,
            personality,
            life_path_meaning: lookup_meaning(life_path).life.to_owned(),
            destiny_meaning: lookup_meaning(destiny).destiny.to_owned(),
            personality_meaning: lookup_meaning(personality).personality.to_owned(),
        }
    }

    /// Parse, validate and analyze in one step.
    pub fn analyze_str(&self, input: &str) -> ArcanaResult<NumerologyResult> {
        let date = self.parse_date(input)?;
        Ok(self.analyze(&date))
    }
}
