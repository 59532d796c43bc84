//! Consultation controller.
//!
//! `Consultation` is the single state holder a presentation layer talks to.
//! It owns both widgets, the deck, the RNG and the latency source; nothing
//! is global.

use chrono::NaiveDate;

use crate::core::{ArcanaConfig, ArcanaResult, Delay, ReadingRng, ReadingRngState, ThreadSleep};
use crate::numerology::{BirthDate, NumerologyCalculator, NumerologyEngine, NumerologyResult};
use crate::tarot::{DrawnCard, ReadingPhase, TarotDeck, TarotReading};

pub struct Consultation {
    config: ArcanaConfig,
    rng: ReadingRng,
    delay: Box<dyn Delay>,
    engine: NumerologyEngine,
    deck: TarotDeck,
    numerology: NumerologyCalculator,
    reading: TarotReading,
}

impl Consultation {
    /// Controller that really sleeps for the configured latencies.
    #[must_use]
    pub fn new(config: ArcanaConfig) -> Self {
        Self::with_delay(config, ThreadSleep)
    }

    /// Controller with a custom latency source.
    #[must_use]
    pub fn with_delay(config: ArcanaConfig, delay: impl Delay + 'static) -> Self {
        let rng = match config.seed {
            Some(seed) => ReadingRng::new(seed),
            None => ReadingRng::from_entropy(),
        };
        tracing::debug!(seed = rng.seed(), "consultation created");

        Self {
            engine: NumerologyEngine::from_config(&config),
            config,
            rng,
            delay: Box::new(delay),
            deck: TarotDeck::major_arcana(),
            numerology: NumerologyCalculator::new(),
            reading: TarotReading::new(),
        }
    }

    /// Pin "today" for the future-date check. The config policy still applies.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.engine = NumerologyEngine::from_config(&self.config).with_today(today);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ArcanaConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &TarotDeck {
        &self.deck
    }

    #[must_use]
    pub fn rng_state(&self) -> ReadingRngState {
        self.rng.state()
    }

    // ----- numerology -----

    pub fn set_birth_date(&mut self, input: impl Into<String>) {
        self.numerology.set_birth_date(input);
    }

    #[must_use]
    pub fn numerology(&self) -> &NumerologyCalculator {
        &self.numerology
    }

    #[must_use]
    pub fn numerology_result(&self) -> Option<&NumerologyResult> {
        self.numerology.result()
    }

    /// Compute the profile for the typed birth date after the configured pause.
    pub fn calculate_numerology(&mut self) -> ArcanaResult<&NumerologyResult> {
        self.numerology
            .calculate(&self.engine, &*self.delay, self.config.calculation_delay())
    }

    /// Validate the typed date and start the pause. Busy while one is pending.
    pub fn begin_numerology(&mut self) -> ArcanaResult<BirthDate> {
        self.numerology.begin_calculation(&self.engine)
    }

    /// Publish the pending profile once the pause has elapsed.
    pub fn complete_numerology(&mut self) -> ArcanaResult<&NumerologyResult> {
        self.numerology.complete_calculation(&self.engine)
    }

    pub fn clear_numerology(&mut self) -> ArcanaResult<()> {
        self.numerology.clear()
    }

    // ----- tarot -----

    #[must_use]
    pub fn reading_phase(&self) -> ReadingPhase {
        self.reading.phase()
    }

    #[must_use]
    pub fn hand(&self) -> &[DrawnCard] {
        self.reading.hand()
    }

    /// Shuffle and deal a hidden hand after the configured pause.
    pub fn draw_cards(&mut self) -> ArcanaResult<&[DrawnCard]> {
        self.reading
            .draw(&self.deck, &mut self.rng, &*self.delay, self.config.draw_delay())
    }

    /// Shuffle now and start the pause. Busy while a draw is pending.
    pub fn begin_draw(&mut self) -> ArcanaResult<()> {
        self.reading.begin_draw(&self.deck, &mut self.rng)
    }

    /// Publish the hidden hand once the pause has elapsed.
    pub fn complete_draw(&mut self) -> ArcanaResult<&[DrawnCard]> {
        self.reading.complete_draw()
    }

    pub fn reveal_cards(&mut self) -> ArcanaResult<()> {
        self.reading.reveal()
    }

    pub fn reset_reading(&mut self) -> ArcanaResult<()> {
        self.reading.reset()
    }
}

impl Default for Consultation {
    fn default() -> Self {
        Self::new(ArcanaConfig::default())
    }
}

impl std::fmt::Debug for Consultation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Consultation")
            .field("config", &self.config)
            .field("numerology", &self.numerology)
            .field("reading", &self.reading.phase())
            .finish_non_exhaustive()
    }
}
