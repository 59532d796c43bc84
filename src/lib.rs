//! # arcana
//!
//! Numerology and tarot reading engine behind a consultation practice's
//! website widgets.
//!
//! ## Design Principles
//!
//! 1. **Pure calculators**: `NumerologyEngine` and `TarotDeck` hold no
//!    per-reading state. The same date always yields the same profile.
//!
//! 2. **Explicit state**: widget state (input, busy flags, published results)
//!    lives in `NumerologyCalculator`, `TarotReading` and the `Consultation`
//!    that owns them.
//!
//! 3. **Injectable latency**: the cosmetic pause before a result appears goes
//!    through the `Delay` trait, so tests run without sleeping.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, latency
//! - `numerology`: birth dates, digit reduction, meaning table, calculator
//! - `tarot`: Major Arcana deck, three-card spread, reveal state machine
//! - `session`: `Consultation` controller

pub mod core;
pub mod numerology;
pub mod session;
pub mod tarot;

// Re-export commonly used types
pub use crate::core::{
    ArcanaConfig, ArcanaError, ArcanaResult,
    Delay, NoDelay, RecordingDelay, ThreadSleep,
    ReadingRng, ReadingRngState,
};

pub use crate::numerology::{
    BirthDate, NumberMeaning, NumerologyCalculator, NumerologyEngine, NumerologyResult,
    compute_destiny, compute_life_path, compute_personality, lookup_meaning, reduce,
};

pub use crate::tarot::{
    DrawnCard, Hand, Position, ReadingPhase, TarotCard, TarotDeck, TarotReading,
};

pub use crate::session::Consultation;
