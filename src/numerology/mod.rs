//! Numerology: birth dates reduced to life path, destiny and personality.
//!
//! ## Key Types
//!
//! - `BirthDate`: validated calendar date
//! - `NumerologyEngine`: computes a `NumerologyResult` for a date
//! - `NumerologyCalculator`: widget state (input, busy flag, result)
//!
//! The reduction functions and the meaning table are exposed on their own
//! for callers that need a single number.

pub mod calculator;
pub mod date;
pub mod engine;
pub mod meanings;
pub mod reduce;

pub use calculator::NumerologyCalculator;
pub use date::BirthDate;
pub use engine::{NumerologyEngine, NumerologyResult};
pub use meanings::{lookup_meaning, NumberMeaning, FALLBACK_NUMBER};
pub use reduce::{
    compute_destiny, compute_life_path, compute_personality, digit_sum, is_master, reduce, MASTER_NUMBERS,
};
