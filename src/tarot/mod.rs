//! Tarot: the Major Arcana deck and the three-card reading.
//!
//! ## Key Types
//!
//! - `TarotCard`: static card data
//! - `TarotDeck`: fixed 22-card deck, draws a `Hand`
//! - `Hand` / `DrawnCard` / `Position`: the Past, Present, Future spread
//! - `TarotReading`: draw, reveal, reset state machine

pub mod card;
pub mod deck;
pub mod reading;
pub mod spread;

pub use card::{TarotCard, MAJOR_ARCANA, MAJOR_ARCANA_SIZE};
pub use deck::TarotDeck;
pub use reading::{ReadingPhase, TarotReading};
pub use spread::{DrawnCard, Hand, Position, HAND_SIZE};
