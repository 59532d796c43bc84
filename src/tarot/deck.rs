//! The fixed reading deck.

use rustc_hash::FxHashMap;

use super::card::{TarotCard, MAJOR_ARCANA};
use super::spread::{Hand, HAND_SIZE};
use crate::core::ReadingRng;

/// Ordered, immutable deck with lookup by name.
///
/// ## Example
///
/// ```
/// use arcana::core::ReadingRng;
/// use arcana::tarot::{Position, TarotDeck};
///
/// let deck = TarotDeck::major_arcana();
/// let mut rng = ReadingRng::new(42);
///
/// let hand = deck.draw(&mut rng);
/// assert_eq!(hand.cards().len(), 3);
/// assert_eq!(hand.cards()[0].position, Position::Past);
/// ```
#[derive(Clone, Debug)]
pub struct TarotDeck {
    cards: &'static [TarotCard],
    by_name: FxHashMap<&'static str, usize>,
}

impl TarotDeck {
    /// The 22 Major Arcana in traditional order.
    #[must_use]
    pub fn major_arcana() -> Self {
        let by_name = MAJOR_ARCANA
            .iter()
            .enumerate()
            .map(|(i, card)| (card.name, i))
            .collect();
        Self {
            cards: &MAJOR_ARCANA,
            by_name,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[TarotCard] {
        self.cards
    }

    /// Card by arcana number.
    #[must_use]
    pub fn get(&self, number: u8) -> Option<&TarotCard> {
        self.cards.get(usize::from(number))
    }

    /// Card by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&TarotCard> {
        self.by_name.get(name).map(|&i| &self.cards[i])
    }

    /// Shuffle the whole deck and deal the top three as Past, Present, Future.
    ///
    /// The shuffle is Fisher-Yates over card indices, so every card is
    /// equally likely in every slot.
    pub fn draw(&self, rng: &mut ReadingRng) -> Hand {
        let mut order: Vec<usize> = (0..self.cards.len()).collect();
        rng.shuffle(&mut order);

        let top: [TarotCard; HAND_SIZE] = [
            self.cards[order[0]],
            self.cards[order[1]],
            self.cards[order[2]],
        ];
        tracing::debug!(
            past = top[0].name,
            present = top[1].name,
            future = top[2].name,
            "dealt tarot hand"
        );
        Hand::deal(top)
    }
}

impl Default for TarotDeck {
    fn default() -> Self {
        Self::major_arcana()
    }
}
