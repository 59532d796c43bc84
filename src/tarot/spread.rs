//! Three-card spread: positions and the drawn hand.

use serde::Serialize;

use super::card::TarotCard;

/// Cards in one reading.
pub const HAND_SIZE: usize = 3;

/// Slot a drawn card is laid in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    Past,
    Present,
    Future,
}

impl Position {
    /// Positions in the order cards are dealt.
    pub const ALL: [Position; HAND_SIZE] = [Position::Past, Position::Present, Position::Future];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Position::Past => "Past",
            Position::Present => "Present",
            Position::Future => "Future",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A card together with the slot it was dealt into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    pub position: Position,
    pub card: TarotCard,
}

/// Exactly three distinct cards, labelled Past, Present, Future.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: [DrawnCard; HAND_SIZE],
}

impl Hand {
    /// Label `cards` with the positions in dealing order.
    pub(crate) fn deal(cards: [TarotCard; HAND_SIZE]) -> Self {
        debug_assert!(
            cards[0] != cards[1] && cards[0] != cards[2] && cards[1] != cards[2],
            "Hand cards must be distinct"
        );
        let [past, present, future] = cards;
        Self {
            cards: [
                DrawnCard { position: Position::Past, card: past },
                DrawnCard { position: Position::Present, card: present },
                DrawnCard { position: Position::Future, card: future },
            ],
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[DrawnCard] {
        &self.cards
    }

    #[must_use]
    pub fn at(&self, position: Position) -> &DrawnCard {
        &self.cards[position as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawnCard> {
        self.cards.iter()
    }
}
