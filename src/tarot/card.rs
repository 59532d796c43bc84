//! Tarot card data.
//!
//! The reading uses the 22 Major Arcana. Cards are static and never change
//! after the deck is built.

use serde::Serialize;

/// One Major Arcana card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TarotCard {
    /// Arcana number, 0 (The Fool) to 21 (The World).
    pub number: u8,
    pub name: &'static str,
    pub meaning: &'static str,
}

impl TarotCard {
    const fn new(number: u8, name: &'static str, meaning: &'static str) -> Self {
        Self { number, name, meaning }
    }
}

impl std::fmt::Display for TarotCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

pub const MAJOR_ARCANA_SIZE: usize = 22;

pub static MAJOR_ARCANA: [TarotCard; MAJOR_ARCANA_SIZE] = [
    TarotCard::new(0, "The Fool", "New beginnings, spontaneity, freedom"),
    TarotCard::new(1, "The Magician", "Willpower, mastery, manifesting intentions"),
    TarotCard::new(2, "The High Priestess", "Intuition, hidden knowledge, inner wisdom"),
    TarotCard::new(3, "The Empress", "Abundance, fertility, nurturing"),
    TarotCard::new(4, "The Emperor", "Authority, stability, control"),
    TarotCard::new(5, "The Hierophant", "Tradition, spirituality, mentorship"),
    TarotCard::new(6, "The Lovers", "Choice, love, harmony in relationships"),
    TarotCard::new(7, "The Chariot", "Victory, determination, control"),
    TarotCard::new(8, "Strength", "Inner strength, courage, patience"),
    TarotCard::new(9, "The Hermit", "Self-knowledge, solitude, inner search"),
    TarotCard::new(10, "Wheel of Fortune", "Fate, change, the cycles of life"),
    TarotCard::new(11, "Justice", "Balance, truth, fairness"),
    TarotCard::new(12, "The Hanged Man", "Sacrifice, a new perspective, release"),
    TarotCard::new(13, "Death", "Transformation, endings, a new beginning"),
    TarotCard::new(14, "Temperance", "Balance, patience, moderation"),
    TarotCard::new(15, "The Devil", "Temptation, dependence, materialism"),
    TarotCard::new(16, "The Tower", "Sudden change, shattered illusions"),
    TarotCard::new(17, "The Star", "Hope, inspiration, renewal"),
    TarotCard::new(18, "The Moon", "Illusion, intuition, the subconscious"),
    TarotCard::new(19, "The Sun", "Joy, success, positivity"),
    TarotCard::new(20, "Judgement", "Awakening, a second chance, liberation"),
    TarotCard::new(21, "The World", "Completion, wholeness, achievement"),
];
