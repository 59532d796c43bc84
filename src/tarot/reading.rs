//! Reveal state machine for a three-card reading.
//!
//! ```text
//! Empty --draw--> Drawing --complete--> Drawn(hidden) --reveal--> Drawn(revealed) --reset--> Empty
//! ```
//!
//! The hand is shuffled when the draw begins and only published once the
//! draw completes. Revealing twice is a no-op. Reset is only accepted after
//! the cards have been revealed.

use std::time::Duration;

use serde::Serialize;

use super::deck::TarotDeck;
use super::spread::{DrawnCard, Hand};
use crate::core::{ArcanaError, ArcanaResult, Delay, ReadingRng};

/// Observable phase of a reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ReadingPhase {
    Empty,
    Drawing,
    Drawn { revealed: bool },
}

impl ReadingPhase {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ReadingPhase::Empty => "empty",
            ReadingPhase::Drawing => "drawing",
            ReadingPhase::Drawn { revealed: false } => "hidden",
            ReadingPhase::Drawn { revealed: true } => "revealed",
        }
    }
}

#[derive(Clone, Debug, Default)]
enum State {
    #[default]
    Empty,
    Drawing(Hand),
    Drawn {
        hand: Hand,
        revealed: bool,
    },
}

/// One reading widget's state.
#[derive(Clone, Debug, Default)]
pub struct TarotReading {
    state: State,
}

impl TarotReading {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> ReadingPhase {
        match self.state {
            State::Empty => ReadingPhase::Empty,
            State::Drawing(_) => ReadingPhase::Drawing,
            State::Drawn { revealed, .. } => ReadingPhase::Drawn { revealed },
        }
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, State::Drawing(_))
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self.state, State::Drawn { revealed: true, .. })
    }

    /// Published cards. Empty unless the draw has completed.
    #[must_use]
    pub fn hand(&self) -> &[DrawnCard] {
        match &self.state {
            State::Drawn { hand, .. } => hand.cards(),
            State::Empty | State::Drawing(_) => &[],
        }
    }

    fn invalid(&self, event: &'static str) -> ArcanaError {
        ArcanaError::InvalidTransition {
            state: self.phase().name(),
            event,
        }
    }

    /// Empty -> Drawing. Shuffles now, publishes on `complete_draw`.
    pub fn begin_draw(&mut self, deck: &TarotDeck, rng: &mut ReadingRng) -> ArcanaResult<()> {
        match self.state {
            State::Empty => {
                self.state = State::Drawing(deck.draw(rng));
                tracing::debug!("reading: empty -> drawing");
                Ok(())
            }
            State::Drawing(_) => Err(ArcanaError::Busy("draw")),
            State::Drawn { .. } => Err(self.invalid("draw")),
        }
    }

    /// Drawing -> Drawn(hidden).
    pub fn complete_draw(&mut self) -> ArcanaResult<&[DrawnCard]> {
        let State::Drawing(hand) = self.state else {
            return Err(self.invalid("complete draw"));
        };
        self.state = State::Drawn { hand, revealed: false };
        tracing::debug!("reading: drawing -> hidden");
        Ok(self.hand())
    }

    /// Begin, wait out `latency`, complete.
    pub fn draw<D: Delay + ?Sized>(
        &mut self,
        deck: &TarotDeck,
        rng: &mut ReadingRng,
        delay: &D,
        latency: Duration,
    ) -> ArcanaResult<&[DrawnCard]> {
        self.begin_draw(deck, rng)?;
        delay.wait(latency);
        self.complete_draw()
    }

    /// Drawn(hidden) -> Drawn(revealed). No-op when already revealed.
    pub fn reveal(&mut self) -> ArcanaResult<()> {
        if let State::Drawn { revealed, .. } = &mut self.state {
            if !*revealed {
                *revealed = true;
                tracing::debug!("reading: hidden -> revealed");
            }
            return Ok(());
        }
        Err(self.invalid("reveal"))
    }

    /// Drawn(revealed) -> Empty, discarding the hand.
    pub fn reset(&mut self) -> ArcanaResult<()> {
        if !self.is_revealed() {
            return Err(self.invalid("reset"));
        }
        self.state = State::Empty;
        tracing::debug!("reading: revealed -> empty");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoDelay;

    fn drawn(seed: u64) -> (TarotReading, TarotDeck, ReadingRng) {
        let deck = TarotDeck::major_arcana();
        let mut rng = ReadingRng::new(seed);
        let mut reading = TarotReading::new();
        reading.draw(&deck, &mut rng, &NoDelay, Duration::ZERO).unwrap();
        (reading, deck, rng)
    }

    #[test]
    fn test_starts_empty() {
        let reading = TarotReading::new();
        assert_eq!(reading.phase(), ReadingPhase::Empty);
        assert!(reading.hand().is_empty());
    }

    #[test]
    fn test_hand_hidden_until_draw_completes() {
        let deck = TarotDeck::major_arcana();
        let mut rng = ReadingRng::new(3);
        let mut reading = TarotReading::new();

        reading.begin_draw(&deck, &mut rng).unwrap();
        assert_eq!(reading.phase(), ReadingPhase::Drawing);
        assert!(reading.hand().is_empty());

        assert_eq!(reading.complete_draw().unwrap().len(), 3);
        assert_eq!(reading.phase(), ReadingPhase::Drawn { revealed: false });
    }

    #[test]
    fn test_draw_while_drawing_is_busy() {
        let deck = TarotDeck::major_arcana();
        let mut rng = ReadingRng::new(3);
        let mut reading = TarotReading::new();

        reading.begin_draw(&deck, &mut rng).unwrap();
        assert_eq!(reading.begin_draw(&deck, &mut rng), Err(ArcanaError::Busy("draw")));
    }

    #[test]
    fn test_reveal_idempotent() {
        let (mut reading, _, _) = drawn(11);
        let before = reading.hand().to_vec();

        reading.reveal().unwrap();
        reading.reveal().unwrap();

        assert_eq!(reading.phase(), ReadingPhase::Drawn { revealed: true });
        assert_eq!(reading.hand(), &before[..]);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut reading = TarotReading::new();
        assert_eq!(
            reading.reveal(),
            Err(ArcanaError::InvalidTransition { state: "empty", event: "reveal" })
        );
        assert!(reading.reset().is_err());
        assert!(reading.complete_draw().is_err());

        let (mut reading, deck, mut rng) = drawn(5);
        assert_eq!(
            reading.reset(),
            Err(ArcanaError::InvalidTransition { state: "hidden", event: "reset" })
        );
        assert!(matches!(
            reading.begin_draw(&deck, &mut rng),
            Err(ArcanaError::InvalidTransition { event: "draw", .. })
        ));
    }

    #[test]
    fn test_reset_clears_hand() {
        let (mut reading, deck, mut rng) = drawn(8);
        reading.reveal().unwrap();
        reading.reset().unwrap();

        assert_eq!(reading.phase(), ReadingPhase::Empty);
        assert_eq!(reading.hand().len(), 0);

        reading.draw(&deck, &mut rng, &NoDelay, Duration::ZERO).unwrap();
        assert_eq!(reading.hand().len(), 3);
        assert!(!reading.is_revealed());
    }
}
