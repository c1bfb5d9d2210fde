//! The 52-card deck and the card sources a round draws from.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// The cards not yet dealt in a round.
///
/// Created with all 52 distinct cards. Each draw removes exactly one card and
/// a drawn card is never put back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a standard deck in fixed enumeration order (suit, then rank).
    ///
    /// The deck is not shuffled: draws pick a uniformly random position.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Removes and returns a uniformly random card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let index = rng.random_range(0..self.cards.len());
        Ok(self.cards.remove(index))
    }

    /// Removes a specific card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left, or
    /// [`DeckError::NotInDeck`] if the card was already drawn.
    pub fn take(&mut self, card: Card) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let index = self
            .cards
            .iter()
            .position(|c| *c == card)
            .ok_or(DeckError::NotInDeck(card))?;
        Ok(self.cards.remove(index))
    }

    /// Returns the remaining cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the card is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// Something a round can draw cards from.
pub trait CardSource {
    /// Draws the next card.
    ///
    /// # Errors
    ///
    /// Returns a [`DeckError`] when no card can be supplied.
    fn draw(&mut self) -> Result<Card, DeckError>;

    /// Returns the underlying deck of undealt cards.
    fn deck(&self) -> &Deck;
}

/// A standard deck drawn uniformly at random with its own seeded generator.
#[derive(Debug, Clone)]
pub struct RandomDeck {
    deck: Deck,
    rng: ChaCha8Rng,
}

impl RandomDeck {
    /// Creates a full deck whose draws are driven by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Deck::standard(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CardSource for RandomDeck {
    fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.deck.draw(&mut self.rng)?;
        trace!("drew {card}, {} left", self.deck.len());
        Ok(card)
    }

    fn deck(&self) -> &Deck {
        &self.deck
    }
}

/// A standard deck that deals a predetermined sequence of cards.
///
/// Each card is taken out of a real 52-card deck, so a sequence that repeats
/// a card fails with [`DeckError::NotInDeck`]. Once the sequence runs out,
/// draws fall back to the lowest remaining card in enumeration order.
#[derive(Debug, Clone)]
pub struct StackedDeck {
    deck: Deck,
    order: VecDeque<Card>,
}

impl StackedDeck {
    /// Creates a deck that deals `draws` first, in order.
    #[must_use]
    pub fn new(draws: &[Card]) -> Self {
        Self {
            deck: Deck::standard(),
            order: draws.iter().copied().collect(),
        }
    }
}

impl CardSource for StackedDeck {
    fn draw(&mut self) -> Result<Card, DeckError> {
        let card = match self.order.pop_front() {
            Some(card) => self.deck.take(card)?,
            None => {
                let first = *self.deck.cards().first().ok_or(DeckError::Empty)?;
                self.deck.take(first)?
            }
        };
        trace!("drew {card}, {} left", self.deck.len());
        Ok(card)
    }

    fn deck(&self) -> &Deck {
        &self.deck
    }
}
