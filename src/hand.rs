//! Player and dealer hand representations and hand evaluation.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;
use crate::error::HandError;

/// Computes the value of a sequence of cards.
///
/// Non-Aces are summed first. Each Ace is then resolved in turn: it counts 11
/// while the running total is below 11, and 1 otherwise. The decision for
/// every Ace includes the Aces already resolved.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    let (base, aces) = cards
        .iter()
        .fold((0_u8, 0_u8), |(total, aces), card| match card.rank.fixed_value() {
            Some(value) => (total.saturating_add(value), aces),
            None => (total, aces.saturating_add(1)),
        });

    (0..aces).fold(base, |total, _| {
        if total < 11 {
            total + 11
        } else {
            total.saturating_add(1)
        }
    })
}

/// Classifies a sequence of cards.
#[must_use]
pub fn classify(cards: &[Card]) -> HandStatus {
    HandStatus::from_value(hand_value(cards))
}

/// Classification of a hand after a card is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Below 21, play continues.
    Open,
    /// Exactly 21.
    Win,
    /// Over 21.
    Bust,
}

impl HandStatus {
    /// Classifies a hand value.
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        match value {
            21 => Self::Win,
            22.. => Self::Bust,
            _ => Self::Open,
        }
    }
}

fn check_cards(cards: &[Card]) -> Result<(), HandError> {
    if cards.is_empty() {
        return Err(HandError::Empty);
    }

    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(*card) {
            return Err(HandError::DuplicateCard(*card));
        }
    }
    Ok(())
}

/// A player's hand.
///
/// Grows only by appending freshly drawn cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card and returns the resulting classification.
    pub fn add_card(&mut self, card: Card) -> HandStatus {
        self.cards.push(card);
        self.status()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Classifies the hand.
    #[must_use]
    pub fn status(&self) -> HandStatus {
        classify(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks that the hand is non-empty and holds no card twice.
    ///
    /// # Errors
    ///
    /// Returns a [`HandError`] describing the broken invariant.
    pub fn validate(&self) -> Result<(), HandError> {
        check_cards(&self.cards)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card and returns the resulting classification.
    pub fn add_card(&mut self, card: Card) -> HandStatus {
        self.cards.push(card);
        self.status()
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.first().map_or(0, |c| hand_value(core::slice::from_ref(c)))
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Classifies the hand.
    #[must_use]
    pub fn status(&self) -> HandStatus {
        classify(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks that the hand is non-empty and holds no card twice.
    ///
    /// # Errors
    ///
    /// Returns a [`HandError`] describing the broken invariant.
    pub fn validate(&self) -> Result<(), HandError> {
        check_cards(&self.cards)
    }
}
