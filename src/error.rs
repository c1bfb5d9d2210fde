//! Error types for round operations.

use thiserror::Error;

use crate::action::Action;
use crate::card::Card;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
    /// The requested card was already drawn.
    #[error("card {0} is not in the deck")]
    NotInDeck(Card),
}

/// Errors raised by the hand invariant check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand holds no cards.
    #[error("hand holds no cards")]
    Empty,
    /// The same card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur while obtaining or applying a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The action is not allowed at this point of the turn.
    #[error("{0} is not allowed at this point")]
    NotAllowed(Action),
    /// A scripted action queue ran out before the round ended.
    #[error("scripted actions exhausted")]
    Exhausted,
    /// The input could not be parsed as an action.
    #[error("unknown action token")]
    UnknownToken,
    /// The interactive input reached end of file.
    #[error("input closed")]
    InputClosed,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet is below the table minimum.
    #[error("bet is below the table minimum")]
    BelowMinimum,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The deck could not supply a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A hand broke its invariants.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// The action source failed or supplied an invalid action.
    #[error(transparent)]
    Action(#[from] ActionError),
}
