//! A single-table blackjack round engine with optional `no_std` support.
//!
//! A [`Round`] deals one player and one dealer from a fresh 52-card deck,
//! takes the insurance decision and player actions from an [`ActionSource`],
//! plays the dealer, and ends with a [`RoundResult`]. The result maps to a
//! [`Payout`] code that a [`Bankroll`] turns into chips.
//!
//! # Example
//!
//! ```
//! use bjcore::{Action, Bankroll, Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42);
//! let mut bankroll = Bankroll::new(100, &options);
//!
//! let bet = bankroll.place_bet(10).unwrap();
//! let result = game.play_scripted(bet, &[Action::Stand]).unwrap();
//! bankroll.settle(bet, result.payout());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod bankroll;
pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod interactive;
pub mod options;
pub mod result;

// Re-export main types
pub use action::{Action, ActionSource, ScriptedActions};
pub use bankroll::Bankroll;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{CardSource, Deck, RandomDeck, StackedDeck};
pub use error::{ActionError, BetError, DeckError, HandError, RoundError};
pub use event::{EventKind, EventLog, RecordedEvent, TableEvent, TableObserver, TableView};
pub use game::{DEALER_STANDS_ON, Game, Round, RoundState};
pub use hand::{DealerHand, Hand, HandStatus, classify, hand_value};
#[cfg(feature = "std")]
pub use interactive::LineActions;
pub use options::{GameOptions, RoundingMode};
pub use result::{Multiplier, Payout, RoundOutcome, RoundResult, resolve};
