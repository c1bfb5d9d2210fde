use alloc::vec::Vec;
use core::cmp::Ordering;

use log::debug;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::RoundError;
use crate::event::{EventKind, TableObserver};
use crate::hand::HandStatus;
use crate::result::{RoundOutcome, RoundResult};

use super::{Round, RoundState};

/// The dealer draws while below this value.
pub const DEALER_STANDS_ON: u8 = 17;

impl<S: CardSource, O: TableObserver> Round<S, O> {
    /// Dealer plays their hand and the round is resolved.
    ///
    /// The dealer reveals the hole card. 21 at any point is a dealer
    /// blackjack and going over 21 is a dealer bust. Otherwise the dealer
    /// draws until reaching 17 or higher, then the hand values are compared.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer turn or the card
    /// source is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        self.ensure_state(RoundState::DealerTurn)?;

        self.dealer.reveal_hole();
        self.emit(EventKind::DealerRevealed);

        let mut drawn_cards = Vec::new();

        if self.dealer.status() == HandStatus::Win {
            self.finish(RoundOutcome::DealerBlackjack)?;
            return Ok(drawn_cards);
        }

        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.draw()?;
            let status = self.dealer.add_card(card);
            drawn_cards.push(card);
            debug!("dealer hits {card}, value {}", self.dealer.value());
            self.emit(EventKind::DealerHit(card));

            match status {
                HandStatus::Win => {
                    self.finish(RoundOutcome::DealerBlackjack)?;
                    return Ok(drawn_cards);
                }
                HandStatus::Bust => {
                    self.finish(RoundOutcome::DealerBust)?;
                    return Ok(drawn_cards);
                }
                HandStatus::Open => {}
            }
        }

        self.showdown()?;
        Ok(drawn_cards)
    }

    /// Compares final values once neither side has 21 or busted.
    fn showdown(&mut self) -> Result<RoundResult, RoundError> {
        let outcome = match self.player.value().cmp(&self.dealer.value()) {
            Ordering::Greater => RoundOutcome::PlayerWin,
            Ordering::Less => RoundOutcome::DealerWin,
            Ordering::Equal => RoundOutcome::Push,
        };
        self.finish(outcome)
    }
}
