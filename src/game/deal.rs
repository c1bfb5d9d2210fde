use log::debug;

use crate::deck::CardSource;
use crate::error::RoundError;
use crate::event::{EventKind, TableObserver};
use crate::hand::HandStatus;
use crate::result::{RoundOutcome, RoundResult};

use super::{Round, RoundState};

impl<S: CardSource, O: TableObserver> Round<S, O> {
    /// Deals two cards each, in the order player, player, dealer, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt or the card
    /// source runs dry.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::Dealing)?;

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        self.player.validate()?;
        self.dealer.validate()?;

        debug!(
            "dealt player {} (value {}), dealer shows {}",
            self.player.len(),
            self.player.value(),
            self.dealer.visible_value()
        );
        self.emit(EventKind::Dealt);
        self.transition(RoundState::InsuranceCheck);

        Ok(())
    }

    /// Returns whether the player must be asked about insurance.
    ///
    /// Insurance is offered when the dealer's first card is an Ace and the
    /// table offers insurance.
    pub fn insurance_offered(&self) -> bool {
        self.state == RoundState::InsuranceCheck && self.options.insurance && self.dealer_shows_ace()
    }

    fn dealer_shows_ace(&self) -> bool {
        self.dealer.up_card().is_some_and(crate::card::Card::is_ace)
    }

    /// Records the insurance decision and checks for dealer blackjack.
    ///
    /// When the dealer shows an Ace and holds 21 the round ends: with
    /// [`RoundOutcome::InsurancePaid`] if insurance was bought, otherwise with
    /// [`RoundOutcome::DealerBlackjack`]. In every other case play moves on to
    /// the player turn. `take` is ignored when insurance is not offered.
    ///
    /// Returns the result if the round ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the insurance check, or the
    /// final hands fail validation.
    pub fn resolve_insurance(&mut self, take: bool) -> Result<Option<RoundResult>, RoundError> {
        self.ensure_state(RoundState::InsuranceCheck)?;

        if !self.dealer_shows_ace() {
            self.transition(RoundState::PlayerTurn);
            return Ok(None);
        }

        self.insurance_purchased = take && self.options.insurance;
        if self.insurance_purchased {
            debug!("insurance bought for {}", self.bet / 2);
        }

        if self.dealer.status() == HandStatus::Win {
            self.dealer.reveal_hole();
            self.emit(EventKind::DealerRevealed);
            let outcome = if self.insurance_purchased {
                RoundOutcome::InsurancePaid
            } else {
                RoundOutcome::DealerBlackjack
            };
            return self.finish(outcome).map(Some);
        }

        debug!("no dealer blackjack");
        self.transition(RoundState::PlayerTurn);
        Ok(None)
    }
}
