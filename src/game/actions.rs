use log::debug;

use crate::action::Action;
use crate::card::Card;
use crate::deck::CardSource;
use crate::error::{ActionError, RoundError};
use crate::event::{EventKind, TableObserver};
use crate::hand::HandStatus;
use crate::result::RoundOutcome;

use super::{Round, RoundState};

impl<S: CardSource, O: TableObserver> Round<S, O> {
    /// Applies one player action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is not valid in the current state or
    /// the card source runs dry.
    pub fn apply(&mut self, action: Action) -> Result<(), RoundError> {
        match action {
            Action::Hit => self.hit().map(|_| ()),
            Action::Stand => self.stand(),
            Action::DoubleDown => self.double_down().map(|_| ()),
            Action::Quit => self.quit(),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 ends the round with [`RoundOutcome::PlayerBlackjack`];
    /// going over ends it with [`RoundOutcome::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player turn or the card source runs
    /// dry.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        let card = self.draw()?;
        let status = self.player.add_card(card);
        self.has_hit = true;
        debug!("player hits {card}, value {}", self.player.value());
        self.emit(EventKind::PlayerHit(card));

        match status {
            HandStatus::Win => {
                self.finish(RoundOutcome::PlayerBlackjack { drawn: true })?;
            }
            HandStatus::Bust => {
                self.finish(RoundOutcome::PlayerBust)?;
            }
            HandStatus::Open => {}
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Standing on 21 ends the round with [`RoundOutcome::PlayerBlackjack`];
    /// otherwise the dealer plays.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;

        debug!("player stands on {}", self.player.value());
        self.emit(EventKind::PlayerStood);

        if self.player.status() == HandStatus::Win {
            self.finish(RoundOutcome::PlayerBlackjack { drawn: false })?;
        } else {
            self.transition(RoundState::DealerTurn);
        }

        Ok(())
    }

    /// Player action: Double down (double the stake, receive one card).
    ///
    /// Only allowed as the first action. 21 and bust end the round at once;
    /// any other value hands over to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player turn, the player has already
    /// hit, or the card source runs dry.
    pub fn double_down(&mut self) -> Result<Card, RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;
        if self.has_hit {
            return Err(ActionError::NotAllowed(Action::DoubleDown).into());
        }

        self.doubled_down = true;
        let card = self.draw()?;
        let status = self.player.add_card(card);
        debug!("player doubles down on {card}, value {}", self.player.value());
        self.emit(EventKind::PlayerDoubled(card));

        match status {
            HandStatus::Win => {
                self.finish(RoundOutcome::PlayerBlackjack { drawn: true })?;
            }
            HandStatus::Bust => {
                self.finish(RoundOutcome::PlayerBust)?;
            }
            HandStatus::Open => self.transition(RoundState::DealerTurn),
        }

        Ok(card)
    }

    /// Player action: Quit (abandon the round with no payout).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player turn or the hands fail
    /// validation.
    pub fn quit(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;
        debug!("player quits");
        self.finish(RoundOutcome::PlayerQuit)?;
        Ok(())
    }
}
