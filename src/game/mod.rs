//! Round state machine and game session.

use log::debug;

use crate::action::{Action, ActionSource};
use crate::card::{Card, DECK_SIZE};
use crate::deck::CardSource;
use crate::error::{ActionError, RoundError};
use crate::event::{EventKind, TableEvent, TableObserver, TableView};
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::{RoundOutcome, RoundResult};

mod actions;
mod dealer;
mod deal;
mod session;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use session::Game;
pub use state::RoundState;

/// One round of blackjack between a single player and the dealer.
///
/// The round owns its card source and both hands. It can be driven step by
/// step ([`Round::deal`], [`Round::resolve_insurance`], [`Round::hit`], ...)
/// or played to completion with [`Round::play`].
///
/// The observer `O` receives a [`TableEvent`] after every hand change.
#[derive(Debug)]
pub struct Round<S, O = ()> {
    /// Where cards come from.
    source: S,
    /// Presentation hook.
    observer: O,
    /// Original bet, used for the insurance offer.
    bet: usize,
    /// Table options.
    options: GameOptions,
    /// Current state.
    state: RoundState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Whether the player doubled down.
    doubled_down: bool,
    /// Whether the player bought insurance.
    insurance_purchased: bool,
    /// Whether the player has already hit this turn.
    has_hit: bool,
    /// Terminal result, set on entering `Resolved`.
    result: Option<RoundResult>,
}

impl<S: CardSource> Round<S> {
    /// Creates a round for `bet` that will draw from `source`.
    #[must_use]
    pub const fn new(source: S, bet: usize, options: GameOptions) -> Self {
        Self {
            source,
            observer: (),
            bet,
            options,
            state: RoundState::Dealing,
            player: Hand::new(),
            dealer: DealerHand::new(),
            doubled_down: false,
            insurance_purchased: false,
            has_hit: false,
            result: None,
        }
    }
}

impl<S: CardSource, O: TableObserver> Round<S, O> {
    /// Replaces the observer that receives table events.
    #[must_use]
    pub fn with_observer<P: TableObserver>(self, observer: P) -> Round<S, P> {
        Round {
            source: self.source,
            observer,
            bet: self.bet,
            options: self.options,
            state: self.state,
            player: self.player,
            dealer: self.dealer,
            doubled_down: self.doubled_down,
            insurance_purchased: self.insurance_purchased,
            has_hit: self.has_hit,
            result: self.result,
        }
    }

    /// Plays the round to completion.
    ///
    /// Insurance decisions and player actions are requested from `actions`.
    /// An action outside [`Round::allowed_actions`] aborts the round with
    /// [`ActionError::NotAllowed`]; interactive sources are expected to
    /// re-prompt before returning one.
    ///
    /// # Errors
    ///
    /// Returns an error if the card source runs dry, the action source fails
    /// or supplies a disallowed action, or a hand breaks its invariants.
    pub fn play<A: ActionSource>(mut self, mut actions: A) -> Result<RoundResult, RoundError> {
        if self.state == RoundState::Dealing {
            self.deal()?;
        }

        if self.state == RoundState::InsuranceCheck {
            let take = if self.insurance_offered() {
                actions.take_insurance(&self.view(), self.bet)?
            } else {
                false
            };
            self.resolve_insurance(take)?;
        }

        while self.state == RoundState::PlayerTurn {
            let allowed = self.allowed_actions();
            let action = actions.next_action(&self.view(), allowed)?;
            if !allowed.contains(&action) {
                return Err(ActionError::NotAllowed(action).into());
            }
            self.apply(action)?;
        }

        if self.state == RoundState::DealerTurn {
            self.dealer_play()?;
        }

        self.result.ok_or_else(|| ActionError::InvalidState.into())
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the terminal result once the round is resolved.
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the original bet.
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns whether the player doubled down.
    pub const fn is_doubled_down(&self) -> bool {
        self.doubled_down
    }

    /// Returns whether the player bought insurance.
    pub const fn is_insured(&self) -> bool {
        self.insurance_purchased
    }

    /// Returns the number of cards still in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.source.deck().len()
    }

    /// Returns a view of both hands, hiding the hole card until the dealer
    /// reveals it.
    pub fn view(&self) -> TableView<'_> {
        TableView {
            player: self.player.cards(),
            dealer: self.dealer.cards(),
            dealer_concealed: !self.dealer.is_hole_revealed(),
        }
    }

    fn draw(&mut self) -> Result<Card, RoundError> {
        Ok(self.source.draw()?)
    }

    fn emit(&mut self, kind: EventKind) {
        let view = TableView {
            player: self.player.cards(),
            dealer: self.dealer.cards(),
            dealer_concealed: !self.dealer.is_hole_revealed(),
        };
        self.observer.on_event(&TableEvent { kind, view });
    }

    fn ensure_state(&self, expected: RoundState) -> Result<(), ActionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    fn transition(&mut self, next: RoundState) {
        debug!("round {:?} -> {next:?}", self.state);
        self.state = next;
    }

    /// Enters `Resolved` with `outcome` and returns the result.
    fn finish(&mut self, outcome: RoundOutcome) -> Result<RoundResult, RoundError> {
        self.player.validate()?;
        self.dealer.validate()?;
        debug_assert_eq!(
            self.source.deck().len() + self.player.len() + self.dealer.len(),
            DECK_SIZE
        );

        let result = RoundResult {
            outcome,
            doubled_down: self.doubled_down,
            insurance_purchased: self.insurance_purchased,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        };
        self.transition(RoundState::Resolved);
        debug!(
            "round resolved: {outcome:?}, player {} dealer {}, payout code {}",
            result.player_value,
            result.dealer_value,
            result.payout().code()
        );
        self.result = Some(result);
        self.emit(EventKind::Resolved(outcome));
        Ok(result)
    }

    /// Returns the actions accepted in the current state.
    ///
    /// Double down is only offered as the first action of the turn.
    pub const fn allowed_actions(&self) -> &'static [Action] {
        match self.state {
            RoundState::PlayerTurn if self.has_hit => &Action::FOLLOW_UP,
            RoundState::PlayerTurn => &Action::OPENING,
            _ => &[],
        }
    }
}
