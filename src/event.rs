//! Table snapshots exposed to presentation code after every hand change.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::hand_value;
use crate::result::RoundOutcome;

/// A borrowed view of both hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView<'a> {
    /// The player's cards.
    pub player: &'a [Card],
    /// All of the dealer's cards, including a concealed hole card.
    pub dealer: &'a [Card],
    /// Whether the dealer's second card is still face down.
    pub dealer_concealed: bool,
}

impl<'a> TableView<'a> {
    /// Returns the dealer cards a player is allowed to see.
    #[must_use]
    pub fn visible_dealer_cards(&self) -> &'a [Card] {
        let dealer = self.dealer;
        if self.dealer_concealed {
            &dealer[..dealer.len().min(1)]
        } else {
            dealer
        }
    }

    /// Returns the player's hand value.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        hand_value(self.player)
    }

    /// Returns the value of the visible dealer cards.
    #[must_use]
    pub fn visible_dealer_value(&self) -> u8 {
        hand_value(self.visible_dealer_cards())
    }
}

/// What changed at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Initial two cards each were dealt.
    Dealt,
    /// The player drew a card.
    PlayerHit(Card),
    /// The player doubled down and drew a card.
    PlayerDoubled(Card),
    /// The player stood.
    PlayerStood,
    /// The dealer turned over the hole card.
    DealerRevealed,
    /// The dealer drew a card.
    DealerHit(Card),
    /// The round ended.
    Resolved(RoundOutcome),
}

/// A table event with the hands as they are after the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEvent<'a> {
    /// What happened.
    pub kind: EventKind,
    /// The hands after the change.
    pub view: TableView<'a>,
}

/// Receives table events from a round.
pub trait TableObserver {
    /// Called after every hand change and once at resolution.
    fn on_event(&mut self, event: &TableEvent<'_>);
}

impl TableObserver for () {
    fn on_event(&mut self, _event: &TableEvent<'_>) {}
}

impl<O: TableObserver + ?Sized> TableObserver for &mut O {
    fn on_event(&mut self, event: &TableEvent<'_>) {
        (**self).on_event(event);
    }
}

/// An owned copy of a [`TableEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    /// What happened.
    pub kind: EventKind,
    /// The player's cards.
    pub player: Vec<Card>,
    /// The dealer's cards.
    pub dealer: Vec<Card>,
    /// Whether the dealer's second card was face down.
    pub dealer_concealed: bool,
}

/// An observer that keeps every event it receives.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<RecordedEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }
}

impl TableObserver for EventLog {
    fn on_event(&mut self, event: &TableEvent<'_>) {
        self.events.push(RecordedEvent {
            kind: event.kind,
            player: event.view.player.to_vec(),
            dealer: event.view.dealer.to_vec(),
            dealer_concealed: event.view.dealer_concealed,
        });
    }
}
