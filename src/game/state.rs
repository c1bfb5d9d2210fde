//! Round state types.

/// Round state.
///
/// A round moves forward through these states and never returns to an
/// earlier one. Blackjack, bust and quit jump straight to `Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the initial two cards each.
    Dealing,
    /// Dealer shows an Ace: insurance offer and dealer blackjack check.
    InsuranceCheck,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result is available.
    Resolved,
}
