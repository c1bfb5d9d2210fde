//! Round outcomes and the outcome-to-payout table.

use core::fmt;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The player reached exactly 21.
    ///
    /// `drawn` is true when 21 was reached by drawing a card (hit or double
    /// down) and false when the player stood on 21.
    PlayerBlackjack {
        /// Whether the 21 came from a drawn card.
        drawn: bool,
    },
    /// The player went over 21.
    PlayerBust,
    /// The dealer reached exactly 21.
    DealerBlackjack,
    /// The dealer went over 21.
    DealerBust,
    /// Neither side hit 21 or busted and the player's value was higher.
    PlayerWin,
    /// Neither side hit 21 or busted and the dealer's value was higher.
    DealerWin,
    /// Equal values.
    Push,
    /// The dealer had blackjack after the player bought insurance.
    InsurancePaid,
    /// The player quit the round.
    PlayerQuit,
}

/// A signed multiple of the original bet, in steps of one half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multiplier {
    halves: i16,
}

impl Multiplier {
    /// Nothing won or lost.
    pub const ZERO: Self = Self::from_halves(0);

    /// Creates a multiplier of `halves / 2`.
    #[must_use]
    pub const fn from_halves(halves: i16) -> Self {
        Self { halves }
    }

    /// Returns the multiplier in half-bet units.
    #[must_use]
    pub const fn halves(self) -> i16 {
        self.halves
    }

    /// Returns the multiplier as a float.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.halves) / 2.0
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.halves {
            0 => "",
            h if h < 0 => "-",
            _ => "+",
        };
        let abs = self.halves.unsigned_abs();
        if abs % 2 == 0 {
            write!(f, "{sign}{}", abs / 2)
        } else {
            write!(f, "{sign}{}.5", abs / 2)
        }
    }
}

/// The signed payout code a round hands back to the bankroll owner.
///
/// | code | meaning | multiplier |
/// |---|---|---|
/// | 0 | push or quit | 0 |
/// | 1 / -1 | win / loss | +1 / -1 |
/// | 2 / -2 | doubled win / loss | +2 / -2 |
/// | 3 | 21 on a drawn card | +1.5 |
/// | 4 | 21 on a doubled draw | +3 |
/// | -3 | dealer blackjack at the insurance check, insured | -1.5 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Payout {
    code: i8,
}

impl Payout {
    /// Push or quit.
    pub const NONE: Self = Self { code: 0 };
    /// Ordinary win.
    pub const WIN: Self = Self { code: 1 };
    /// Ordinary loss.
    pub const LOSS: Self = Self { code: -1 };
    /// Win with a doubled stake.
    pub const DOUBLE_WIN: Self = Self { code: 2 };
    /// Loss with a doubled stake.
    pub const DOUBLE_LOSS: Self = Self { code: -2 };
    /// 21 reached on a drawn card.
    pub const BLACKJACK: Self = Self { code: 3 };
    /// 21 reached on a doubled draw.
    pub const DOUBLE_BLACKJACK: Self = Self { code: 4 };
    /// Dealer blackjack after insurance was bought.
    pub const INSURANCE_LOSS: Self = Self { code: -3 };

    /// Looks up a payout by its code.
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            -3..=4 => Some(Self { code }),
            _ => None,
        }
    }

    /// Returns the payout code.
    #[must_use]
    pub const fn code(self) -> i8 {
        self.code
    }

    /// Returns the multiple of the original bet this code stands for.
    #[must_use]
    pub const fn multiplier(self) -> Multiplier {
        Multiplier::from_halves(match self.code {
            1 => 2,
            -1 => -2,
            2 => 4,
            -2 => -4,
            3 => 3,
            4 => 6,
            -3 => -3,
            _ => 0,
        })
    }
}

/// Maps a terminal outcome to its payout.
///
/// Doubling scales ordinary wins and losses to ±2 and a drawn 21 to code 4.
/// Code -3 is only reached through [`RoundOutcome::InsurancePaid`], which the
/// insurance check produces. A side bet bought at the check does not change
/// the code of a dealer 21 drawn later in the round.
#[must_use]
pub const fn resolve(
    outcome: RoundOutcome,
    doubled_down: bool,
    _insurance_purchased: bool,
) -> Payout {
    const fn scaled(doubled_down: bool, single: Payout, double: Payout) -> Payout {
        if doubled_down { double } else { single }
    }

    match outcome {
        RoundOutcome::PlayerBlackjack { drawn: true } => {
            scaled(doubled_down, Payout::BLACKJACK, Payout::DOUBLE_BLACKJACK)
        }
        RoundOutcome::PlayerBlackjack { drawn: false }
        | RoundOutcome::DealerBust
        | RoundOutcome::PlayerWin => scaled(doubled_down, Payout::WIN, Payout::DOUBLE_WIN),
        RoundOutcome::PlayerBust | RoundOutcome::DealerBlackjack | RoundOutcome::DealerWin => {
            scaled(doubled_down, Payout::LOSS, Payout::DOUBLE_LOSS)
        }
        RoundOutcome::InsurancePaid => Payout::INSURANCE_LOSS,
        RoundOutcome::Push | RoundOutcome::PlayerQuit => Payout::NONE,
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// Whether the player doubled down.
    pub doubled_down: bool,
    /// Whether the player bought insurance.
    pub insurance_purchased: bool,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

impl RoundResult {
    /// Returns the payout for this result.
    #[must_use]
    pub const fn payout(&self) -> Payout {
        resolve(self.outcome, self.doubled_down, self.insurance_purchased)
    }
}
