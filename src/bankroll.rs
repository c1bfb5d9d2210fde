//! The caller-side pot that turns payout codes into chips.

use log::debug;

use crate::error::BetError;
use crate::options::{GameOptions, RoundingMode};
use crate::result::Payout;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// A player's pot across rounds.
///
/// The engine never touches money: a round returns a [`Payout`] and the
/// bankroll applies it to the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    pot: usize,
    min_bet: usize,
    rounding: RoundingMode,
}

impl Bankroll {
    /// Creates a bankroll holding `pot` chips, using the table's bet minimum
    /// and rounding mode.
    #[must_use]
    pub const fn new(pot: usize, options: &GameOptions) -> Self {
        Self {
            pot,
            min_bet: options.min_bet,
            rounding: options.rounding,
        }
    }

    /// Returns the current pot.
    #[must_use]
    pub const fn pot(&self) -> usize {
        self.pot
    }

    /// Returns whether the pot is empty.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.pot == 0
    }

    /// Checks that `amount` can be bet.
    ///
    /// The pot is not touched until the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is below the table minimum (or zero) or
    /// larger than the pot.
    pub const fn place_bet(&self, amount: usize) -> Result<usize, BetError> {
        if amount == 0 || amount < self.min_bet {
            return Err(BetError::BelowMinimum);
        }
        if amount > self.pot {
            return Err(BetError::InsufficientFunds);
        }
        Ok(amount)
    }

    /// Applies `payout` to `bet` and returns the signed change in chips.
    ///
    /// Fractional results are rounded in magnitude with the table's rounding
    /// mode. A loss larger than the pot empties it.
    pub fn settle(&mut self, bet: usize, payout: Payout) -> isize {
        let multiplier = payout.multiplier();
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let magnitude = round_amount(
            (bet as f64) * f64::from(multiplier.halves().unsigned_abs()) / 2.0,
            self.rounding,
        );

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let delta = if multiplier.halves() < 0 {
            self.pot = self.pot.saturating_sub(magnitude);
            -(magnitude as isize)
        } else {
            self.pot += magnitude;
            magnitude as isize
        };

        debug!(
            "settled bet {bet} at {multiplier} (code {}): {delta:+}, pot {}",
            payout.code(),
            self.pot
        );
        delta
    }
}
