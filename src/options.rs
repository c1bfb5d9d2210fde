//! Table configuration options.

/// Rounding mode for fractional settlements.
///
/// Payouts of ×1.5 and ×3 leave half chips on odd bets. The pot holds whole
/// chips, so the bankroll rounds the magnitude of every settlement with this
/// mode; a 5-chip bet paid at ×1.5 settles as 7 with `Down` and 8 with `Up`
/// or `Nearest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    #[default]
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// The dealer always hits below 17 and stands on 17 or more; that policy is
/// not configurable. Use the builder methods to customize the rest:
///
/// ```
/// use bjcore::{GameOptions, RoundingMode};
///
/// let options = GameOptions::default()
///     .with_insurance(false)
///     .with_min_bet(5)
///     .with_rounding(RoundingMode::Nearest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether insurance is offered when the dealer shows an Ace.
    pub insurance: bool,
    /// Smallest bet the bankroll accepts.
    pub min_bet: usize,
    /// Rounding mode for fractional settlements.
    pub rounding: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            insurance: true,
            min_bet: 1,
            rounding: RoundingMode::Down,
        }
    }
}

impl GameOptions {
    /// Sets whether insurance is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_insurance(false);
    /// assert_eq!(options.insurance, false);
    /// ```
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_bet(10);
    /// assert_eq!(options.min_bet, 10);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the rounding mode for settlements.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding(RoundingMode::Up);
    /// assert_eq!(options.rounding, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }
}
