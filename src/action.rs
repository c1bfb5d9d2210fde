//! Player actions and the sources that supply them.

use alloc::collections::VecDeque;
use core::fmt;
use core::str::FromStr;

use crate::error::ActionError;
use crate::event::TableView;

/// A player decision during the player turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the current hand and hand over to the dealer.
    Stand,
    /// Double the stake, draw exactly one card, then hand over to the dealer.
    DoubleDown,
    /// Abandon the round with no payout.
    Quit,
}

impl Action {
    /// Actions accepted as the first decision of a turn.
    pub const OPENING: [Self; 4] = [Self::Hit, Self::Stand, Self::DoubleDown, Self::Quit];

    /// Actions accepted after the player has hit at least once.
    pub const FOLLOW_UP: [Self; 3] = [Self::Hit, Self::Stand, Self::Quit];

    /// Returns the single-letter token for this action.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Hit => 'h',
            Self::Stand => 's',
            Self::DoubleDown => 'd',
            Self::Quit => 'q',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::DoubleDown => "double down",
            Self::Quit => "quit",
        })
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let is = |candidate: &str| token.eq_ignore_ascii_case(candidate);

        if is("h") || is("hit") {
            Ok(Self::Hit)
        } else if is("s") || is("stand") {
            Ok(Self::Stand)
        } else if is("d") || is("double") || is("doubledown") {
            Ok(Self::DoubleDown)
        } else if is("q") || is("quit") {
            Ok(Self::Quit)
        } else {
            Err(ActionError::UnknownToken)
        }
    }
}

/// Supplies player decisions to a round.
///
/// Calls block until a decision is available.
pub trait ActionSource {
    /// Returns the next player action.
    ///
    /// `allowed` lists the actions valid at this point. The round rejects
    /// anything else with [`ActionError::NotAllowed`].
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] when no action can be supplied.
    fn next_action(&mut self, view: &TableView<'_>, allowed: &[Action])
    -> Result<Action, ActionError>;

    /// Asks whether the player buys insurance, costing half of `bet`.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] when no answer can be supplied.
    fn take_insurance(&mut self, view: &TableView<'_>, bet: usize) -> Result<bool, ActionError>;
}

impl<A: ActionSource + ?Sized> ActionSource for &mut A {
    fn next_action(
        &mut self,
        view: &TableView<'_>,
        allowed: &[Action],
    ) -> Result<Action, ActionError> {
        (**self).next_action(view, allowed)
    }

    fn take_insurance(&mut self, view: &TableView<'_>, bet: usize) -> Result<bool, ActionError> {
        (**self).take_insurance(view, bet)
    }
}

/// A pre-validated queue of actions consumed head first.
///
/// Never re-prompts: an empty queue is [`ActionError::Exhausted`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedActions {
    actions: VecDeque<Action>,
    insurance: bool,
}

impl ScriptedActions {
    /// Creates a script that plays `actions` in order and declines insurance.
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            insurance: false,
        }
    }

    /// Parses a whitespace or comma separated list of tokens, e.g. `"h h s"`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnknownToken`] if any token is not an action.
    pub fn parse(script: &str) -> Result<Self, ActionError> {
        let actions = script
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect::<Result<VecDeque<Action>, _>>()?;
        Ok(Self {
            actions,
            insurance: false,
        })
    }

    /// Sets the answer given when insurance is offered.
    #[must_use]
    pub fn with_insurance(mut self, take: bool) -> Self {
        self.insurance = take;
        self
    }

    /// Returns the actions not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> &VecDeque<Action> {
        &self.actions
    }
}

impl ActionSource for ScriptedActions {
    fn next_action(
        &mut self,
        _view: &TableView<'_>,
        _allowed: &[Action],
    ) -> Result<Action, ActionError> {
        self.actions.pop_front().ok_or(ActionError::Exhausted)
    }

    fn take_insurance(&mut self, _view: &TableView<'_>, _bet: usize) -> Result<bool, ActionError> {
        Ok(self.insurance)
    }
}
