use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::action::{Action, ActionSource, ScriptedActions};
use crate::deck::RandomDeck;
use crate::error::RoundError;
use crate::event::TableObserver;
use crate::options::GameOptions;
use crate::result::RoundResult;

use super::Round;

/// A blackjack table that plays rounds one after another.
///
/// The table only hands out rounds; money stays with the caller (see
/// [`crate::Bankroll`]). Every round gets a fresh deck and its own generator
/// seeded from the table's generator, so a table created with the same seed
/// deals the same sequence of rounds.
#[derive(Debug, Clone)]
pub struct Game {
    /// Table options.
    pub options: GameOptions,
    /// Seeds each round's deck.
    rng: ChaCha8Rng,
    /// Rounds started so far.
    rounds: u64,
}

impl Game {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Action, Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let result = game.play_scripted(10, &[Action::Stand]);
    /// assert!(result.is_ok());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            rounds: 0,
        }
    }

    /// Reseeds the generator used for subsequent rounds.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Returns the number of rounds started at this table.
    #[must_use]
    pub const fn rounds_played(&self) -> u64 {
        self.rounds
    }

    /// Starts a new round for `bet` with a freshly seeded full deck.
    #[must_use]
    pub fn new_round(&mut self, bet: usize) -> Round<RandomDeck> {
        let seed: u64 = self.rng.random();
        self.rounds += 1;
        debug!("round {} starts, bet {bet}", self.rounds);
        Round::new(RandomDeck::new(seed), bet, self.options)
    }

    /// Plays a complete round, asking `actions` for decisions and reporting
    /// every hand change to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the action source fails or supplies a disallowed
    /// action, or a round invariant is broken.
    pub fn play_round<A, O>(
        &mut self,
        bet: usize,
        actions: A,
        observer: O,
    ) -> Result<RoundResult, RoundError>
    where
        A: ActionSource,
        O: TableObserver,
    {
        self.new_round(bet).with_observer(observer).play(actions)
    }

    /// Plays a complete round from an already-validated action sequence,
    /// declining insurance.
    ///
    /// Actions are consumed from the front. Play stops as soon as the round
    /// resolves, even if actions remain.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ActionError::Exhausted`] (wrapped) if the sequence
    /// ends while the player still has to act, or
    /// [`crate::ActionError::NotAllowed`] if an action is invalid at its
    /// point in the round.
    pub fn play_scripted(&mut self, bet: usize, actions: &[Action]) -> Result<RoundResult, RoundError> {
        self.play_round(bet, ScriptedActions::new(actions.iter().copied()), ())
    }
}
