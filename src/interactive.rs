//! Line-based action source for terminal play.

use alloc::string::String;
use std::io::{self, BufRead, Write};

use log::warn;

use crate::action::{Action, ActionSource};
use crate::error::ActionError;
use crate::event::TableView;

/// Reads actions from a line reader, prompting on a writer.
///
/// Unknown tokens and actions not allowed at this point are rejected and the
/// prompt is repeated. End of input is [`ActionError::InputClosed`].
#[derive(Debug)]
pub struct LineActions<R, W> {
    reader: R,
    writer: W,
}

impl LineActions<io::StdinLock<'static>, io::Stdout> {
    /// Reads from standard input and prompts on standard output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineActions<R, W> {
    /// Creates a source over `reader`, writing prompts to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the source and returns the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt(&mut self, text: &str) -> Result<String, ActionError> {
        write!(self.writer, "{text}")
            .and_then(|()| self.writer.flush())
            .map_err(|_| ActionError::InputClosed)?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => Err(ActionError::InputClosed),
            Ok(_) => Ok(line.trim().to_lowercase()),
        }
    }
}

fn action_prompt(allowed: &[Action]) -> &'static str {
    if allowed.contains(&Action::DoubleDown) {
        "press h to hit, s to stand, d to double down, q to quit.\n"
    } else {
        "press h to hit, s to stand, q to quit.\n"
    }
}

impl<R: BufRead, W: Write> ActionSource for LineActions<R, W> {
    fn next_action(
        &mut self,
        _view: &TableView<'_>,
        allowed: &[Action],
    ) -> Result<Action, ActionError> {
        loop {
            let line = self.prompt(action_prompt(allowed))?;
            match line.parse::<Action>() {
                Ok(action) if allowed.contains(&action) => return Ok(action),
                Ok(action) => warn!("rejected {action}: not allowed now"),
                Err(_) => warn!("rejected unknown action {line:?}"),
            }
        }
    }

    fn take_insurance(&mut self, _view: &TableView<'_>, bet: usize) -> Result<bool, ActionError> {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let cost = bet as f64 / 2.0;
        writeln!(self.writer, "Dealer displays an Ace.\nPurchase insurance for ${cost}?")
            .map_err(|_| ActionError::InputClosed)?;
        let answer = self.prompt("Enter 'y' or 'n': ")?;
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }
}
