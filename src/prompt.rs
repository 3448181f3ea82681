//! Yes/no confirmation prompts
//!
//! The config bootstrap asks before writing into the home directory. The
//! question goes through the `Confirm` trait so callers can answer it
//! without a terminal.

use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::Error as DialoguerError;

/// Something that can answer a yes/no question
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Provider for the current process: an interactive dialoguer prompt on a
/// terminal, a plain line read from stdin otherwise.
pub fn stdio() -> Box<dyn Confirm> {
    if io::stdin().is_terminal() {
        Box::new(DialoguerConfirm)
    } else {
        Box::new(LineConfirm::new(io::stdin().lock(), io::stdout()))
    }
}

/// Interactive `[y/N]` prompt; Esc, Ctrl+C and the default all mean no
pub struct DialoguerConfirm;

impl Confirm for DialoguerConfirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        interpret(
            dialoguer::Confirm::new()
                .with_prompt(question)
                .default(false)
                .interact_opt(),
        )
    }
}

fn interpret(result: Result<Option<bool>, DialoguerError>) -> io::Result<bool> {
    match result {
        Ok(answer) => Ok(answer.unwrap_or(false)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(DialoguerError::IO(err)) => Err(err),
    }
}

/// Asks on a writer and reads the answer as one line from a reader.
///
/// Only the exact answer `y` counts as yes. End of input counts as no.
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question}[y/N] -> ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }

        let answer = answer
            .strip_suffix('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or(&answer);
        Ok(answer == "y")
    }
}

/// Fixed answer for tests
#[cfg(test)]
pub struct Answer(pub bool);

#[cfg(test)]
impl Confirm for Answer {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(self.0)
    }
}
