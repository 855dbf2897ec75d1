//! Interactive stack prompt.
//!
//! Reads lines until one parses as a stack or is `r` (random default stack).
//! Every rejected line gets a one-line explanation and another attempt.

use std::io::{self, BufRead, Write};

use pancake_kernel::PlateStack;
use thiserror::Error;

use crate::input::parse_stack;
use crate::random::{random_stack, DEFAULT_RANDOM_SIZE};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before a valid stack was entered")]
    Closed,
    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("could not build a random stack: {0}")]
    Random(#[from] pancake_kernel::StackError),
}

/// What the user chose at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptChoice {
    Entered(PlateStack),
    Random(PlateStack),
}

impl PromptChoice {
    #[must_use]
    pub fn into_stack(self) -> PlateStack {
        match self {
            Self::Entered(stack) | Self::Random(stack) => stack,
        }
    }
}

/// Prompt on `output` and read from `input` until a valid answer arrives.
///
/// # Errors
///
/// - [`PromptError::Closed`] if `input` reaches EOF first.
/// - [`PromptError::Io`] on read or write failure.
pub fn prompt_stack<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    seed: Option<u64>,
) -> Result<PromptChoice, PromptError> {
    writeln!(
        output,
        "Enter pancake stack with sizes consecutively (e.g., 3124)."
    )?;
    writeln!(
        output,
        "Enter \"r\" for a randomized {DEFAULT_RANDOM_SIZE}-pancake stack."
    )?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("r") {
            return Ok(PromptChoice::Random(random_stack(DEFAULT_RANDOM_SIZE, seed)?));
        }
        match parse_stack(answer) {
            Ok(stack) => return Ok(PromptChoice::Entered(stack)),
            Err(err) => {
                tracing::debug!(%answer, error = %err, "rejected prompt input");
                writeln!(output, "Invalid input ({err}). Please try again:")?;
                output.flush()?;
            }
        }
    }
}
