//! Stack input parsing.
//!
//! Two forms are accepted:
//! - a bare digit string, one plate per digit (`"3124"`)
//! - a comma and/or whitespace separated list (`"3, 1, 2, 4"`, `"10 3 1 2 ..."`),
//!   needed once plates reach two digits

use pancake_kernel::{PlateStack, StackError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no plates given")]
    Empty,
    #[error("invalid plate size {token:?}: expected a positive integer")]
    InvalidToken { token: String },
    #[error(transparent)]
    InvalidStack(#[from] StackError),
}

/// Parse and validate a stack description.
///
/// # Errors
///
/// - [`InputError::Empty`] for blank input.
/// - [`InputError::InvalidToken`] for anything that is not a positive integer.
/// - [`InputError::InvalidStack`] if the plates do not form a valid stack.
pub fn parse_stack(input: &str) -> Result<PlateStack, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let plates = if trimmed.chars().all(|c| c.is_ascii_digit()) {
        trimmed
            .chars()
            .map(|c| parse_plate(&c.to_string()))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(parse_plate)
            .collect::<Result<Vec<_>, _>>()?
    };

    if plates.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(PlateStack::new(plates)?)
}

fn parse_plate(token: &str) -> Result<u32, InputError> {
    match token.parse::<u32>() {
        Ok(plate) if plate > 0 => Ok(plate),
        _ => Err(InputError::InvalidToken {
            token: token.to_string(),
        }),
    }
}
