//! Parsing and validation of player selections.
//!
//! The player addresses territories by 1-based id; everything past this
//! module works with 0-based indices. Any malformed selection is rejected
//! here, before the combat engine is ever invoked.

use thiserror::Error;

/// Errors that can occur when parsing an attack selection.
///
/// Every variant is recovered the same way: the session prints the
/// rejection message and prompts again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection '{0}' is not a number")]
    NotANumber(String),

    #[error("territory id {got} is out of range 1..={count}")]
    OutOfRange { got: i64, count: usize },

    #[error("attacker and defender must be different territories")]
    SameTerritory,
}

/// Parses a 1-based territory id into a 0-based index.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let id: i64 = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;
    if id < 1 || id > count as i64 {
        return Err(SelectionError::OutOfRange { got: id, count });
    }
    Ok((id - 1) as usize)
}

/// Rejects an attack of a territory on itself.
pub fn validate_pair(attacker: usize, defender: usize) -> Result<(), SelectionError> {
    if attacker == defender {
        return Err(SelectionError::SameTerritory);
    }
    Ok(())
}

/// Returns true if the answer to the continue prompt means "attack again".
pub fn wants_another(answer: &str) -> bool {
    matches!(answer.trim(), "s" | "S")
}
