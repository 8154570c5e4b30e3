use std::collections::BTreeSet;

/// Distinct uppercase letters guessed this round, iterated in ascending order.
pub type GuessSet = BTreeSet<char>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("Invalid guess.  Guesses must be a single letter.")]
    NotSingleLetter,
    #[error("Invalid guess.  Letter already used.")]
    AlreadyUsed,
}

/// Normalise a raw guess to an uppercase letter not yet in `prior`.
///
/// Uppercasing happens before the length check, so inputs whose uppercase
/// form is more than one character (e.g. `ß`) are rejected.
pub fn validate_guess(input: &str, prior: &GuessSet) -> Result<char, GuessError> {
    let upper = input.to_uppercase();
    let mut chars = upper.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => c,
        _ => return Err(GuessError::NotSingleLetter),
    };
    if prior.contains(&letter) {
        return Err(GuessError::AlreadyUsed);
    }
    Ok(letter)
}
