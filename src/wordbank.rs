use crate::error::{HangmanError, Result};
use crate::{debug_log, info_log};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Split a newline-delimited word list. Lines are kept as-is apart from the
/// line terminator; no length or content filtering is applied.
pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines().map(str::to_string).collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => HangmanError::WordFileNotFound(path.to_path_buf()),
        _ => HangmanError::Io(e),
    })?;
    let words = load_words_from_str(&data);
    if words.is_empty() {
        return Err(HangmanError::EmptyWordList(path.to_path_buf()));
    }
    info_log!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Pick a word uniformly at random and uppercase it. Every call draws from
/// the full list, so repeats across rounds are possible.
pub fn select_word<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> Option<String> {
    let word = words.choose(rng)?.to_uppercase();
    debug_log!("Selected word '{}'", word);
    Some(word)
}
