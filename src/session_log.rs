use crate::debug_log;
use crate::error::{HangmanError, Result};
use crate::game_state::Outcome;
use crate::guess::GuessSet;
use chrono::{DateTime, Local, TimeZone};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Append-only record of finished rounds. Never read back.
#[derive(Debug, Clone)]
pub struct SessionLog {
    path: PathBuf,
}

/// `<SUCCESS|FAILURE> <YYYYMMDD-HHMMSS> <WORD> <GUESSES>`
pub fn format_entry<Tz: TimeZone>(
    outcome: Outcome,
    timestamp: &DateTime<Tz>,
    word: &str,
    guesses: &GuessSet,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let tag = match outcome {
        Outcome::Won => "SUCCESS",
        Outcome::Lost => "FAILURE",
    };
    let letters: String = guesses.iter().collect();
    format!(
        "{tag} {} {word} {letters}",
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

impl SessionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, outcome: Outcome, word: &str, guesses: &GuessSet) -> Result<()> {
        self.append_at(outcome, &Local::now(), word, guesses)
    }

    pub fn append_at<Tz: TimeZone>(
        &self,
        outcome: Outcome,
        timestamp: &DateTime<Tz>,
        word: &str,
        guesses: &GuessSet,
    ) -> Result<()>
    where
        Tz::Offset: std::fmt::Display,
    {
        let line = format_entry(outcome, timestamp, word, guesses);
        let to_log_error = |source| HangmanError::SessionLog {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_log_error)?;
        writeln!(file, "{line}").map_err(to_log_error)?;
        debug_log!("Appended '{}' to {}", line, self.path.display());
        Ok(())
    }
}
