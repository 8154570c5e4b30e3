use crate::error::{HangmanError, Result};
use crate::info_log;
use std::fs;
use std::path::{Path, PathBuf};

/// Cumulative results across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub games_played: u64,
    pub games_won: u64,
}

impl Score {
    #[must_use]
    pub fn new(games_played: u64, games_won: u64) -> Self {
        Self {
            games_played,
            games_won,
        }
    }

    /// Counted when a round starts, before its outcome is known.
    pub fn record_start(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
    }

    pub fn record_win(&mut self) {
        self.games_won = self.games_won.saturating_add(1);
    }

    /// Won/played as a whole percentage, rounding half to even. 0 before any game.
    #[must_use]
    pub fn success_rate(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        let rate = self.games_won as f64 / self.games_played as f64 * 100.0;
        rate.round_ties_even() as u32
    }

    /// Parse `"<played> <won>"`. Anything other than exactly two integers is rejected.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let played = fields.next()?.parse().ok()?;
        let won = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        Some(Self::new(played, won))
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.games_played, self.games_won)
    }
}

/// Flat-file score record. Each call opens, reads or rewrites, and closes the file.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or malformed file is an error; there is no implicit zero score.
    pub fn load(&self) -> Result<Score> {
        let contents = fs::read_to_string(&self.path).map_err(|source| HangmanError::ScoreFile {
            path: self.path.clone(),
            source,
        })?;
        let first_line = contents.lines().next().unwrap_or_default();
        let score = Score::parse(first_line).ok_or_else(|| HangmanError::MalformedScore {
            path: self.path.clone(),
            contents: contents.clone(),
        })?;
        info_log!("Loaded score {} from {}", score, self.path.display());
        Ok(score)
    }

    pub fn save(&self, score: &Score) -> Result<()> {
        fs::write(&self.path, format!("{score}\n")).map_err(|source| HangmanError::ScoreFile {
            path: self.path.clone(),
            source,
        })?;
        info_log!("Saved score {} to {}", score, self.path.display());
        Ok(())
    }
}
