use std::path::PathBuf;

/// Incorrect guesses allowed before the round is lost.
pub const MAX_GUESSES: usize = 8;
pub const DEFAULT_WORD_FILE: &str = "nouns.txt";
pub const DEFAULT_SCORE_FILE: &str = "score.txt";
pub const DEFAULT_LOG_FILE: &str = "hangman.log";

/// Run configuration, built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
    pub word_file: PathBuf,
    /// `None` runs without score tracking or the session log.
    pub persistence: Option<PersistencePaths>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistencePaths {
    pub score_file: PathBuf,
    pub log_file: PathBuf,
}

impl Default for PersistencePaths {
    fn default() -> Self {
        Self {
            score_file: PathBuf::from(DEFAULT_SCORE_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            word_file: PathBuf::from(DEFAULT_WORD_FILE),
            persistence: Some(PersistencePaths::default()),
        }
    }
}

impl GameConfig {
    /// Configuration without score file or session log.
    #[must_use]
    pub fn classic(word_file: impl Into<PathBuf>) -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            word_file: word_file.into(),
            persistence: None,
        }
    }

    #[must_use]
    pub fn with_persistence(word_file: impl Into<PathBuf>, paths: PersistencePaths) -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            word_file: word_file.into(),
            persistence: Some(paths),
        }
    }
}
