use std::io;
use std::path::PathBuf;

/// Failures that end a run. Bad guesses are not here; see [`crate::guess::GuessError`].
#[derive(Debug, thiserror::Error)]
pub enum HangmanError {
    #[error("Word file {} does not exist.", .0.display())]
    WordFileNotFound(PathBuf),

    #[error("Word file {} contains no words.", .0.display())]
    EmptyWordList(PathBuf),

    #[error("Cannot access score file {}: {source}", path.display())]
    ScoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Score file {} is malformed: {contents:?}", path.display())]
    MalformedScore { path: PathBuf, contents: String },

    #[error("Cannot write session log {}: {source}", path.display())]
    SessionLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, HangmanError>;
