// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod error;
pub mod game_state;
pub mod guess;
pub mod logging;
pub mod render;
pub mod score;
pub mod session_log;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use config::{GameConfig, MAX_GUESSES, PersistencePaths};
pub use error::HangmanError;
pub use game_state::{GameInterface, GameRound, Outcome, RoundStatus, Session, play_round};
pub use guess::{GuessError, GuessSet, validate_guess};
pub use score::{Score, ScoreStore};
pub use session_log::SessionLog;
pub use wordbank::{load_words_from_file, load_words_from_str, select_word};
