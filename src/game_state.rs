use crate::config::GameConfig;
use crate::error::{HangmanError, Result};
use crate::guess::{GuessError, GuessSet, validate_guess};
use crate::score::{Score, ScoreStore};
use crate::session_log::SessionLog;
use crate::wordbank::select_word;
use crate::{debug_log, info_log};
use rand::Rng;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Finished(Outcome),
}

/// State of a single round: the hidden word, letters tried so far and the
/// count of misses.
#[derive(Debug, Clone)]
pub struct GameRound {
    word: String,
    guesses: GuessSet,
    incorrect: usize,
    max_guesses: usize,
}

impl GameRound {
    pub fn new(word: impl Into<String>, max_guesses: usize) -> Self {
        Self {
            word: word.into(),
            guesses: GuessSet::new(),
            incorrect: 0,
            max_guesses,
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn guesses(&self) -> &GuessSet {
        &self.guesses
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    /// Word positions whose letter has been guessed.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.word.chars().filter(|c| self.guesses.contains(c)).count()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.found_count() == self.word.chars().count() {
            RoundStatus::Finished(Outcome::Won)
        } else if self.incorrect >= self.max_guesses {
            RoundStatus::Finished(Outcome::Lost)
        } else {
            RoundStatus::InProgress
        }
    }

    pub fn validate(&self, input: &str) -> std::result::Result<char, GuessError> {
        validate_guess(input, &self.guesses)
    }

    /// Record an already-validated letter. Returns whether it occurs in the word.
    pub fn apply_guess(&mut self, letter: char) -> bool {
        debug_assert!(self.status() == RoundStatus::InProgress);
        self.guesses.insert(letter);
        let hit = self.word.contains(letter);
        if !hit {
            self.incorrect += 1;
        }
        debug_log!(
            "Guess '{}' {} ({} incorrect)",
            letter,
            if hit { "hit" } else { "missed" },
            self.incorrect
        );
        hit
    }
}

/// Terminal side of the game: drawing and prompting.
///
/// `read_*` methods return `Ok(None)` once input is exhausted.
pub trait GameInterface {
    fn clear_screen(&mut self) -> io::Result<()>;
    fn display_header(&mut self, score: Option<&Score>) -> io::Result<()>;
    fn display_gallows(&mut self, incorrect: usize) -> io::Result<()>;
    fn display_guesses(&mut self, guesses: &GuessSet) -> io::Result<()>;
    /// Draw the masked word and return how many positions are revealed.
    fn display_word(&mut self, word: &str, guesses: &GuessSet) -> io::Result<usize>;
    fn read_guess(&mut self) -> io::Result<Option<String>>;
    fn display_invalid_guess(&mut self, error: &GuessError) -> io::Result<()>;
    fn display_outcome(&mut self, outcome: Outcome, word: &str) -> io::Result<()>;
    fn read_play_again(&mut self) -> io::Result<Option<bool>>;
    fn display_goodbye(&mut self) -> io::Result<()>;
}

/// Drive one round to completion. `Ok(None)` means input ran out mid-round.
pub fn play_round<I: GameInterface + ?Sized>(
    round: &mut GameRound,
    interface: &mut I,
    score: Option<&Score>,
) -> Result<Option<Outcome>> {
    loop {
        interface.clear_screen()?;
        interface.display_header(score)?;
        interface.display_gallows(round.incorrect())?;
        interface.display_guesses(round.guesses())?;
        let found = interface.display_word(round.word(), round.guesses())?;
        if found == round.word().chars().count() {
            return Ok(Some(Outcome::Won));
        }

        let letter = loop {
            let Some(input) = interface.read_guess()? else {
                return Ok(None);
            };
            match round.validate(&input) {
                Ok(letter) => break letter,
                Err(e) => interface.display_invalid_guess(&e)?,
            }
        };

        round.apply_guess(letter);
        if let RoundStatus::Finished(Outcome::Lost) = round.status() {
            return Ok(Some(Outcome::Lost));
        }
    }
}

/// The replay loop. Score tracking and the session log are present only when
/// persistence is configured.
pub struct Session<'a, R: Rng> {
    config: &'a GameConfig,
    words: Vec<String>,
    score_store: Option<ScoreStore>,
    session_log: Option<SessionLog>,
    rng: R,
}

impl<'a, R: Rng> Session<'a, R> {
    pub fn new(config: &'a GameConfig, words: Vec<String>, rng: R) -> Self {
        let (score_store, session_log) = match &config.persistence {
            Some(paths) => (
                Some(ScoreStore::new(&paths.score_file)),
                Some(SessionLog::new(&paths.log_file)),
            ),
            None => (None, None),
        };
        Self {
            config,
            words,
            score_store,
            session_log,
            rng,
        }
    }

    /// Play rounds until the player declines. With persistence, the score is
    /// loaded before the first round and saved once at the end.
    pub fn run<I: GameInterface + ?Sized>(&mut self, interface: &mut I) -> Result<()> {
        let mut score = self.score_store.as_ref().map(ScoreStore::load).transpose()?;

        loop {
            let word = select_word(&self.words, &mut self.rng).ok_or_else(|| {
                HangmanError::EmptyWordList(self.config.word_file.clone())
            })?;
            let mut round = GameRound::new(word, self.config.max_guesses);
            if let Some(score) = score.as_mut() {
                score.record_start();
            }

            let Some(outcome) = play_round(&mut round, interface, score.as_ref())? else {
                info_log!("Input closed mid-round; ending session");
                break;
            };
            info_log!("Round finished: {:?} on '{}'", outcome, round.word());

            if outcome == Outcome::Won {
                if let Some(score) = score.as_mut() {
                    score.record_win();
                }
            }
            if let Some(log) = &self.session_log {
                log.append(outcome, round.word(), round.guesses())?;
            }
            interface.display_outcome(outcome, round.word())?;

            if interface.read_play_again()? != Some(true) {
                break;
            }
        }

        if let (Some(store), Some(score)) = (&self.score_store, &score) {
            store.save(score)?;
        }
        interface.display_goodbye()?;
        Ok(())
    }
}
