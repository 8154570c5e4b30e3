use crate::config::{DEFAULT_WORD_FILE, GameConfig, PersistencePaths};
use crate::error::HangmanError;
use crate::game_state::{GameInterface, Outcome};
use crate::guess::{GuessError, GuessSet};
use crate::render;
use crate::score::Score;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const USAGE: &str = "Usage: hangman [WORD_FILE]";

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word file
    #[arg(default_value = DEFAULT_WORD_FILE)]
    pub word_file: PathBuf,

    /// Play without the score file and session log
    #[arg(long)]
    pub classic: bool,

    /// Where games played/won are kept between sessions
    #[arg(long, value_name = "PATH", conflicts_with = "classic")]
    pub score_file: Option<PathBuf>,

    /// Where a line per finished round is appended
    #[arg(long, value_name = "PATH", conflicts_with = "classic")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn into_config(self) -> GameConfig {
        if self.classic {
            return GameConfig::classic(self.word_file);
        }
        let defaults = PersistencePaths::default();
        let paths = PersistencePaths {
            score_file: self.score_file.unwrap_or(defaults.score_file),
            log_file: self.log_file.unwrap_or(defaults.log_file),
        };
        GameConfig::with_persistence(self.word_file, paths)
    }
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Invocation {
    Play(GameConfig),
    /// Bad arguments; the usage line should be shown.
    Usage,
}

/// Parse arguments. `--help` and `--version` print and exit inside clap.
pub fn parse_cli_from<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Invocation::Play(cli.into_config()),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => Invocation::Usage,
    }
}

#[must_use]
pub fn parse_cli() -> Invocation {
    parse_cli_from(std::env::args_os())
}

pub fn report_usage<O: Write>(out: &mut O) -> io::Result<()> {
    writeln!(out, "{USAGE}")
}

/// Print how a run ended and return the process exit status.
///
/// A missing word file is a user mistake: it is reported on `out` and the
/// status stays 0. Any other failure goes to `err` with status 1.
pub fn report_result<O: Write, E: Write>(
    result: Result<(), HangmanError>,
    out: &mut O,
    err: &mut E,
) -> io::Result<u8> {
    match result {
        Ok(()) => Ok(0),
        Err(e @ HangmanError::WordFileNotFound(_)) => {
            writeln!(out, "Error: {e}")?;
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "Error: {e}")?;
            Ok(1)
        }
    }
}

/// Read one line without its terminator. Other whitespace is kept.
fn read_input_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(Some(input))
}

/// Terminal implementation of [`GameInterface`] over any line reader and writer.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        read_input_line(&mut self.reader)
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        render::clear_screen(&mut self.writer)
    }

    fn display_header(&mut self, score: Option<&Score>) -> io::Result<()> {
        writeln!(self.writer, "{}", render::header_line(score))
    }

    fn display_gallows(&mut self, incorrect: usize) -> io::Result<()> {
        for row in render::gallows_rows(incorrect) {
            writeln!(self.writer, "{row}")?;
        }
        Ok(())
    }

    fn display_guesses(&mut self, guesses: &GuessSet) -> io::Result<()> {
        writeln!(self.writer, "{}", render::guesses_line(guesses))
    }

    fn display_word(&mut self, word: &str, guesses: &GuessSet) -> io::Result<usize> {
        let (line, found) = render::word_line(word, guesses);
        writeln!(self.writer, "{line}")?;
        Ok(found)
    }

    fn read_guess(&mut self) -> io::Result<Option<String>> {
        self.prompt("Guess: ")
    }

    fn display_invalid_guess(&mut self, error: &GuessError) -> io::Result<()> {
        writeln!(self.writer, "{error}")
    }

    fn display_outcome(&mut self, outcome: Outcome, word: &str) -> io::Result<()> {
        match outcome {
            Outcome::Won => writeln!(self.writer, "Well done, you won!"),
            Outcome::Lost => writeln!(self.writer, "Sorry, you lost! The word was {word}"),
        }
    }

    fn read_play_again(&mut self) -> io::Result<Option<bool>> {
        let answer = self.prompt("\nDo you want to play again (Y/N)? ")?;
        Ok(answer.map(|a| a == "y" || a == "Y"))
    }

    fn display_goodbye(&mut self) -> io::Result<()> {
        writeln!(self.writer, "\nGoodbye!")?;
        self.writer.flush()
    }
}
