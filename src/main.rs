use hangman::cli::{CliInterface, Invocation, parse_cli, report_result, report_usage};
use hangman::logging::init_logging;
use hangman::{GameConfig, HangmanError, Session, load_words_from_file};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    let status = match parse_cli() {
        Invocation::Usage => report_usage(&mut io::stdout()).map(|()| 0),
        Invocation::Play(config) => {
            report_result(run(&config), &mut io::stdout(), &mut io::stderr())
        }
    };
    ExitCode::from(status.unwrap_or(1))
}

fn run(config: &GameConfig) -> Result<(), HangmanError> {
    let words = load_words_from_file(&config.word_file)?;
    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock(), io::stdout());
    Session::new(config, words, rand::rng()).run(&mut interface)
}
