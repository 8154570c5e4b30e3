// Integration tests for hangman
// These drive whole sessions through the terminal interface

use hangman::cli::CliInterface;
use hangman::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

fn play(config: &GameConfig, words: &[&str], input: &str) -> (Result<(), HangmanError>, String) {
    let words = words.iter().map(|w| w.to_string()).collect();
    let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
    let result = Session::new(config, words, StdRng::seed_from_u64(3)).run(&mut interface);
    let output = String::from_utf8(interface.into_writer()).unwrap();
    (result, output)
}

/// Score and log files unique to one test.
fn persistence(name: &str, score: Option<&str>) -> PersistencePaths {
    let dir = std::env::temp_dir();
    let paths = PersistencePaths {
        score_file: dir.join(format!("hangman_it_{name}_score.txt")),
        log_file: dir.join(format!("hangman_it_{name}.log")),
    };
    let _ = fs::remove_file(&paths.log_file);
    match score {
        Some(contents) => fs::write(&paths.score_file, contents).unwrap(),
        None => {
            let _ = fs::remove_file(&paths.score_file);
        }
    }
    paths
}

fn cleanup(paths: &PersistencePaths) {
    let _ = fs::remove_file(&paths.score_file);
    let _ = fs::remove_file(&paths.log_file);
}

#[test]
fn test_classic_win_shows_progress() {
    let config = GameConfig::classic("unused.txt");
    let (result, output) = play(&config, &["cat"], "a\nt\nc\nn\n");
    result.unwrap();

    assert!(output.contains("Word: _ _ _\n"));
    assert!(output.contains("Word: _ A _\n"));
    assert!(output.contains("Word: _ A T\n"));
    assert!(output.contains("Word: C A T\n"));
    assert!(output.contains("Guesses: A C T\n"));
    assert!(output.contains("Well done, you won!"));
    assert!(output.contains("Do you want to play again (Y/N)? "));
    assert!(output.ends_with("\nGoodbye!\n"));
    assert!(!output.contains("Success rate"));
}

#[test]
fn test_classic_loss_reveals_word() {
    let config = GameConfig::classic("unused.txt");
    let (result, output) = play(&config, &["dog"], "x\ny\nz\nq\nw\ne\nr\nu\nn\n");
    result.unwrap();

    assert!(output.contains("Sorry, you lost! The word was DOG"));
    assert!(!output.contains("Well done"));
    // Seven misses are drawn; the eighth ends the round without a redraw.
    assert!(output.contains("  |        / \\\n"));
    assert_eq!(output.matches("Guess: ").count(), 8);
}

#[test]
fn test_invalid_guesses_are_reprompted() {
    let config = GameConfig::classic("unused.txt");
    let (result, output) = play(&config, &["cat"], "ab\n3\na\na\nc\nt\nn\n");
    result.unwrap();

    assert_eq!(
        output
            .matches("Invalid guess.  Guesses must be a single letter.")
            .count(),
        2
    );
    assert_eq!(output.matches("Invalid guess.  Letter already used.").count(), 1);
    assert!(output.contains("Well done, you won!"));
}

#[test]
fn test_padded_guess_is_rejected() {
    let config = GameConfig::classic("unused.txt");
    let (result, output) = play(&config, &["cat"], " a\r\na\r\nc\nt\n y\n");
    result.unwrap();

    assert_eq!(
        output
            .matches("Invalid guess.  Guesses must be a single letter.")
            .count(),
        1
    );
    assert_eq!(output.matches("Well done, you won!").count(), 1);
}

#[test]
fn test_replay_plays_another_round() {
    let config = GameConfig::classic("unused.txt");
    let (result, output) = play(&config, &["ox"], "o\nx\ny\nx\no\nN\n");
    result.unwrap();

    assert_eq!(output.matches("Well done, you won!").count(), 2);
    assert_eq!(output.matches("Goodbye!").count(), 1);
}

#[test]
fn test_empty_word_is_won_immediately() {
    let config = GameConfig::classic("unused.txt");
    let (result, output) = play(&config, &[""], "n\n");
    result.unwrap();

    assert!(output.contains("Well done, you won!"));
    assert!(!output.contains("Guess: "));
}

#[test]
fn test_eof_mid_round_ends_session() {
    let config = GameConfig::classic("unused.txt");
    let (result, output) = play(&config, &["cat"], "a\n");
    result.unwrap();

    assert!(!output.contains("Well done"));
    assert!(!output.contains("Sorry"));
    assert!(output.ends_with("\nGoodbye!\n"));
}

#[test]
fn test_score_updated_after_win() {
    let paths = persistence("win", Some("10 7\n"));
    let config = GameConfig::with_persistence("unused.txt", paths.clone());
    let (result, output) = play(&config, &["cat"], "a\nt\nc\nn\n");
    result.unwrap();

    // The header is drawn after the round is counted but before the win: 7 of 11.
    assert!(output.contains("*** Hangman ***  Success rate: 64%"));
    assert_eq!(fs::read_to_string(&paths.score_file).unwrap(), "11 8\n");

    let log = fs::read_to_string(&paths.log_file).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 1);
    let fields: Vec<&str> = lines[0].split(' ').collect();
    assert_eq!(fields[0], "SUCCESS");
    assert_eq!(fields[1].len(), "YYYYMMDD-HHMMSS".len());
    assert_eq!(&fields[2..], &["CAT", "ACT"]);

    cleanup(&paths);
}

#[test]
fn test_score_and_log_after_loss_then_win() {
    let paths = persistence("mixed", Some("0 0\n"));
    let config = GameConfig::with_persistence("unused.txt", paths.clone());
    let input = "x\ny\nz\nq\nw\ne\nr\nu\ny\no\nd\ng\nn\n";
    let (result, _) = play(&config, &["dog"], input);
    result.unwrap();

    assert_eq!(fs::read_to_string(&paths.score_file).unwrap(), "2 1\n");
    let log = fs::read_to_string(&paths.log_file).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("FAILURE "));
    assert!(lines[0].ends_with(" DOG EQRUWXYZ"));
    assert!(lines[1].starts_with("SUCCESS "));
    assert!(lines[1].ends_with(" DOG DGO"));

    cleanup(&paths);
}

#[test]
fn test_missing_score_file_is_fatal() {
    let paths = persistence("missing", None);
    let config = GameConfig::with_persistence("unused.txt", paths.clone());
    let (result, output) = play(&config, &["cat"], "a\nt\nc\nn\n");

    assert!(matches!(result, Err(HangmanError::ScoreFile { .. })));
    assert!(output.is_empty());
    assert!(!paths.log_file.exists());
}

#[test]
fn test_malformed_score_file_is_fatal() {
    let paths = persistence("malformed", Some("ten seven\n"));
    let config = GameConfig::with_persistence("unused.txt", paths.clone());
    let (result, _) = play(&config, &["cat"], "a\nt\nc\nn\n");

    assert!(matches!(result, Err(HangmanError::MalformedScore { .. })));
    assert_eq!(
        fs::read_to_string(&paths.score_file).unwrap(),
        "ten seven\n"
    );
    cleanup(&paths);
}

#[test]
fn test_word_file_to_game() {
    let path: PathBuf = std::env::temp_dir().join("hangman_it_words.txt");
    fs::write(&path, "zebra\n").unwrap();

    let words = load_words_from_file(&path).unwrap();
    assert_eq!(words, vec!["zebra"]);

    let config = GameConfig::classic(&path);
    let mut interface = CliInterface::new(Cursor::new("z\ne\nb\nr\na\nn\n"), Vec::new());
    Session::new(&config, words, StdRng::seed_from_u64(9))
        .run(&mut interface)
        .unwrap();
    let output = String::from_utf8(interface.into_writer()).unwrap();
    assert!(output.contains("Word: Z E B R A\n"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_word_file_message() {
    let path = std::env::temp_dir().join("hangman_it_no_such_words.txt");
    let _ = fs::remove_file(&path);
    let err = load_words_from_file(&path).unwrap_err();
    assert_eq!(
        format!("Error: {err}"),
        format!("Error: Word file {} does not exist.", path.display())
    );
}

#[test]
fn test_default_files_in_checkout_load() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let defaults = GameConfig::default();
    let paths = defaults.persistence.unwrap();

    let words = load_words_from_file(root.join(&defaults.word_file)).unwrap();
    assert!(!words.is_empty());
    // Playing from the checkout rewrites this file, so only the shape is checked.
    let score = ScoreStore::new(root.join(&paths.score_file)).load().unwrap();
    assert!(score.games_won <= score.games_played);
}
