//! Text rendering for the game screen.
//!
//! Everything here builds strings; writing them out is left to the
//! [`GameInterface`](crate::game_state::GameInterface) implementation.

use crate::guess::GuessSet;
use crate::score::Score;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

pub const TITLE: &str = "*** Hangman ***";

/// One gallows row: the frame is always drawn, the person part only once
/// enough incorrect guesses have been made.
struct GallowsRow {
    frame: &'static str,
    person: &'static str,
}

const GALLOWS: [GallowsRow; 9] = [
    GallowsRow { frame: "   ", person: "_________" },
    GallowsRow { frame: "  |         ", person: "|" },
    GallowsRow { frame: "  |        ", person: " O" },
    GallowsRow { frame: "  |        ", person: " |" },
    GallowsRow { frame: "  |        ", person: "---" },
    GallowsRow { frame: "  |        ", person: " | " },
    GallowsRow { frame: "  |        ", person: "/ \\" },
    GallowsRow { frame: "  |        ", person: "" },
    GallowsRow { frame: "__|__      ", person: "" },
];

pub const GALLOWS_ROWS: usize = GALLOWS.len();

#[must_use]
pub fn header_line(score: Option<&Score>) -> String {
    match score {
        Some(score) => format!("{TITLE}  Success rate: {}%", score.success_rate()),
        None => TITLE.to_string(),
    }
}

/// Row `i` shows its person fragment when `i < incorrect`.
#[must_use]
pub fn gallows_rows(incorrect: usize) -> Vec<String> {
    GALLOWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if i < incorrect {
                format!("{}{}", row.frame, row.person)
            } else {
                row.frame.to_string()
            }
        })
        .collect()
}

#[must_use]
pub fn guesses_line(guesses: &GuessSet) -> String {
    let letters: Vec<String> = guesses.iter().map(char::to_string).collect();
    format!("Guesses: {}", letters.join(" "))
}

/// Returns the masked word line and how many positions are revealed.
#[must_use]
pub fn word_line(word: &str, guesses: &GuessSet) -> (String, usize) {
    let mut found = 0;
    let cells: Vec<String> = word
        .chars()
        .map(|c| {
            if guesses.contains(&c) {
                found += 1;
                c.to_string()
            } else {
                "_".to_string()
            }
        })
        .collect();
    (format!("Word: {}", cells.join(" ")), found)
}

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}
