use crate::board::BoardRow;
use crate::debug_log;
use crate::error::HelperError;
use crate::feedback::{LetterState, WORD_LENGTH, parse_pattern};
use crate::game_state::{GameInterface, UserAction};
use crate::session::candidate_summary;
use clap::Parser;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Wordle Helper CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Append log output to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// One trimmed, uppercased line, or `None` at end of input.
fn read_command<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_uppercase()),
    }
}

fn control_action(input: &str) -> Option<UserAction> {
    match input {
        "EXIT" => Some(UserAction::Exit),
        "NEXT" => Some(UserAction::NewGame),
        _ => None,
    }
}

/// Writes one line of output; a failed write is logged and otherwise ignored.
fn say<W: Write>(out: &mut W, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{line}") {
        debug_log!("say() - write failed: {}", e);
    }
}

pub fn read_guess<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> Option<UserAction> {
    say(
        out,
        format_args!(
            "\nEnter your guess (5 letters, or 'exit' to quit, or 'next' to start a new game):"
        ),
    );
    let Some(input) = read_command(reader) else {
        return Some(UserAction::Exit);
    };

    if let Some(action) = control_action(&input) {
        return Some(action);
    }
    if is_valid_word(&input) {
        Some(UserAction::Guess(input))
    } else {
        say(out, format_args!("Invalid guess. Please enter 5 letters."));
        None
    }
}

pub fn read_feedback<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    guess: &str,
) -> Option<UserAction> {
    say(
        out,
        format_args!("Enter feedback for {guess} (G=green, Y=yellow, X=gray, e.g. GYXXG):"),
    );
    let Some(input) = read_command(reader) else {
        return Some(UserAction::Exit);
    };

    if let Some(action) = control_action(&input) {
        return Some(action);
    }
    match parse_pattern(&input) {
        Ok(states) => marked_row(out, guess, &states),
        Err(e) => {
            say(out, format_args!("{e}"));
            None
        }
    }
}

/// The guess with `states` applied, or `None` after reporting why not.
fn marked_row<W: Write>(out: &mut W, guess: &str, states: &[LetterState]) -> Option<UserAction> {
    let mut row = BoardRow::from_guess(guess);
    match row.apply_states(states) {
        Ok(()) => Some(UserAction::Feedback(row)),
        Err(e) => {
            say(out, format_args!("{e}"));
            None
        }
    }
}

/// Prints the count header followed by every remaining word.
pub fn display_candidates<W: Write>(out: &mut W, candidates: &[String]) {
    say(out, format_args!("{}", candidate_summary(candidates.len())));
    for word in candidates {
        say(out, format_args!("{word}"));
    }
}

/// CLI implementation of the `GameInterface` trait over any `BufRead`,
/// writing to stdout unless another writer is given.
pub struct CliInterface<R: BufRead, W: Write = io::Stdout> {
    reader: R,
    out: W,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self::with_output(reader, io::stdout())
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_output(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    /// Everything written so far, for writers that keep it.
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_guess(&mut self) -> Option<UserAction> {
        read_guess(&mut self.reader, &mut self.out)
    }

    fn read_feedback(&mut self, guess: &str) -> Option<UserAction> {
        read_feedback(&mut self.reader, &mut self.out, guess)
    }

    fn display_candidates(&mut self, candidates: &[String]) {
        display_candidates(&mut self.out, candidates);
    }

    fn display_board_full(&mut self, remaining: usize) {
        say(
            &mut self.out,
            format_args!(
                "All rows used with {}. Type 'next' for a new game or 'exit' to quit.",
                candidate_summary(remaining)
            ),
        );
    }

    fn display_error(&mut self, error: &HelperError) {
        say(&mut self.out, format_args!("Error: {error}"));
    }

    fn display_exit_message(&mut self) {
        say(&mut self.out, format_args!("Exiting."));
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        say(
            &mut self.out,
            format_args!("New game started. Loaded {word_count} words."),
        );
    }
}
