use crate::error::HelperError;
use crate::feedback::WORD_LENGTH;
use crate::info_log;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

const CONFIG_DIR_NAME: &str = "wordle-helper";
const USER_WORDBANK_FILE: &str = "wordbank.txt";

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    (word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

fn finish(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words.dedup();
    words
}

/// Parses a newline-delimited word list.
///
/// Words are trimmed and uppercased; anything that is not five ASCII letters
/// is skipped. The result is sorted with duplicates removed.
#[must_use]
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    finish(data.lines().filter_map(normalize).collect())
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, HelperError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(finish(words))
}

/// `<config dir>/wordle-helper/wordbank.txt`, if the platform has a config dir.
#[must_use]
pub fn user_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(USER_WORDBANK_FILE))
}

/// Picks the word bank: an explicit path, then the user's config file if it
/// exists, then the embedded list.
pub fn resolve_wordbank(explicit: Option<&Path>) -> Result<Vec<String>, HelperError> {
    let words = if let Some(path) = explicit {
        info_log!("Loading word bank from {}", path.display());
        load_wordbank_from_file(path)?
    } else if let Some(path) = user_wordbank_path()
        && path.is_file()
    {
        info_log!("Loading word bank from {}", path.display());
        load_wordbank_from_file(&path)?
    } else {
        load_wordbank_from_str(EMBEDDED_WORDBANK)
    };

    if words.is_empty() {
        return Err(HelperError::EmptyWordbank);
    }
    Ok(words)
}
