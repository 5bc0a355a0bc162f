use crate::error::HelperError;
use crate::feedback::{LetterFeedback, LetterState, WORD_LENGTH};
use crate::debug_log;

/// Keeps the candidates consistent with one guess's feedback.
///
/// The result is an order-preserving subsequence of `candidates`. Feedback
/// with anything other than one entry per letter is rejected outright.
pub fn filter_candidates(
    candidates: &[String],
    feedback: &[LetterFeedback],
) -> Result<Vec<String>, HelperError> {
    check_length(feedback)?;
    let mut filtered = Vec::new();
    for word in candidates {
        if !positions_match(word, feedback) {
            continue;
        }
        if !presences_match(word, feedback) {
            continue;
        }
        filtered.push(word.clone());
    }
    debug_log!(
        "filter_candidates() - {} of {} candidates kept",
        filtered.len(),
        candidates.len()
    );
    Ok(filtered)
}

/// Applies every feedback row in turn, starting from `candidates`.
pub fn filter_history(
    candidates: &[String],
    history: &[Vec<LetterFeedback>],
) -> Result<Vec<String>, HelperError> {
    let mut remaining = candidates.to_vec();
    for feedback in history {
        remaining = filter_candidates(&remaining, feedback)?;
    }
    Ok(remaining)
}

/// Whether a single word is consistent with one guess's feedback.
pub fn matches_feedback(word: &str, feedback: &[LetterFeedback]) -> Result<bool, HelperError> {
    check_length(feedback)?;
    Ok(positions_match(word, feedback) && presences_match(word, feedback))
}

fn check_length(feedback: &[LetterFeedback]) -> Result<(), HelperError> {
    if feedback.len() == WORD_LENGTH {
        Ok(())
    } else {
        Err(HelperError::InvalidFeedback {
            expected: WORD_LENGTH,
            found: feedback.len(),
        })
    }
}

/// Correct letters must sit at their index; present letters must not.
fn positions_match(word: &str, feedback: &[LetterFeedback]) -> bool {
    let letters: Vec<char> = word.chars().collect();
    for (i, f) in feedback.iter().enumerate() {
        let at = letters.get(i).copied();
        match f.state {
            LetterState::Correct if at != Some(f.letter) => return false,
            LetterState::Present if at == Some(f.letter) => return false,
            _ => {}
        }
    }
    true
}

/// Multiset check: correct letters are spent first, then every present
/// letter must claim a remaining copy, and no absent letter may be left over.
fn presences_match(word: &str, feedback: &[LetterFeedback]) -> bool {
    let mut remaining: Vec<char> = word.chars().collect();

    for letter in letters_in(feedback, LetterState::Correct) {
        remove_one(&mut remaining, letter);
    }
    for letter in letters_in(feedback, LetterState::Present) {
        if !remove_one(&mut remaining, letter) {
            return false;
        }
    }
    letters_in(feedback, LetterState::Absent).all(|letter| !remaining.contains(&letter))
}

fn letters_in(feedback: &[LetterFeedback], state: LetterState) -> impl Iterator<Item = char> + '_ {
    feedback
        .iter()
        .filter(move |f| f.state == state)
        .map(|f| f.letter)
}

/// Removes the first occurrence of `letter`, reporting whether one was found.
fn remove_one(remaining: &mut Vec<char>, letter: char) -> bool {
    match remaining.iter().position(|&c| c == letter) {
        Some(pos) => {
            remaining.remove(pos);
            true
        }
        None => false,
    }
}
