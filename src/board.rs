//! Board rows and the translation from tiles to filter feedback.
//!
//! A row is filled left to right as letters are typed. Each typed tile
//! starts out `Absent` and is then marked by the player; once every tile has
//! a letter the row can be turned into the feedback sequence the filter
//! consumes. This is the only place a front end's tile state becomes
//! [`LetterFeedback`].

use crate::error::HelperError;
use crate::feedback::{LetterFeedback, LetterState, WORD_LENGTH};

/// Number of guess rows on a board.
pub const MAX_GUESSES: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub state: LetterState,
}

impl Tile {
    const EMPTY: Self = Self {
        letter: None,
        state: LetterState::Absent,
    };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardRow {
    tiles: [Tile; WORD_LENGTH],
}

impl Default for BoardRow {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardRow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: [Tile::EMPTY; WORD_LENGTH],
        }
    }

    /// A row holding the letters of `guess`, all marked absent.
    #[must_use]
    pub fn from_guess(guess: &str) -> Self {
        let mut row = Self::new();
        for c in guess.chars().take(WORD_LENGTH) {
            row.push_letter(c);
        }
        row
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles holding a letter.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.tiles.iter().take_while(|t| t.letter.is_some()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled() == WORD_LENGTH
    }

    /// Letters typed so far.
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles.iter().filter_map(|t| t.letter).collect()
    }

    /// Types a letter into the next empty tile; ignored once the row is full.
    pub fn push_letter(&mut self, letter: char) -> bool {
        let index = self.filled();
        if index == WORD_LENGTH || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.tiles[index] = Tile {
            letter: Some(letter.to_ascii_uppercase()),
            state: LetterState::Absent,
        };
        true
    }

    /// Clears the last typed tile, resetting its state.
    pub fn pop_letter(&mut self) -> Option<char> {
        let index = self.filled().checked_sub(1)?;
        let letter = self.tiles[index].letter;
        self.tiles[index] = Tile::EMPTY;
        letter
    }

    /// Marks a typed tile. Empty tiles cannot be marked.
    pub fn set_state(&mut self, index: usize, state: LetterState) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) if tile.letter.is_some() => {
                tile.state = state;
                true
            }
            _ => false,
        }
    }

    /// Advances a typed tile to its next state, as a click on the tile does.
    pub fn cycle_state(&mut self, index: usize) -> Option<LetterState> {
        let tile = self.tiles.get_mut(index)?;
        tile.letter?;
        tile.state = tile.state.cycle();
        Some(tile.state)
    }

    /// Applies one state per tile, in order.
    pub fn apply_states(&mut self, states: &[LetterState]) -> Result<(), HelperError> {
        if states.len() != WORD_LENGTH {
            return Err(HelperError::InvalidFeedback {
                expected: WORD_LENGTH,
                found: states.len(),
            });
        }
        for (tile, &state) in self.tiles.iter_mut().zip(states) {
            tile.state = state;
        }
        Ok(())
    }

    /// Converts the row to feedback, preserving tile order.
    pub fn to_feedback(&self) -> Result<Vec<LetterFeedback>, HelperError> {
        self.tiles
            .iter()
            .map(|tile| match tile.letter {
                Some(letter) => Ok(LetterFeedback::new(letter, tile.state)),
                None => Err(HelperError::IncompleteRow {
                    filled: self.filled(),
                }),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::pattern_string;

    #[test]
    fn test_typed_tiles_start_absent() {
        let row = BoardRow::from_guess("crane");
        assert!(row.is_complete());
        assert_eq!(row.word(), "CRANE");
        assert!(row.tiles().iter().all(|t| t.state == LetterState::Absent));
    }

    #[test]
    fn test_push_ignored_when_full_or_not_a_letter() {
        let mut row = BoardRow::from_guess("CRANE");
        assert!(!row.push_letter('S'));
        assert_eq!(row.word(), "CRANE");

        let mut row = BoardRow::new();
        assert!(!row.push_letter('3'));
        assert_eq!(row.filled(), 0);
    }

    #[test]
    fn test_pop_letter_clears_state() {
        let mut row = BoardRow::from_guess("CRA");
        row.set_state(2, LetterState::Correct);
        assert_eq!(row.pop_letter(), Some('A'));
        assert_eq!(row.tiles()[2], Tile::EMPTY);
        assert_eq!(row.word(), "CR");

        let mut empty = BoardRow::new();
        assert_eq!(empty.pop_letter(), None);
    }

    #[test]
    fn test_cycle_state_on_typed_tile_only() {
        let mut row = BoardRow::from_guess("CR");
        assert_eq!(row.cycle_state(0), Some(LetterState::Present));
        assert_eq!(row.cycle_state(0), Some(LetterState::Correct));
        assert_eq!(row.cycle_state(0), Some(LetterState::Absent));
        assert_eq!(row.cycle_state(3), None);
        assert_eq!(row.cycle_state(9), None);
        assert!(!row.set_state(4, LetterState::Correct));
    }

    #[test]
    fn test_to_feedback_preserves_order() {
        let mut row = BoardRow::from_guess("CRANE");
        row.set_state(0, LetterState::Correct);
        row.set_state(2, LetterState::Present);
        let feedback = row.to_feedback().unwrap();
        assert_eq!(pattern_string(&feedback), "GXYXX");
        let letters: String = feedback.iter().map(|f| f.letter).collect();
        assert_eq!(letters, "CRANE");
    }

    #[test]
    fn test_incomplete_row_is_rejected() {
        let row = BoardRow::from_guess("CRA");
        assert!(matches!(
            row.to_feedback(),
            Err(HelperError::IncompleteRow { filled: 3 })
        ));
    }

    #[test]
    fn test_apply_states_checks_length() {
        let mut row = BoardRow::from_guess("CRANE");
        assert!(row.apply_states(&[LetterState::Correct; 4]).is_err());
        row.apply_states(&[LetterState::Correct; 5]).unwrap();
        assert_eq!(pattern_string(&row.to_feedback().unwrap()), "GGGGG");
    }
}
