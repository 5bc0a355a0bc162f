use crate::error::HelperError;
use std::fmt;

/// Number of letters in every guess and candidate word.
pub const WORD_LENGTH: usize = 5;

/// Outcome for one letter of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// The letter occupies this exact position in the answer.
    Correct,
    /// The letter is in the answer, but not at this position.
    Present,
    /// The letter is not in the answer at this multiplicity.
    Absent,
}

impl LetterState {
    /// Parses the `G` (green), `Y` (yellow), `X` (gray) shorthand, ignoring case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Correct),
            'Y' => Some(Self::Present),
            'X' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }

    /// Next state in the tile-click cycle: absent, present, correct, absent.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }
}

/// A guessed letter paired with the state reported for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub letter: char,
    pub state: LetterState,
}

impl LetterFeedback {
    #[must_use]
    pub fn new(letter: char, state: LetterState) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            state,
        }
    }
}

impl fmt::Display for LetterFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.letter, self.state.to_char())
    }
}

/// One guess's feedback as `C=G R=X A=Y N=X E=G`.
#[must_use]
pub fn feedback_line(feedback: &[LetterFeedback]) -> String {
    feedback
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a feedback line such as `GYXXG` into one state per letter.
///
/// Surrounding whitespace is ignored; anything other than exactly five
/// `G`/`Y`/`X` characters is rejected.
pub fn parse_pattern(pattern: &str) -> Result<Vec<LetterState>, HelperError> {
    let trimmed = pattern.trim();
    let states: Option<Vec<LetterState>> = trimmed.chars().map(LetterState::from_char).collect();
    match states {
        Some(states) if states.len() == WORD_LENGTH => Ok(states),
        _ => Err(HelperError::InvalidPattern(trimmed.to_string())),
    }
}

/// Builds a feedback sequence from a guess and a `G`/`Y`/`X` pattern.
pub fn feedback_from_pattern(guess: &str, pattern: &str) -> Result<Vec<LetterFeedback>, HelperError> {
    let states = parse_pattern(pattern)?;
    let letters: Vec<char> = guess.trim().chars().collect();
    if letters.len() != WORD_LENGTH {
        return Err(HelperError::InvalidFeedback {
            expected: WORD_LENGTH,
            found: letters.len(),
        });
    }
    Ok(letters
        .into_iter()
        .zip(states)
        .map(|(letter, state)| LetterFeedback::new(letter, state))
        .collect())
}

/// Scores `guess` against a known `answer`.
///
/// Exact matches claim their answer letter first; remaining letters are
/// marked present left to right while unclaimed copies remain in the answer.
#[must_use]
pub fn score_guess(guess: &str, answer: &str) -> Vec<LetterFeedback> {
    let guess_chars: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let mut answer_chars: Vec<Option<char>> =
        answer.chars().map(|c| Some(c.to_ascii_uppercase())).collect();
    let mut states = vec![LetterState::Absent; guess_chars.len()];

    for (i, &g) in guess_chars.iter().enumerate() {
        if answer_chars.get(i).copied().flatten() == Some(g) {
            states[i] = LetterState::Correct;
            answer_chars[i] = None;
        }
    }
    for (i, &g) in guess_chars.iter().enumerate() {
        if states[i] == LetterState::Correct {
            continue;
        }
        if let Some(pos) = answer_chars.iter().position(|&c| c == Some(g)) {
            states[i] = LetterState::Present;
            answer_chars[pos] = None;
        }
    }

    guess_chars
        .into_iter()
        .zip(states)
        .map(|(letter, state)| LetterFeedback::new(letter, state))
        .collect()
}

/// Renders a feedback sequence back into its `G`/`Y`/`X` pattern.
#[must_use]
pub fn pattern_string(feedback: &[LetterFeedback]) -> String {
    feedback.iter().map(|f| f.state.to_char()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_feedback_display() {
        assert_eq!(LetterFeedback::new('c', LetterState::Correct).to_string(), "C=G");
        assert_eq!(LetterFeedback::new('R', LetterState::Present).to_string(), "R=Y");
        assert_eq!(LetterFeedback::new('a', LetterState::Absent).to_string(), "A=X");
    }

    #[test]
    fn test_feedback_line() {
        let feedback = feedback_from_pattern("CRANE", "GXYXG").unwrap();
        assert_eq!(feedback_line(&feedback), "C=G R=X A=Y N=X E=G");
        assert_eq!(feedback_line(&[]), "");
    }

    #[test]
    fn test_from_char_accepts_both_cases() {
        assert_eq!(LetterState::from_char('G'), Some(LetterState::Correct));
        assert_eq!(LetterState::from_char('y'), Some(LetterState::Present));
        assert_eq!(LetterState::from_char('x'), Some(LetterState::Absent));
        assert_eq!(LetterState::from_char('A'), None);
    }

    #[test]
    fn test_cycle_visits_every_state() {
        let start = LetterState::Absent;
        assert_eq!(start.cycle(), LetterState::Present);
        assert_eq!(start.cycle().cycle(), LetterState::Correct);
        assert_eq!(start.cycle().cycle().cycle(), start);
    }

    #[test]
    fn test_parse_pattern() {
        let states = parse_pattern(" gyXxG ").unwrap();
        assert_eq!(
            states,
            vec![
                LetterState::Correct,
                LetterState::Present,
                LetterState::Absent,
                LetterState::Absent,
                LetterState::Correct,
            ]
        );
        assert!(matches!(parse_pattern("GGG"), Err(HelperError::InvalidPattern(_))));
        assert!(matches!(parse_pattern("GGGGGG"), Err(HelperError::InvalidPattern(_))));
        assert!(matches!(parse_pattern("GGGGA"), Err(HelperError::InvalidPattern(_))));
        assert!(matches!(parse_pattern(""), Err(HelperError::InvalidPattern(_))));
    }

    #[test]
    fn test_feedback_from_pattern_uppercases_letters() {
        let feedback = feedback_from_pattern("crane", "GXGXG").unwrap();
        assert_eq!(feedback[0], LetterFeedback::new('C', LetterState::Correct));
        assert_eq!(feedback[1], LetterFeedback::new('R', LetterState::Absent));
        assert_eq!(pattern_string(&feedback), "GXGXG");
    }

    #[test]
    fn test_feedback_from_pattern_rejects_short_guess() {
        let err = feedback_from_pattern("CRAN", "GGGGG").unwrap_err();
        assert!(matches!(
            err,
            HelperError::InvalidFeedback { expected: 5, found: 4 }
        ));
    }

    #[test]
    fn test_score_guess_basic() {
        assert_eq!(pattern_string(&score_guess("CRANE", "CRANE")), "GGGGG");
        assert_eq!(pattern_string(&score_guess("CRANE", "FRAME")), "XGGXG");
        assert_eq!(pattern_string(&score_guess("CRANE", "BUILT")), "XXXXX");
    }

    #[test]
    fn test_score_guess_duplicate_letters() {
        // Only one L in the answer: the second L is absent.
        assert_eq!(pattern_string(&score_guess("ALLOY", "ANGEL")), "GYXXX");
        assert_eq!(pattern_string(&score_guess("LLAMA", "ATOLL")), "YYYXX");
        // The exact E at index 4 is claimed before the leading E looks for a copy.
        assert_eq!(pattern_string(&score_guess("EERIE", "THREE")), "YXGXG");
        assert_eq!(pattern_string(&score_guess("SPEED", "CREEP")), "XYGGX");
    }
}
