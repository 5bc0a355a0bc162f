use crate::board::MAX_GUESSES;
use crate::error::HelperError;
use crate::feedback::LetterFeedback;
use crate::filter::filter_candidates;
use crate::info_log;

/// One game's worth of narrowing state.
///
/// The session owns the working candidate set and replaces it after every
/// submission; the word bank it started from is kept for [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct GameSession {
    wordbank: Vec<String>,
    candidates: Vec<String>,
    history: Vec<Vec<LetterFeedback>>,
    finished: bool,
}

impl GameSession {
    #[must_use]
    pub fn new(wordbank: &[String]) -> Self {
        let mut wordbank = wordbank.to_vec();
        wordbank.sort();
        wordbank.dedup();
        Self {
            candidates: wordbank.clone(),
            wordbank,
            history: Vec::new(),
            finished: false,
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub fn wordbank_len(&self) -> usize {
        self.wordbank.len()
    }

    #[must_use]
    pub fn history(&self) -> &[Vec<LetterFeedback>] {
        &self.history
    }

    /// Rows already submitted.
    #[must_use]
    pub fn rows_used(&self) -> usize {
        self.history.len()
    }

    /// Set once every board row has been submitted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Narrows the candidates with one more guess.
    ///
    /// On error the session is left exactly as it was.
    pub fn submit(&mut self, feedback: Vec<LetterFeedback>) -> Result<&[String], HelperError> {
        if self.finished {
            return Err(HelperError::SessionFinished);
        }
        self.candidates = filter_candidates(&self.candidates, &feedback)?;
        info_log!(
            "GameSession::submit() - row {} [{}] leaves {} candidates",
            self.history.len() + 1,
            crate::feedback::feedback_line(&feedback),
            self.candidates.len()
        );
        self.history.push(feedback);
        if self.history.len() == MAX_GUESSES {
            self.finished = true;
        }
        Ok(&self.candidates)
    }

    /// Starts over with the full word bank.
    pub fn reset(&mut self) {
        self.candidates.clone_from(&self.wordbank);
        self.history.clear();
        self.finished = false;
    }
}

/// Header for a candidate list, e.g. `3 possible words`.
#[must_use]
pub fn candidate_summary(count: usize) -> String {
    let noun = if count == 1 { "word" } else { "words" };
    format!("{count} possible {noun}")
}
