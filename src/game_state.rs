use crate::board::BoardRow;
use crate::error::HelperError;
use crate::info_log;
use crate::session::GameSession;

/// What the player asked for at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    /// The guessed row with every tile marked.
    Feedback(BoardRow),
    NewGame,
    Exit,
}

/// Front-end operations the game loop needs.
///
/// `read_guess` and `read_feedback` return `None` for input that was
/// rejected; the loop then goes back to asking for a guess.
pub trait GameInterface {
    fn read_guess(&mut self) -> Option<UserAction>;
    fn read_feedback(&mut self, guess: &str) -> Option<UserAction>;
    fn display_candidates(&mut self, candidates: &[String]);
    fn display_board_full(&mut self, remaining: usize);
    fn display_error(&mut self, error: &HelperError);
    fn display_exit_message(&mut self);
    fn display_new_game_message(&mut self, word_count: usize);
}

/// Runs games until the player exits, returning the last session.
pub fn game_loop<I: GameInterface + ?Sized>(
    initial_wordbank: &[String],
    interface: &mut I,
) -> GameSession {
    let mut session = GameSession::new(initial_wordbank);
    interface.display_candidates(session.candidates());

    loop {
        let guess = match interface.read_guess() {
            Some(UserAction::Exit) => break,
            Some(UserAction::NewGame) => {
                start_new_game(&mut session, interface);
                continue;
            }
            Some(UserAction::Guess(guess)) => guess,
            Some(UserAction::Feedback(_)) | None => continue,
        };

        if session.is_finished() {
            interface.display_error(&HelperError::SessionFinished);
            continue;
        }

        let row = match interface.read_feedback(&guess) {
            Some(UserAction::Feedback(row)) => row,
            Some(UserAction::Exit) => break,
            Some(UserAction::NewGame) => {
                start_new_game(&mut session, interface);
                continue;
            }
            Some(UserAction::Guess(_)) | None => continue,
        };

        match submit_row(&mut session, &row) {
            Ok(()) => {
                interface.display_candidates(session.candidates());
                if session.is_finished() {
                    interface.display_board_full(session.candidates().len());
                }
            }
            Err(e) => {
                info_log!("game_loop() - rejected row {:?}: {}", row.word(), e);
                interface.display_error(&e);
            }
        }
    }

    interface.display_exit_message();
    session
}

fn submit_row(session: &mut GameSession, row: &BoardRow) -> Result<(), HelperError> {
    let feedback = row.to_feedback()?;
    session.submit(feedback)?;
    Ok(())
}

fn start_new_game<I: GameInterface + ?Sized>(session: &mut GameSession, interface: &mut I) {
    session.reset();
    interface.display_new_game_message(session.wordbank_len());
    interface.display_candidates(session.candidates());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::LetterState;
    use std::collections::VecDeque;

    /// Replays scripted actions and records what was displayed.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        displayed: Vec<Vec<String>>,
        errors: Vec<String>,
        board_full: Vec<usize>,
        new_games: usize,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                ..Self::default()
            }
        }

        fn next(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }
    }

    impl GameInterface for ScriptedInterface {
        fn read_guess(&mut self) -> Option<UserAction> {
            self.next()
        }

        fn read_feedback(&mut self, _guess: &str) -> Option<UserAction> {
            self.next()
        }

        fn display_candidates(&mut self, candidates: &[String]) {
            self.displayed.push(candidates.to_vec());
        }

        fn display_board_full(&mut self, remaining: usize) {
            self.board_full.push(remaining);
        }

        fn display_error(&mut self, error: &HelperError) {
            self.errors.push(error.to_string());
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }

        fn display_new_game_message(&mut self, _word_count: usize) {
            self.new_games += 1;
        }
    }

    fn wordbank() -> Vec<String> {
        ["CRANE", "SLATE", "TRACE", "CRATE"]
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    }

    fn marked(guess: &str, states: [LetterState; 5]) -> Option<UserAction> {
        let mut row = BoardRow::from_guess(guess);
        row.apply_states(&states).unwrap();
        Some(UserAction::Feedback(row))
    }

    #[test]
    fn test_exit_immediately() {
        let mut ui = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        let session = game_loop(&wordbank(), &mut ui);
        assert!(ui.exited);
        assert_eq!(ui.displayed, vec![session.candidates().to_vec()]);
        assert_eq!(session.candidates().len(), 4);
    }

    #[test]
    fn test_guess_narrows_candidates() {
        use LetterState::{Absent, Correct};
        let mut ui = ScriptedInterface::new(vec![
            Some(UserAction::Guess("CRANE".to_string())),
            marked("CRANE", [Correct, Correct, Correct, Absent, Correct]),
        ]);
        let session = game_loop(&wordbank(), &mut ui);
        assert_eq!(session.candidates(), ["CRATE"]);
        assert_eq!(ui.displayed.last().unwrap(), &vec!["CRATE".to_string()]);
        assert!(ui.errors.is_empty());
    }

    #[test]
    fn test_incomplete_row_reports_error() {
        let mut ui = ScriptedInterface::new(vec![
            Some(UserAction::Guess("CRA".to_string())),
            Some(UserAction::Feedback(BoardRow::from_guess("CRA"))),
        ]);
        let session = game_loop(&wordbank(), &mut ui);
        assert_eq!(ui.errors.len(), 1);
        assert_eq!(session.rows_used(), 0);
    }

    #[test]
    fn test_rejected_input_is_skipped() {
        let mut ui = ScriptedInterface::new(vec![
            None,
            Some(UserAction::Guess("SLATE".to_string())),
            None,
        ]);
        let session = game_loop(&wordbank(), &mut ui);
        assert_eq!(session.rows_used(), 0);
        assert!(ui.exited);
    }

    #[test]
    fn test_new_game_during_feedback_resets() {
        use LetterState::Absent;
        let mut ui = ScriptedInterface::new(vec![
            Some(UserAction::Guess("CRANE".to_string())),
            marked("CRANE", [Absent; 5]),
            Some(UserAction::Guess("SLATE".to_string())),
            Some(UserAction::NewGame),
        ]);
        let session = game_loop(&wordbank(), &mut ui);
        assert_eq!(ui.new_games, 1);
        assert_eq!(session.rows_used(), 0);
        assert_eq!(session.candidates().len(), 4);
    }

    #[test]
    fn test_board_full_blocks_further_guesses() {
        use LetterState::Absent;
        let mut actions = Vec::new();
        for _ in 0..7 {
            actions.push(Some(UserAction::Guess("QUIZZ".to_string())));
            actions.push(marked("QUIZZ", [Absent; 5]));
        }
        let mut ui = ScriptedInterface::new(actions);
        let session = game_loop(&wordbank(), &mut ui);
        assert!(session.is_finished());
        assert_eq!(ui.board_full, vec![4]);
        // The seventh guess is refused before feedback is read, so its
        // feedback line is then taken as a (skipped) guess prompt.
        assert_eq!(ui.errors.len(), 1);
        assert_eq!(session.rows_used(), 6);
    }
}
