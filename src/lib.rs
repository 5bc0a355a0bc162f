// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod board;
pub mod cli;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod game_state;
pub mod logging;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use board::{BoardRow, MAX_GUESSES, Tile};
pub use error::HelperError;
pub use feedback::{
    LetterFeedback, LetterState, WORD_LENGTH, feedback_from_pattern, feedback_line, parse_pattern,
    pattern_string, score_guess,
};
pub use filter::{filter_candidates, filter_history, matches_feedback};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use session::{GameSession, candidate_summary};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str, resolve_wordbank};
