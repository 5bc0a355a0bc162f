use thiserror::Error;

/// The errors that `wordle_helper` can produce.
#[derive(Debug, Error)]
pub enum HelperError {
    /// The feedback sequence does not have one entry per letter of a word.
    #[error("feedback must have {expected} entries, found {found}")]
    InvalidFeedback { expected: usize, found: usize },

    /// A board row was submitted before every tile had a letter.
    #[error("row is incomplete: only {filled} of 5 tiles have a letter")]
    IncompleteRow { filled: usize },

    #[error("invalid feedback pattern \"{0}\": use 5 of G, Y or X")]
    InvalidPattern(String),

    /// Every row of the board has already been submitted.
    #[error("all rows have been used; start a new game")]
    SessionFinished,

    #[error("the word bank contains no valid 5-letter words")]
    EmptyWordbank,

    #[error("could not read word bank")]
    Io(#[from] std::io::Error),

    #[error("logger was already initialised")]
    Logger(#[from] log::SetLoggerError),
}
