//! Error type shared by the game engine and its collaborators.

use thiserror::Error;

use crate::games::ghost::PlayerId;

pub type GhostResult<T> = Result<T, GhostError>;

#[derive(Debug, Error)]
pub enum GhostError {
    /// Player type in a roster entry was neither human nor computer
    #[error("player_type must be either 'human' or 'computer'; found player_type: '{0}'")]
    InvalidPlayerType(String),

    /// Dictionary name missing from the dictionary table
    #[error("invalid dictionary '{name}'; must be one of: {known:?}")]
    UnknownDictionary { name: String, known: Vec<String> },

    #[error("failed to read word list '{name}': {source}")]
    WordListIo {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ghost word '{0}'; it must be a non-empty run of letters")]
    InvalidGhostWord(String),

    #[error("a game needs at least one player")]
    NoPlayers,

    /// Played input was not exactly one character
    #[error("{0} is not a letter")]
    NotALetter(String),

    #[error("Invalid letter: {0}")]
    InvalidLetter(String),

    #[error("Cannot challenge on first turn of round")]
    EmptyFragment,

    #[error("{0} is not in the roster")]
    PlayerNotInRoster(PlayerId),

    #[error("no current player; the game has not started")]
    NotStarted,

    #[error("the game is already over")]
    GameOver,

    /// Automated strategy has no implementation yet
    #[error("{0} is not yet supported for computer players")]
    NotYetSupported(&'static str),

    #[error("input error: {0}")]
    Input(String),

    #[error("scripted input ran out while waiting for '{0}'")]
    InputExhausted(String),

    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("failed to read settings file: {0}")]
    SettingsIo(#[source] std::io::Error),
}

impl GhostError {
    /// Whether a human can fix this by typing something else.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GhostError::NotALetter(_) | GhostError::InvalidLetter(_) | GhostError::EmptyFragment
        )
    }
}
