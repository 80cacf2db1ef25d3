use schema::Side;
use thiserror::Error;

/// Main error type for the pokebattle turn resolver
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BattleEngineError {
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    #[error("Lineup error: {0}")]
    Lineup(#[from] LineupError),

    #[error("Action error: {0}")]
    Action(#[from] ActionError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by the timer registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// Removal of a timer the registry never held
    #[error("no timer registered for role '{0}'")]
    NotFound(String),
}

/// Errors related to lineup bookkeeping and population
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineupError {
    /// `remove_front` called with nobody left
    #[error("{0} lineup is already empty")]
    Empty(Side),

    /// A record's move pool cannot fill a four-move set
    #[error("{name} has only {found} moves, need at least 4")]
    NotEnoughMoves { name: String, found: usize },

    /// Fewer records than the side wants to recruit
    #[error("{side} needs {wanted} combatants but only {available} records were supplied")]
    NotEnoughRecords {
        side: Side,
        wanted: usize,
        available: usize,
    },
}

/// Errors related to caller-side action validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Move key outside 1..=4
    #[error("Invalid move key: {0}")]
    InvalidMoveIndex(usize),
}

/// Errors raised while loading a battle configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(String),

    #[error("malformed config: {0}")]
    Parse(String),

    #[error("invalid power range {min}..={max}")]
    InvalidPowerRange { min: u32, max: u32 },

    #[error("{0} must be at least 1")]
    ZeroCount(&'static str),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using LineupError
pub type LineupResult<T> = Result<T, LineupError>;
