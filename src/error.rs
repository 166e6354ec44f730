use crate::agent::AgentId;
use std::fmt;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidState {
    ChoiceNotMade,
    PredictionNotMade,
    NotPrepared,
    NoNeighbourhood,
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ChoiceNotMade => "no choice has been made this round",
            Self::PredictionNotMade => "no prediction has been made this round",
            Self::NotPrepared => "agent must prepare before choosing",
            Self::NoNeighbourhood => "no neighbourhood has been set",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid state: {0}")]
    InvalidState(InvalidState),

    #[error("a strategy collection needs at least one strategy")]
    EmptyStrategyCollection,

    #[error("memory length {length} is outside 1..={max}")]
    InvalidMemoryLength { length: usize, max: usize },

    /// Tables must cover every key of some memory length M >= 1.
    #[error("strategy table of length {len} is not 2^M for any M >= 1")]
    InvalidStrategyTable { len: usize },

    #[error("key {key} is outside a strategy table of length {table_len}")]
    KeyOutOfRange { key: usize, table_len: usize },

    #[error("expected key length {expected}, found {found}")]
    MismatchedKeyLength { expected: usize, found: usize },

    #[error("a population needs at least one agent")]
    EmptyPopulation,

    #[error("agent {0} is already part of the social network")]
    DuplicateAgent(AgentId),

    #[error("agent {0} is not part of the social network")]
    UnknownAgent(AgentId),

    #[error("unknown game type '{name}', expected one of {accepted:?}")]
    UnknownGameType { name: String, accepted: Vec<String> },
}

impl From<InvalidState> for GameError {
    fn from(state: InvalidState) -> Self {
        Self::InvalidState(state)
    }
}

impl GameError {
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}
