//! Engine error type.
//!
//! Every engine computation is pure, so errors are precondition violations
//! reported synchronously at the offending call. There is nothing transient
//! to retry.

/// Errors raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("button pressed before the expected input was resolved")]
    PressBeforeReady,
    #[error("session is already activated")]
    AlreadyActivated,
    #[error("stage {stage} is out of range")]
    StageOutOfRange { stage: usize },
    #[error("row {row} is out of range")]
    RowOutOfRange { row: usize },
    #[error("column position {position} is outside the stage {stage} sequence of length {length}")]
    ColumnPositionOutOfRange {
        stage: usize,
        position: usize,
        length: usize,
    },
    #[error("letter {letter:?} is not in the second-table alphabet")]
    UnknownLetter { letter: char },
    #[error("color arrangement is not a permutation of the six colors")]
    InvalidArrangement,
    #[error("unknown color name {name:?}")]
    UnknownColor { name: String },
    #[error("invalid sequence configuration: {reason}")]
    InvalidSequenceConfig { reason: &'static str },
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
