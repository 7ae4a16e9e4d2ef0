//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("coordinate ({row}, {col}) is out of bounds (rows and columns run 0-2)")]
    CoordOutOfBounds { row: usize, col: usize },

    #[error("round already over")]
    RoundOver,

    #[error("no legal moves available")]
    NoMovesAvailable,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid marker counts: X={x_count}, O={o_count} (markers alternate, so counts differ by at most 1)")]
    InvalidMarkerCounts { x_count: usize, o_count: usize },

    #[error("invalid marker '{input}' (expected 'X' or 'O')")]
    InvalidMarker { input: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
