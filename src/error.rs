//! Error type shared by the environment, agents and arena.

use thiserror::Error;

/// Errors surfaced by the Gomoku environment and its drivers.
///
/// Contract violations (bad actions, wrong policy shapes) are reported
/// immediately and never corrected; the arena treats them as match-fatal.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GomokuError {
    #[error("action {action} is outside the action space of size {action_size}")]
    ActionOutOfRange { action: usize, action_size: usize },

    #[error("cell ({column}, {row}) is already occupied")]
    CellOccupied { column: usize, row: usize },

    #[error("agent '{agent}' selected illegal action {action}")]
    IllegalAction { agent: String, action: usize },

    #[error("policy vector has length {got}, expected {expected}")]
    PolicyLength { expected: usize, got: usize },

    #[error("board size must be positive, got {0}")]
    InvalidBoardSize(usize),

    #[error("board has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid cell value {0} (expected -1, 0 or 1)")]
    InvalidCellValue(i8),

    #[error("invalid side {0} (expected -1 or 1)")]
    InvalidSide(i8),

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("verbose play requires a display")]
    MissingDisplay,

    #[error("input closed before a legal move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode board: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("invalid progress bar template: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}
