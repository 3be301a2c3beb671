//! Error types surfaced by the solver's library API.

use thiserror::Error;

/// Failure modes of the constraint algebra and counting solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The constraint store (or a single integration) cannot be jointly
    /// satisfied. Permanent until the owning [`crate::Sweeper`] is reset.
    #[error("Impossible layout")]
    Contradiction,

    /// A coordinate fell outside the board's declared dimensions. This is a
    /// precondition violation by the caller, not a runtime condition the
    /// solver can recover from.
    #[error("tile ({row}, {col}) is out of bounds for a {height}x{width} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// A connected constraint component exceeded the tile budget the area
    /// solver is willing to enumerate.
    #[error("constraint component of {tiles} tiles exceeds the enumeration budget of {limit}")]
    ComponentTooLarge { tiles: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, SolverError>;
