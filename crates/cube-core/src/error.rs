use crate::cube::{Color, Face};
use crate::solver::Phase;
use thiserror::Error;

/// Errors raised while reading moves or touching facelets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// A token in a move sequence does not follow the move grammar.
    #[error("invalid move token '{token}' at position {position}")]
    InvalidMoveToken {
        /// The offending token, verbatim.
        token: String,
        /// 1-based position of the token in the sequence.
        position: usize,
    },

    #[error("facelet ({row}, {col}) is outside the 3x3 face grid")]
    FaceletOutOfBounds { row: usize, col: usize },
}

/// Reasons an externally supplied facelet grid is not a reachable cube.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("expected 9 facelets of {color}, found {count}")]
    ColorCount { color: Color, count: usize },

    #[error("center of face {face} is {found}, expected {expected}")]
    CenterMismatch {
        face: Face,
        expected: Color,
        found: Color,
    },

    #[error("edge slot {slot} holds colors {colors:?} which form no edge piece")]
    UnknownEdge { slot: String, colors: [Color; 2] },

    #[error("corner slot {slot} holds colors {colors:?} which form no corner piece")]
    UnknownCorner { slot: String, colors: [Color; 3] },

    #[error("piece {piece} appears more than once")]
    DuplicatePiece { piece: String },

    #[error("edge orientation parity is odd (a single edge is flipped)")]
    FlippedEdge,

    #[error("corner twist sum is {twist} mod 3 (a corner is twisted)")]
    TwistedCorner { twist: u8 },

    #[error("edge and corner permutation parities differ (two pieces are swapped)")]
    PermutationParity,
}

/// Errors produced by a solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Move(#[from] CubeError),

    #[error("cannot solve an invalid cube state: {0}")]
    InvalidState(#[from] StateError),

    /// A phase hit its iteration cap. Indicates a solver defect, never user error.
    #[error("phase '{phase}' did not converge within {iterations} iterations")]
    PhaseConvergenceFailure { phase: Phase, iterations: usize },

    /// A phase detected a pattern its algorithm table has no entry for.
    #[error("phase '{phase}' found no algorithm for pattern {pattern}")]
    UnrecognizedPattern { phase: Phase, pattern: String },
}

/// Replaying a solution did not reach the solved state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("solution leaves {mismatched} facelets out of place")]
pub struct VerificationFailed {
    pub mismatched: usize,
}
