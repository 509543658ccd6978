//! Core engine for the 3x3 cube: facelet state, move application, scrambling,
//! state validation and a layer-by-layer solver with solution verification.
//!
//! ```
//! use cube_core::{CubeSolver, CubeState, LayerByLayerSolver, SolutionVerifier};
//!
//! let mut cube = CubeState::solved();
//! cube.apply_notation("R U R' U'").unwrap();
//!
//! let solution = LayerByLayerSolver::new().solve(&cube).unwrap();
//! assert!(SolutionVerifier::verify(&cube, &solution.moves));
//! ```

pub mod api;
mod cube;
mod error;
mod moves;
mod pieces;
mod scramble;
mod solver;
mod validator;
mod verify;

pub use cube::{Color, CubeState, Face, FaceGrid, FaceletMap};
pub use error::{CubeError, SolveError, StateError, VerificationFailed};
pub use moves::{
    format_sequence, invert_sequence, parse_sequence, quarter_turn_count, Move, Turn,
};
pub use pieces::{CornerSlot, EdgeSlot, Facelet, Layer};
pub use scramble::{ScrambleConfig, ScrambleGenerator};
pub use solver::{CubeSolver, LayerByLayerSolver, Phase, PhaseSolution, Solution, SolverConfig};
pub use validator::{validate, validate_state, ValidationReport};
pub use verify::SolutionVerifier;
