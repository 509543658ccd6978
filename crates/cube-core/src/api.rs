//! Request-level entry points and their serializable reports.
//!
//! Each call builds its own cube, solver run and timer; nothing is shared
//! between calls.

use crate::cube::CubeState;
use crate::error::SolveError;
use crate::moves::{format_sequence, parse_sequence};
use crate::scramble::ScrambleGenerator;
use crate::solver::{CubeSolver, LayerByLayerSolver, Phase, Solution};
use crate::validator::{validate, ValidationReport};
use crate::verify::SolutionVerifier;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Moves contributed by one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseReport {
    pub phase: Phase,
    pub moves: String,
    pub move_count: usize,
}

/// Result of solving one cube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    pub solution: String,
    pub move_count: usize,
    pub verified: bool,
    /// The state before solving.
    pub cube_state: CubeState,
    pub scramble: String,
    pub algorithm: String,
    pub description: String,
    pub optimal: bool,
    pub quarter_turns: usize,
    pub solve_time_ms: f64,
    pub phases: Vec<PhaseReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleReport {
    pub scramble: String,
    pub cube_state: CubeState,
}

/// Parse `text`, scramble a solved cube with it and solve with the layer-by-layer method.
pub fn solve_scramble(text: &str) -> Result<SolveReport, SolveError> {
    solve_scramble_with(text, &LayerByLayerSolver::new())
}

pub fn solve_scramble_with(
    text: &str,
    solver: &dyn CubeSolver,
) -> Result<SolveReport, SolveError> {
    let moves = parse_sequence(text)?;
    let mut cube = CubeState::solved();
    cube.apply_all(&moves);

    let mut report = solve_state(&cube, solver)?;
    report.scramble = format_sequence(&moves);
    Ok(report)
}

/// Solve an arbitrary state. The report's `scramble` is empty.
pub fn solve_state(state: &CubeState, solver: &dyn CubeSolver) -> Result<SolveReport, SolveError> {
    let start = Instant::now();
    let solution = solver.solve(state)?;
    let solve_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let verified = match SolutionVerifier::check(state, &solution.moves) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("{} solution failed verification: {}", solver.name(), err);
            false
        }
    };

    log::info!(
        "{} solved cube in {} moves ({:.2} ms)",
        solver.name(),
        solution.len(),
        solve_time_ms
    );

    Ok(SolveReport {
        solution: solution.notation(),
        move_count: solution.len(),
        verified,
        cube_state: state.clone(),
        scramble: String::new(),
        algorithm: solver.name().to_string(),
        description: solver.description().to_string(),
        optimal: solver.is_optimal(),
        quarter_turns: solution.quarter_turns(),
        solve_time_ms,
        phases: phase_reports(&solution),
    })
}

fn phase_reports(solution: &Solution) -> Vec<PhaseReport> {
    solution
        .phases
        .iter()
        .map(|p| PhaseReport {
            phase: p.phase,
            moves: format_sequence(&p.moves),
            move_count: p.moves.len(),
        })
        .collect()
}

/// Draw a fresh scramble and the state it produces.
pub fn new_scramble(generator: &mut ScrambleGenerator) -> ScrambleReport {
    let moves = generator.generate();
    ScrambleReport {
        scramble: format_sequence(&moves),
        cube_state: CubeState::solved().after(&moves),
    }
}

/// State produced by a caller-supplied scramble.
pub fn replay_scramble(text: &str) -> Result<ScrambleReport, SolveError> {
    let moves = parse_sequence(text)?;
    Ok(ScrambleReport {
        scramble: format_sequence(&moves),
        cube_state: CubeState::solved().after(&moves),
    })
}

pub fn validate_moves(text: &str) -> ValidationReport {
    validate(text)
}
