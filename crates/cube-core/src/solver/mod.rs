//! Solver orchestrator.
//!
//! Runs the six layer-by-layer phases in order over a private copy of the
//! input state. Each phase is table driven (see `tables`) and bounded by
//! [`SolverConfig::max_phase_iterations`].

mod phases;
mod tables;
mod types;

#[cfg(test)]
mod tests;

use crate::cube::CubeState;
use crate::error::SolveError;
use crate::validator::validate_state;
use phases::PhaseRunner;

pub use types::{Phase, PhaseSolution, Solution};

/// A strategy that turns a cube state into a solving move sequence.
pub trait CubeSolver {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Whether solutions are guaranteed move-minimal.
    fn is_optimal(&self) -> bool;

    fn solve(&self, state: &CubeState) -> Result<Solution, SolveError>;
}

/// Configuration for the layer-by-layer solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Upper bound on algorithm applications per phase target
    pub max_phase_iterations: usize,
    /// Reject unreachable states before solving
    pub validate_input: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_phase_iterations: 6,
            validate_input: true,
        }
    }
}

/// Beginner's layer-by-layer method. Stateless; all state is per call.
#[derive(Debug, Clone, Default)]
pub struct LayerByLayerSolver {
    config: SolverConfig,
}

impl LayerByLayerSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run the phases up to and including `last`, returning the moves and the resulting state.
    pub fn solve_through(
        &self,
        state: &CubeState,
        last: Phase,
    ) -> Result<(Solution, CubeState), SolveError> {
        if self.config.validate_input {
            validate_state(state)?;
        }

        let mut working = state.clone();
        let mut solution = Solution::default();
        if working.is_solved() {
            return Ok((solution, working));
        }

        for phase in Phase::ALL.into_iter().filter(|&p| p <= last) {
            let mut runner =
                PhaseRunner::new(&mut working, phase, self.config.max_phase_iterations);
            runner.run()?;
            let moves = runner.into_moves();
            log::debug!("phase '{}' finished with {} moves", phase, moves.len());
            solution.push_phase(phase, moves);
        }

        Ok((solution, working))
    }
}

impl CubeSolver for LayerByLayerSolver {
    fn name(&self) -> &str {
        "Layer-by-Layer"
    }

    fn description(&self) -> &str {
        "Beginner method approach"
    }

    fn is_optimal(&self) -> bool {
        false
    }

    fn solve(&self, state: &CubeState) -> Result<Solution, SolveError> {
        let (solution, _) = self.solve_through(state, Phase::LastLayerCornerOrientation)?;
        log::debug!(
            "solved in {} moves over {} phases",
            solution.len(),
            solution.phases.len()
        );
        Ok(solution)
    }
}
