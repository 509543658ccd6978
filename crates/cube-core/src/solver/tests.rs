use super::*;
use crate::error::StateError;
use crate::moves::parse_sequence;
use crate::scramble::ScrambleGenerator;
use crate::verify::SolutionVerifier;

fn scrambled(notation: &str) -> CubeState {
    let mut cube = CubeState::solved();
    cube.apply_notation(notation).unwrap();
    cube
}

#[test]
fn test_solved_input_gives_empty_solution() {
    let solution = LayerByLayerSolver::new().solve(&CubeState::solved()).unwrap();
    assert!(solution.is_empty());
    assert!(solution.phases.is_empty());
    assert!(SolutionVerifier::verify(&CubeState::solved(), &solution.moves));
}

#[test]
fn test_single_moves_solve() {
    let solver = LayerByLayerSolver::new();
    for token in ["R", "U'", "F2", "D", "L'", "B"] {
        let cube = scrambled(token);
        let solution = solver.solve(&cube).unwrap();
        assert!(SolutionVerifier::verify(&cube, &solution.moves), "{token}");
    }
}

#[test]
fn test_known_scramble_solves() {
    let cube = scrambled("R U R' U' R' F R2 U' R' U' R U R' F'");
    let solution = LayerByLayerSolver::new().solve(&cube).unwrap();
    assert!(!solution.is_empty());
    assert!(SolutionVerifier::verify(&cube, &solution.moves));
}

#[test]
fn test_random_scrambles_verify() {
    let solver = LayerByLayerSolver::new();
    let mut generator = ScrambleGenerator::with_seed(2024);
    for length in 1..=50 {
        for _ in 0..4 {
            let scramble = generator.generate_len(length);
            let mut cube = CubeState::solved();
            cube.apply_all(&scramble);

            let solution = solver.solve(&cube).unwrap();
            assert!(
                SolutionVerifier::verify(&cube, &solution.moves),
                "scramble {:?} not solved",
                crate::moves::format_sequence(&scramble)
            );
        }
    }
}

#[test]
fn test_phase_predicates_hold_in_order() {
    let solver = LayerByLayerSolver::new();
    let cube = scrambled("F R' U2 L D' B R2 F' U L' D2 B' R U' F2 L2");
    for phase in Phase::ALL {
        let (_, state) = solver.solve_through(&cube, phase).unwrap();
        for earlier in Phase::ALL.into_iter().filter(|&p| p <= phase) {
            assert!(earlier.is_complete(&state), "{earlier} after {phase}");
        }
    }
}

#[test]
fn test_phase_moves_concatenate() {
    let cube = scrambled("B2 L U' R D F' L2 U B' R2");
    let solution = LayerByLayerSolver::new().solve(&cube).unwrap();
    assert_eq!(solution.phases.len(), Phase::ALL.len());
    let joined: Vec<_> = solution
        .phases
        .iter()
        .flat_map(|p| p.moves.iter().copied())
        .collect();
    assert_eq!(joined, solution.moves);
    assert_eq!(
        parse_sequence(&solution.notation()).unwrap(),
        solution.moves
    );
}

#[test]
fn test_solver_is_deterministic() {
    let cube = scrambled("U2 F R' D L2 B U' F2 R D'");
    let solver = LayerByLayerSolver::new();
    assert_eq!(solver.solve(&cube).unwrap(), solver.solve(&cube).unwrap());
}

#[test]
fn test_rejects_invalid_state() {
    let mut cube = CubeState::solved();
    let top = cube.facelet(crate::cube::Face::U, 2, 1).unwrap();
    let side = cube.facelet(crate::cube::Face::F, 0, 1).unwrap();
    cube.set_facelet(crate::cube::Face::U, 2, 1, side).unwrap();
    cube.set_facelet(crate::cube::Face::F, 0, 1, top).unwrap();

    assert_eq!(
        LayerByLayerSolver::new().solve(&cube),
        Err(SolveError::InvalidState(StateError::FlippedEdge))
    );
}

#[test]
fn test_mirrored_corner_is_invalid_input() {
    let mut cube = scrambled("R U R' U'");
    let [_, f, r] = crate::pieces::CornerSlot::top(0).facelets();
    let (cf, cr) = (cube.facelet_at(f), cube.facelet_at(r));
    cube.set_facelet(f.face, f.row, f.col, cr).unwrap();
    cube.set_facelet(r.face, r.row, r.col, cf).unwrap();

    assert!(matches!(
        LayerByLayerSolver::new().solve(&cube),
        Err(SolveError::InvalidState(StateError::UnknownCorner { .. }))
    ));
}

#[test]
fn test_iteration_cap_reports_phase() {
    let solver = LayerByLayerSolver::with_config(SolverConfig {
        max_phase_iterations: 0,
        ..SolverConfig::default()
    });
    let cube = scrambled("R U F");
    match solver.solve(&cube) {
        Err(SolveError::PhaseConvergenceFailure { iterations, .. }) => assert_eq!(iterations, 0),
        other => panic!("expected convergence failure, got {:?}", other),
    }
}

#[test]
fn test_trait_metadata() {
    let solver: &dyn CubeSolver = &LayerByLayerSolver::new();
    assert_eq!(solver.name(), "Layer-by-Layer");
    assert_eq!(solver.description(), "Beginner method approach");
    assert!(!solver.is_optimal());
}
