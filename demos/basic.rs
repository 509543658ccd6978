//! Basic example of using cube-core

use cube_core::{
    api, validate, CubeSolver, CubeState, LayerByLayerSolver, ScrambleGenerator,
    SolutionVerifier,
};

fn main() {
    println!("=== Cube Core Example ===\n");

    // Generate a reproducible scramble
    let mut generator = ScrambleGenerator::with_seed(2024);
    let scramble = generator.generate();
    let mut cube = CubeState::solved();
    cube.apply_all(&scramble);

    println!("Scramble: {}", cube_core::format_sequence(&scramble));
    println!("{}", cube);

    // Solve it
    let solver = LayerByLayerSolver::new();
    match solver.solve(&cube) {
        Ok(solution) => {
            println!("Solution ({} moves): {}", solution.len(), solution);
            for phase in &solution.phases {
                println!(
                    "  {:<32} {}",
                    phase.phase.name(),
                    cube_core::format_sequence(&phase.moves)
                );
            }
            println!("Verified: {}", SolutionVerifier::verify(&cube, &solution.moves));
        }
        Err(err) => println!("Solve failed: {}", err),
    }

    // Grammar validation
    println!();
    for text in ["U R' F2", "U X", ""] {
        let report = validate(text);
        println!("{:?} -> valid={} ({})", text, report.valid, report.message);
    }

    // Request-level API
    match api::solve_scramble("R U R' U' R' F R2 U' R' U' R U R' F'") {
        Ok(report) => println!(
            "\n{} solution in {} moves, verified={}",
            report.algorithm, report.move_count, report.verified
        ),
        Err(err) => println!("\nSolve failed: {}", err),
    }
}
