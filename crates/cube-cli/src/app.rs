use crate::config::{Config, SCRAMBLE_LENGTHS};
use crate::render::Renderer;
use cube_core::api::{self, SolveReport};
use cube_core::{LayerByLayerSolver, ScrambleConfig, ScrambleGenerator, SolveError, SolverConfig};
use rand::Rng;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Scrambles shown by `cube demo`.
pub const DEMO_SCRAMBLES: [&str; 4] = [
    "R U R' F R F'",
    "R U R' U R U2 R'",
    "F R U' R' U' R U R' F'",
    "R U R' U' R' F R2 U' R' U' R U R' F'",
];

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scramble length must be between 1 and 100, got {0}")]
    ScrambleLength(usize),
}

/// Shared state for one CLI invocation.
pub struct App {
    config: Config,
    renderer: Renderer,
    solver: LayerByLayerSolver,
    json: bool,
}

impl App {
    pub fn new(config: Config, renderer: Renderer, json: bool) -> Self {
        let solver = LayerByLayerSolver::with_config(SolverConfig {
            max_phase_iterations: config.max_phase_iterations,
            ..SolverConfig::default()
        });
        Self {
            config,
            renderer,
            solver,
            json,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    fn print_json<W: Write, T: Serialize>(&self, out: &mut W, value: &T) -> Result<(), AppError> {
        writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    fn solve_text(&self, text: &str) -> Result<SolveReport, AppError> {
        Ok(api::solve_scramble_with(text, &self.solver)?)
    }

    pub fn solve<W: Write>(&self, out: &mut W, text: &str) -> Result<bool, AppError> {
        let report = self.solve_text(text)?;
        if self.json {
            self.print_json(out, &report)?;
        } else {
            self.renderer
                .solve_report(out, &report, self.config.show_phases)?;
        }
        Ok(report.verified)
    }

    pub fn scramble<W: Write>(
        &self,
        out: &mut W,
        length: Option<usize>,
        seed: Option<u64>,
    ) -> Result<(), AppError> {
        let length = length.unwrap_or(self.config.scramble_length);
        if !SCRAMBLE_LENGTHS.contains(&length) {
            return Err(AppError::ScrambleLength(length));
        }
        // Always seeded so the printed seed reproduces the scramble.
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut generator =
            ScrambleGenerator::with_config_and_seed(ScrambleConfig::with_length(length), seed);
        let report = api::new_scramble(&mut generator);

        if self.json {
            self.print_json(out, &report)
        } else {
            self.renderer.scramble_report(out, &report, Some(seed))?;
            Ok(())
        }
    }

    pub fn validate<W: Write>(&self, out: &mut W, text: &str) -> Result<bool, AppError> {
        let report = api::validate_moves(text);
        if self.json {
            self.print_json(out, &report)?;
        } else {
            self.renderer.validation(out, &report)?;
        }
        Ok(report.valid)
    }

    pub fn demo<W: Write>(&self, out: &mut W) -> Result<bool, AppError> {
        if self.json {
            let reports = DEMO_SCRAMBLES
                .iter()
                .map(|s| self.solve_text(s))
                .collect::<Result<Vec<_>, _>>()?;
            self.print_json(out, &reports)?;
            return Ok(reports.iter().all(|r| r.verified));
        }

        self.renderer.banner(out)?;
        writeln!(out, "DEMONSTRATION: Solving scrambled cubes")?;
        writeln!(out, "{}", "-".repeat(40))?;
        let mut all_verified = true;
        for (i, scramble) in DEMO_SCRAMBLES.iter().enumerate() {
            writeln!(out, "\nExample {}", i + 1)?;
            writeln!(out, "{}", "-".repeat(30))?;
            all_verified &= self.solve(out, scramble)?;
        }
        Ok(all_verified)
    }

    /// Prompt loop over `input`. Blank lines are skipped; `quit`, `exit` or `q` leave.
    pub fn interactive<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<(), AppError> {
        self.renderer.banner(out)?;
        self.renderer.notation_help(out)?;
        writeln!(out, "Enter a scramble to solve, 'scramble' for a random one, or 'quit' to exit.")?;
        writeln!(out, "Example: R U R' F R F'")?;

        let mut lines = input.lines();
        loop {
            write!(out, "\nScramble > ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let line = line.trim();

            match line.to_lowercase().as_str() {
                "" => continue,
                "quit" | "exit" | "q" => break,
                "scramble" => {
                    let report = api::new_scramble(&mut ScrambleGenerator::with_config(
                        ScrambleConfig::with_length(self.config.scramble_length),
                    ));
                    writeln!(out, "Random scramble: {}", report.scramble)?;
                    self.solve_or_report(out, &report.scramble)?;
                }
                _ => self.solve_or_report(out, line)?,
            }
        }

        writeln!(out, "\nGoodbye!")?;
        Ok(())
    }

    /// Solve `text`, printing move errors instead of aborting the session.
    fn solve_or_report<W: Write>(&self, out: &mut W, text: &str) -> Result<(), AppError> {
        match self.solve(out, text) {
            Ok(_) => Ok(()),
            Err(AppError::Solve(err)) => {
                self.renderer.error(out, &err.to_string())?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
