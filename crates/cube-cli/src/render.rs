use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use cube_core::api::{ScrambleReport, SolveReport};
use cube_core::{CubeState, Face, ValidationReport};
use std::io::{self, Write};

/// Net layout: face and its column offset (in stickers) for each band of rows.
const BANDS: [&[(Face, u16)]; 3] = [
    &[(Face::U, 3)],
    &[(Face::L, 0), (Face::F, 3), (Face::R, 6), (Face::B, 9)],
    &[(Face::D, 3)],
];

/// Writes cube nets and reports, colored when a theme is set.
pub struct Renderer {
    theme: Option<Theme>,
}

impl Renderer {
    pub fn new(theme: Option<Theme>) -> Self {
        Self { theme }
    }

    pub fn banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rule = "=".repeat(60);
        writeln!(out, "{}", rule)?;
        writeln!(out, "{:^60}", "CUBE SOLVER")?;
        writeln!(out, "{:^60}", "Solving the 3x3 cube from any scrambled state")?;
        writeln!(out, "{}", rule)?;
        writeln!(out)
    }

    pub fn notation_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Standard move notation:")?;
        for (face, name) in [
            ('U', "Up"),
            ('D', "Down"),
            ('R', "Right"),
            ('L', "Left"),
            ('F', "Front"),
            ('B', "Back"),
        ] {
            writeln!(
                out,
                "  {face}  {name} clockwise   {face}'  {name} counter-clockwise   {face}2  {name} half turn"
            )?;
        }
        writeln!(out)
    }

    /// Unfolded net: U above, L F R B in a row, D below.
    pub fn net<W: Write>(&self, out: &mut W, state: &CubeState) -> io::Result<()> {
        let Some(theme) = &self.theme else {
            return write!(out, "{}", state);
        };

        for band in BANDS {
            for row in 0..3 {
                let mut column = 0;
                for &(face, offset) in band {
                    while column < offset {
                        queue!(out, Print("   "))?;
                        column += 1;
                    }
                    for &sticker in &state.face(face)[row] {
                        queue!(
                            out,
                            SetBackgroundColor(theme.sticker(sticker)),
                            SetForegroundColor(theme.label),
                            Print(format!(" {} ", sticker)),
                            ResetColor
                        )?;
                        column += 1;
                    }
                }
                queue!(out, Print("\n"))?;
            }
        }
        out.flush()
    }

    pub fn solve_report<W: Write>(
        &self,
        out: &mut W,
        report: &SolveReport,
        show_phases: bool,
    ) -> io::Result<()> {
        if !report.scramble.is_empty() {
            writeln!(out, "Scramble: {}", report.scramble)?;
        }
        writeln!(out, "Scrambled state:")?;
        self.net(out, &report.cube_state)?;
        writeln!(out)?;

        if report.solution.is_empty() {
            writeln!(out, "Cube is already solved.")?;
        } else {
            write!(out, "Solution ({} moves, {} quarter turns): ", report.move_count, report.quarter_turns)?;
            self.colored(out, |t| t.moves, &report.solution)?;
            writeln!(out)?;
        }

        if show_phases {
            for phase in report.phases.iter().filter(|p| p.move_count > 0) {
                write!(out, "  {:<32}", format!("{} ({})", phase.phase, phase.move_count))?;
                self.colored(out, |t| t.info, &phase.moves)?;
                writeln!(out)?;
            }
        }

        writeln!(
            out,
            "Method: {} - {} ({:.2} ms)",
            report.algorithm, report.description, report.solve_time_ms
        )?;
        if report.verified {
            self.colored(out, |t| t.success, "✓ Solution verified")?;
        } else {
            self.colored(out, |t| t.error, "✗ Solution verification failed")?;
        }
        writeln!(out)
    }

    pub fn scramble_report<W: Write>(
        &self,
        out: &mut W,
        report: &ScrambleReport,
        seed: Option<u64>,
    ) -> io::Result<()> {
        write!(out, "Scramble: ")?;
        self.colored(out, |t| t.moves, &report.scramble)?;
        writeln!(out)?;
        if let Some(seed) = seed {
            writeln!(out, "Seed: {}", seed)?;
        }
        self.net(out, &report.cube_state)
    }

    pub fn validation<W: Write>(&self, out: &mut W, report: &ValidationReport) -> io::Result<()> {
        if report.valid {
            self.colored(out, |t| t.success, "valid")?;
            writeln!(out, ": {} ({} moves)", report.message, report.move_count)
        } else {
            self.colored(out, |t| t.error, "invalid")?;
            writeln!(out, ": {}", report.message)
        }
    }

    pub fn error<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        self.colored(out, |t| t.error, &format!("Error: {}", message))?;
        writeln!(out)
    }

    fn colored<W: Write>(
        &self,
        out: &mut W,
        pick: impl Fn(&Theme) -> Color,
        text: &str,
    ) -> io::Result<()> {
        match &self.theme {
            Some(theme) => queue!(out, SetForegroundColor(pick(theme)), Print(text), ResetColor),
            None => write!(out, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(f: impl Fn(&Renderer, &mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&Renderer::new(None), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_net_matches_state_display() {
        let state = CubeState::solved();
        assert_eq!(plain(|r, out| r.net(out, &state)), state.to_string());
    }

    #[test]
    fn test_colored_net_has_nine_rows() {
        let mut buf = Vec::new();
        Renderer::new(Some(Theme::dark()))
            .net(&mut buf, &CubeState::solved())
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains(" W "));
    }

    #[test]
    fn test_solve_report_text() {
        let report = cube_core::api::solve_scramble("R U").unwrap();
        let text = plain(|r, out| r.solve_report(out, &report, true));
        assert!(text.contains("Scramble: R U"));
        assert!(text.contains(&report.solution));
        assert!(text.contains("Solution verified"));
        assert!(text.contains("Layer-by-Layer"));
    }

    #[test]
    fn test_validation_text() {
        let report = cube_core::validate("U X");
        let text = plain(|r, out| r.validation(out, &report));
        assert!(text.starts_with("invalid: "));
        assert!(text.contains("'X'"));
    }
}
