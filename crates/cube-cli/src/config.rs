use crate::theme::ThemeName;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Accepted `scramble_length` values.
pub const SCRAMBLE_LENGTHS: RangeInclusive<usize> = 1..=100;

/// Accepted `max_phase_iterations` values. Fewer than six applications per
/// target can leave a valid scramble unsolved.
pub const PHASE_ITERATIONS: RangeInclusive<usize> = 6..=1000;

/// User settings read from `config.json`. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colored cube nets
    pub color: bool,
    pub theme: ThemeName,
    /// Default length for `cube scramble`
    pub scramble_length: usize,
    /// Solver iteration cap per phase
    pub max_phase_iterations: usize,
    /// Print per-phase moves under each solution
    pub show_phases: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            theme: ThemeName::Dark,
            scramble_length: 20,
            max_phase_iterations: 6,
            show_phases: true,
        }
    }
}

impl Config {
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cube-solver")
            .join("config.json")
    }

    /// Load config from file; a missing file gives defaults, a broken one is logged and ignored.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|err| {
                log::warn!("ignoring malformed config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(_) => {
                log::debug!("no config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse `json`; out-of-range numbers are logged and replaced by their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::sanitized)
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !SCRAMBLE_LENGTHS.contains(&self.scramble_length) {
            log::warn!(
                "scramble_length {} outside {:?}, using {}",
                self.scramble_length,
                SCRAMBLE_LENGTHS,
                defaults.scramble_length
            );
            self.scramble_length = defaults.scramble_length;
        }
        if !PHASE_ITERATIONS.contains(&self.max_phase_iterations) {
            log::warn!(
                "max_phase_iterations {} outside {:?}, using {}",
                self.max_phase_iterations,
                PHASE_ITERATIONS,
                defaults.max_phase_iterations
            );
            self.max_phase_iterations = defaults.max_phase_iterations;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::from_json(r#"{ "color": false, "theme": "high_contrast" }"#).unwrap();
        assert!(!config.color);
        assert_eq!(config.theme, ThemeName::HighContrast);
        assert_eq!(config.scramble_length, 20);
        assert_eq!(config.max_phase_iterations, 6);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(Config::from_json("{ color: ").is_err());
        assert!(Config::from_json(r#"{ "theme": "neon" }"#).is_err());
    }

    #[test]
    fn test_out_of_range_numbers_fall_back_to_defaults() {
        for cap in [0, 2, 5, 1_000_000] {
            let json = format!(r#"{{ "max_phase_iterations": {} }}"#, cap);
            assert_eq!(Config::from_json(&json).unwrap().max_phase_iterations, 6);
        }
        let config =
            Config::from_json(r#"{ "scramble_length": 0, "max_phase_iterations": 12 }"#).unwrap();
        assert_eq!(config.scramble_length, 20);
        assert_eq!(config.max_phase_iterations, 12);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }
}
