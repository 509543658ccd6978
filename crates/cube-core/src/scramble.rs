//! Random scramble generation.

use crate::cube::Face;
use crate::moves::{Move, Turn};

/// Configuration for scramble generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleConfig {
    /// Number of moves per scramble
    pub length: usize,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self { length: 20 }
    }
}

impl ScrambleConfig {
    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

/// Produces random move sequences with no trivially cancelling neighbours.
///
/// Each generator owns its RNG; two generators never share state.
pub struct ScrambleGenerator {
    config: ScrambleConfig,
    rng: SimpleRng,
}

impl Default for ScrambleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrambleGenerator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self {
            config: ScrambleConfig::default(),
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: ScrambleConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: ScrambleConfig::default(),
            rng: SimpleRng::with_seed(seed),
        }
    }

    pub fn with_config_and_seed(config: ScrambleConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SimpleRng::with_seed(seed),
        }
    }

    pub fn config(&self) -> &ScrambleConfig {
        &self.config
    }

    /// Generate a scramble of the configured length
    pub fn generate(&mut self) -> Vec<Move> {
        self.generate_len(self.config.length)
    }

    /// Generate a scramble of `length` moves.
    ///
    /// A move never turns the same face as the move before it, and after two
    /// moves on opposite faces (`U D`, `L R`, ...) that axis is skipped.
    pub fn generate_len(&mut self, length: usize) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(length);

        while moves.len() < length {
            let last = moves.last().map(|m| m.face);
            let blocked_axis = match moves.as_slice() {
                [.., a, b] if a.face == b.face.opposite() => Some(b.face),
                _ => None,
            };

            let allowed: Vec<Face> = Face::ALL
                .into_iter()
                .filter(|&face| Some(face) != last)
                .filter(|&face| match blocked_axis {
                    Some(axis) => face != axis && face != axis.opposite(),
                    None => true,
                })
                .collect();

            let face = allowed[self.rng.next_usize(allowed.len())];
            let turn = Turn::ALL[self.rng.next_usize(Turn::ALL.len())];
            moves.push(Move::new(face, turn));
        }

        log::debug!("generated scramble of {} moves", moves.len());
        moves
    }
}

/// Small PCG-style generator so seeded scrambles are reproducible everywhere.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        let seed = match getrandom::getrandom(&mut seed_bytes) {
            Ok(()) => u64::from_le_bytes(seed_bytes),
            Err(err) => {
                log::warn!("OS entropy unavailable ({}), seeding from the clock", err);
                clock_seed()
            }
        };
        Self::with_seed(seed)
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x9E37_79B9_7F4A_7C15)
}
