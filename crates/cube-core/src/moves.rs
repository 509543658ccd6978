//! Move notation and the face-turn engine.
//!
//! Every turn is "rotate the face's own grid" plus "shift the four strips
//! that border it". [`ADJACENCY`] lists those strips and is the only place
//! the geometry of a turn is written down.

use crate::cube::{Color, CubeState, Face};
use crate::error::CubeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount a face is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// 90° clockwise, looking at the face.
    Clockwise,
    /// 180°.
    Double,
    /// 90° counter-clockwise.
    CounterClockwise,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::Double, Turn::CounterClockwise];

    /// Number of clockwise quarter turns this amounts to.
    pub fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    pub fn from_quarter_turns(quarters: usize) -> Option<Turn> {
        match quarters % 4 {
            1 => Some(Turn::Clockwise),
            2 => Some(Turn::Double),
            3 => Some(Turn::CounterClockwise),
            _ => None,
        }
    }

    pub fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Double => Turn::Double,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Double => "2",
            Turn::CounterClockwise => "'",
        }
    }
}

/// A single face turn such as `R`, `U'` or `F2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    pub fn inverse(self) -> Move {
        Move::new(self.face, self.turn.inverse())
    }

    /// The same turn applied to the face `offset` sides further round (see [`Face::shifted`]).
    pub fn shifted(self, offset: usize) -> Move {
        Move::new(self.face.shifted(offset), self.turn)
    }

    /// `quarters` clockwise quarter turns of U, or `None` for a multiple of four.
    pub fn u_turns(quarters: usize) -> Option<Move> {
        Turn::from_quarter_turns(quarters).map(|turn| Move::new(Face::U, turn))
    }

    pub fn all() -> impl Iterator<Item = Move> {
        Face::ALL
            .into_iter()
            .flat_map(|face| Turn::ALL.into_iter().map(move |turn| Move::new(face, turn)))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    /// Parse a single token; an error reports it at position 1.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        parse_token(token, 1)
    }
}

fn parse_token(token: &str, position: usize) -> Result<Move, CubeError> {
    let invalid = || CubeError::InvalidMoveToken {
        token: token.to_string(),
        position,
    };

    let mut chars = token.chars();
    let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
    let turn = match (chars.next(), chars.next()) {
        (None, _) => Turn::Clockwise,
        (Some('\''), None) => Turn::CounterClockwise,
        (Some('2'), None) => Turn::Double,
        _ => return Err(invalid()),
    };
    Ok(Move::new(face, turn))
}

/// Parse a whitespace-separated move sequence. Blank input is the empty sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, CubeError> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| parse_token(token, i + 1))
        .collect()
}

/// Render moves in standard notation separated by single spaces.
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sum of quarter turns, counting a half turn as two.
pub fn quarter_turn_count(moves: &[Move]) -> usize {
    moves
        .iter()
        .map(|m| if m.turn == Turn::Double { 2 } else { 1 })
        .sum()
}

/// Moves undoing `moves`.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}

/// Three facelets along one edge of a face, read in a fixed order.
#[derive(Debug, Clone, Copy)]
enum Strip {
    Row(usize),
    Col(usize),
    /// Row read from column 2 down to column 0.
    RowRev(usize),
    /// Column read from row 2 up to row 0.
    ColRev(usize),
}

impl Strip {
    fn cell(self, k: usize) -> (usize, usize) {
        match self {
            Strip::Row(r) => (r, k),
            Strip::Col(c) => (k, c),
            Strip::RowRev(r) => (r, 2 - k),
            Strip::ColRev(c) => (2 - k, c),
        }
    }
}

/// The four strips bordering one face, in the order a clockwise turn carries them:
/// element `k` of `ring[i]` moves to element `k` of `ring[i + 1]`.
struct Ring {
    ring: [(Face, Strip); 4],
}

/// Neighbour strips per face, indexed by [`Face::index`].
const ADJACENCY: [Ring; 6] = [
    // U
    Ring {
        ring: [
            (Face::F, Strip::Row(0)),
            (Face::L, Strip::Row(0)),
            (Face::B, Strip::Row(0)),
            (Face::R, Strip::Row(0)),
        ],
    },
    // D
    Ring {
        ring: [
            (Face::F, Strip::Row(2)),
            (Face::R, Strip::Row(2)),
            (Face::B, Strip::Row(2)),
            (Face::L, Strip::Row(2)),
        ],
    },
    // F
    Ring {
        ring: [
            (Face::U, Strip::Row(2)),
            (Face::R, Strip::Col(0)),
            (Face::D, Strip::RowRev(0)),
            (Face::L, Strip::ColRev(2)),
        ],
    },
    // B
    Ring {
        ring: [
            (Face::U, Strip::Row(0)),
            (Face::L, Strip::ColRev(0)),
            (Face::D, Strip::RowRev(2)),
            (Face::R, Strip::Col(2)),
        ],
    },
    // L
    Ring {
        ring: [
            (Face::U, Strip::Col(0)),
            (Face::F, Strip::Col(0)),
            (Face::D, Strip::Col(0)),
            (Face::B, Strip::ColRev(2)),
        ],
    },
    // R
    Ring {
        ring: [
            (Face::F, Strip::Col(2)),
            (Face::U, Strip::Col(2)),
            (Face::B, Strip::ColRev(0)),
            (Face::D, Strip::Col(2)),
        ],
    },
];

impl CubeState {
    /// Apply one move in place.
    pub fn apply(&mut self, mv: Move) {
        let k = mv.turn.quarter_turns();

        let grid = self.grid_mut(mv.face);
        for _ in 0..k {
            let old = *grid;
            for (r, row) in grid.iter_mut().enumerate() {
                for (c, cell) in row.iter_mut().enumerate() {
                    *cell = old[2 - c][r];
                }
            }
        }

        let ring = &ADJACENCY[mv.face.index()].ring;
        let mut saved = [[Color::White; 3]; 4];
        for (i, &(face, strip)) in ring.iter().enumerate() {
            for (k_idx, slot) in saved[i].iter_mut().enumerate() {
                let (r, c) = strip.cell(k_idx);
                *slot = self.get(face, r, c);
            }
        }
        for (i, strip_colors) in saved.iter().enumerate() {
            let (face, strip) = ring[(i + k) % 4];
            let grid = self.grid_mut(face);
            for (k_idx, &color) in strip_colors.iter().enumerate() {
                let (r, c) = strip.cell(k_idx);
                grid[r][c] = color;
            }
        }
    }

    /// Apply moves left to right, in place.
    pub fn apply_all(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply(mv);
        }
    }

    /// Parse and apply a move sequence. On a parse error the state is untouched.
    pub fn apply_notation(&mut self, text: &str) -> Result<usize, CubeError> {
        let moves = parse_sequence(text)?;
        self.apply_all(&moves);
        Ok(moves.len())
    }

    /// A copy of this state with `moves` applied.
    pub fn after(&self, moves: &[Move]) -> CubeState {
        let mut next = self.clone();
        next.apply_all(moves);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrambled() -> CubeState {
        let mut cube = CubeState::solved();
        cube.apply_notation("R U2 F' L D B2 R' U L2 F D' B").unwrap();
        cube
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("R".parse::<Move>().unwrap(), Move::new(Face::R, Turn::Clockwise));
        assert_eq!("U'".parse::<Move>().unwrap(), Move::new(Face::U, Turn::CounterClockwise));
        assert_eq!("F2".parse::<Move>().unwrap(), Move::new(Face::F, Turn::Double));
        for bad in ["X", "r", "U2'", "U'2", "R3", "", "UU"] {
            assert!(bad.parse::<Move>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_parse_sequence_reports_position() {
        let err = parse_sequence("U R' F2 Q B").unwrap_err();
        assert_eq!(
            err,
            CubeError::InvalidMoveToken {
                token: "Q".to_string(),
                position: 4
            }
        );
        assert!(parse_sequence("   ").unwrap().is_empty());
    }

    #[test]
    fn test_format_roundtrip() {
        let text = "R U R' U' F2 D' B L2";
        let moves = parse_sequence(text).unwrap();
        assert_eq!(format_sequence(&moves), text);
        assert_eq!(quarter_turn_count(&moves), 10);
    }

    #[test]
    fn test_four_quarter_turns_is_identity() {
        let start = scrambled();
        for mv in Move::all() {
            let mut cube = start.clone();
            for _ in 0..4 {
                cube.apply(mv);
            }
            assert_eq!(cube, start, "{mv} applied four times");
        }
    }

    #[test]
    fn test_move_then_inverse_is_identity() {
        let start = scrambled();
        for mv in Move::all() {
            let mut cube = start.clone();
            cube.apply(mv);
            cube.apply(mv.inverse());
            assert_eq!(cube, start, "{mv} then {}", mv.inverse());
        }
    }

    #[test]
    fn test_double_equals_two_quarters() {
        for face in Face::ALL {
            let mut a = scrambled();
            let mut b = a.clone();
            a.apply(Move::new(face, Turn::Double));
            b.apply(Move::new(face, Turn::Clockwise));
            b.apply(Move::new(face, Turn::Clockwise));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_sequence_inverse() {
        let moves = parse_sequence("R U2 F' L D B2").unwrap();
        let mut cube = CubeState::solved();
        cube.apply_all(&moves);
        cube.apply_all(&invert_sequence(&moves));
        assert!(cube.is_solved());
    }

    #[test]
    fn test_color_counts_preserved() {
        let moves: Vec<Move> = Move::all().collect();
        let mut cube = CubeState::solved();
        for mv in moves.iter().cycle().step_by(5).take(200).copied() {
            cube.apply(mv);
            assert_eq!(cube.color_counts(), [9; 6]);
            for face in Face::ALL {
                assert_eq!(cube.center(face), Color::home(face));
            }
        }
    }

    #[test]
    fn test_u_turn_strips() {
        let mut cube = CubeState::solved();
        cube.apply("U".parse().unwrap());
        // Front's top row comes from the right face.
        assert_eq!(cube.face(Face::F)[0], [Color::Green; 3]);
        assert_eq!(cube.face(Face::L)[0], [Color::Red; 3]);
        assert_eq!(cube.face(Face::B)[0], [Color::Blue; 3]);
        assert_eq!(cube.face(Face::R)[0], [Color::Orange; 3]);
        assert_eq!(cube.face(Face::F)[1], [Color::Red; 3]);
    }

    #[test]
    fn test_r_turn_strips() {
        let mut cube = CubeState::solved();
        cube.apply("R".parse().unwrap());
        for row in 0..3 {
            assert_eq!(cube.get(Face::U, row, 2), Color::Red);
            assert_eq!(cube.get(Face::F, row, 2), Color::Yellow);
            assert_eq!(cube.get(Face::D, row, 2), Color::Orange);
            assert_eq!(cube.get(Face::B, row, 0), Color::White);
            assert_eq!(cube.get(Face::U, row, 0), Color::White);
        }
    }

    #[test]
    fn test_f_turn_strips() {
        let mut cube = CubeState::solved();
        cube.apply("F".parse().unwrap());
        for k in 0..3 {
            assert_eq!(cube.get(Face::R, k, 0), Color::White);
            assert_eq!(cube.get(Face::D, 0, k), Color::Green);
            assert_eq!(cube.get(Face::L, k, 2), Color::Yellow);
            assert_eq!(cube.get(Face::U, 2, k), Color::Blue);
        }
    }

    #[test]
    fn test_b_and_l_and_d_turn_strips() {
        let mut cube = CubeState::solved();
        cube.apply("B".parse().unwrap());
        for k in 0..3 {
            assert_eq!(cube.get(Face::L, k, 0), Color::White);
            assert_eq!(cube.get(Face::U, 0, k), Color::Green);
        }

        let mut cube = CubeState::solved();
        cube.apply("L".parse().unwrap());
        for k in 0..3 {
            assert_eq!(cube.get(Face::F, k, 0), Color::White);
            assert_eq!(cube.get(Face::B, k, 2), Color::Yellow);
        }

        let mut cube = CubeState::solved();
        cube.apply("D".parse().unwrap());
        assert_eq!(cube.face(Face::R)[2], [Color::Red; 3]);
        assert_eq!(cube.face(Face::F)[2], [Color::Blue; 3]);
    }

    #[test]
    fn test_strip_orientation_tracks_single_facelet() {
        // Mark U's back-right corner and follow it through F (untouched) and R.
        let mut cube = CubeState::solved();
        cube.set_facelet(Face::U, 0, 2, Color::Yellow).unwrap();
        cube.apply("F".parse().unwrap());
        assert_eq!(cube.get(Face::U, 0, 2), Color::Yellow);
        cube.apply("R".parse().unwrap());
        // R carries U's right column onto B's left column, reversed.
        assert_eq!(cube.get(Face::B, 2, 0), Color::Yellow);
    }

    #[test]
    fn test_sexy_move_has_order_six() {
        let moves = parse_sequence("R U R' U'").unwrap();
        let mut cube = CubeState::solved();
        for i in 1..=6 {
            cube.apply_all(&moves);
            assert_eq!(cube.is_solved(), i == 6);
        }
    }

    #[test]
    fn test_apply_notation_leaves_state_on_error() {
        let mut cube = CubeState::solved();
        assert!(cube.apply_notation("R U X").is_err());
        assert!(cube.is_solved());
    }

    #[test]
    fn test_shifted_moves() {
        let moves = parse_sequence("R U R' F'").unwrap();
        let shifted: Vec<Move> = moves.iter().map(|m| m.shifted(1)).collect();
        assert_eq!(format_sequence(&shifted), "B U B' R'");
        assert_eq!(Move::u_turns(4), None);
        assert_eq!(Move::u_turns(3), Some(Move::new(Face::U, Turn::CounterClockwise)));
    }
}
