//! Move-sequence grammar checks and cube-state reachability checks.

use crate::cube::{Color, CubeState, Face};
use crate::error::StateError;
use crate::moves::parse_sequence;
use crate::pieces::{sorted2, sorted3, CornerSlot, EdgeSlot};
use serde::{Deserialize, Serialize};

/// Outcome of grammar validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub move_count: usize,
    pub message: String,
}

/// Grammar-check a move sequence without applying it.
pub fn validate(text: &str) -> ValidationReport {
    match parse_sequence(text) {
        Ok(moves) if moves.is_empty() => ValidationReport {
            valid: true,
            move_count: 0,
            message: "Empty move sequence".to_string(),
        },
        Ok(moves) => ValidationReport {
            valid: true,
            move_count: moves.len(),
            message: format!("Valid sequence of {} moves", moves.len()),
        },
        Err(err) => ValidationReport {
            valid: false,
            move_count: 0,
            message: err.to_string(),
        },
    }
}

/// Check that `state` can be reached from the solved cube by face turns.
///
/// Checks run in order and the first failure is returned: color counts,
/// centers, piece inventory, edge flip, corner twist, permutation parity.
pub fn validate_state(state: &CubeState) -> Result<(), StateError> {
    for color in Color::ALL {
        let count = state.color_counts()[color.index()];
        if count != 9 {
            return Err(StateError::ColorCount { color, count });
        }
    }

    for face in Face::ALL {
        let expected = Color::home(face);
        let found = state.center(face);
        if found != expected {
            return Err(StateError::CenterMismatch {
                face,
                expected,
                found,
            });
        }
    }

    let edge_perm = edge_permutation(state)?;
    let corner_perm = corner_permutation(state)?;

    let flips: usize = EdgeSlot::ALL
        .iter()
        .map(|&slot| edge_flip(state, slot))
        .sum();
    if flips % 2 != 0 {
        return Err(StateError::FlippedEdge);
    }

    let twist: usize = CornerSlot::ALL
        .iter()
        .map(|&slot| corner_twist(state, slot))
        .sum();
    if twist % 3 != 0 {
        return Err(StateError::TwistedCorner {
            twist: (twist % 3) as u8,
        });
    }

    if is_odd(&edge_perm) != is_odd(&corner_perm) {
        return Err(StateError::PermutationParity);
    }

    Ok(())
}

/// For each edge slot, the home slot of the piece it holds.
fn edge_permutation(state: &CubeState) -> Result<Vec<usize>, StateError> {
    let solved = CubeState::solved();
    let homes: Vec<[Color; 2]> = EdgeSlot::ALL
        .iter()
        .map(|&slot| sorted2(solved.edge_colors(slot)))
        .collect();

    let mut perm = Vec::with_capacity(EdgeSlot::ALL.len());
    for slot in EdgeSlot::ALL {
        let colors = state.edge_colors(slot);
        let home = homes
            .iter()
            .position(|&h| h == sorted2(colors))
            .ok_or_else(|| StateError::UnknownEdge {
                slot: slot.to_string(),
                colors,
            })?;
        if perm.contains(&home) {
            return Err(StateError::DuplicatePiece {
                piece: EdgeSlot::ALL[home].to_string(),
            });
        }
        perm.push(home);
    }
    Ok(perm)
}

/// For each corner slot, the home slot of the piece it holds.
///
/// A piece whose colors run the wrong way round its slot is a mirror image
/// of a real corner and is reported as unknown.
fn corner_permutation(state: &CubeState) -> Result<Vec<usize>, StateError> {
    let solved = CubeState::solved();
    let homes: Vec<([Color; 3], [Color; 3])> = CornerSlot::ALL
        .iter()
        .map(|&slot| {
            let colors = solved.corner_colors(slot);
            (sorted3(colors), clockwise_colors(slot, colors))
        })
        .collect();

    let mut perm = Vec::with_capacity(CornerSlot::ALL.len());
    for slot in CornerSlot::ALL {
        let colors = state.corner_colors(slot);
        let unknown = || StateError::UnknownCorner {
            slot: slot.to_string(),
            colors,
        };
        let home = homes
            .iter()
            .position(|&(h, _)| h == sorted3(colors))
            .ok_or_else(unknown)?;
        if !is_rotation(clockwise_colors(slot, colors), homes[home].1) {
            return Err(unknown());
        }
        if perm.contains(&home) {
            return Err(StateError::DuplicatePiece {
                piece: CornerSlot::ALL[home].to_string(),
            });
        }
        perm.push(home);
    }
    Ok(perm)
}

fn clockwise_colors(slot: CornerSlot, colors: [Color; 3]) -> [Color; 3] {
    slot.clockwise().map(|i| colors[i])
}

fn is_rotation(a: [Color; 3], b: [Color; 3]) -> bool {
    (0..3).any(|k| (0..3).all(|i| a[i] == b[(i + k) % 3]))
}

/// 0 when the edge's reference color sits on the slot's reference facelet.
///
/// The reference color is the piece's U/D color, or its F/B color for the
/// four middle-layer pieces.
fn edge_flip(state: &CubeState, slot: EdgeSlot) -> usize {
    let colors = state.edge_colors(slot);
    let is_reference = |c: Color| {
        c == Color::home(Face::U)
            || c == Color::home(Face::D)
            || ((c == Color::home(Face::F) || c == Color::home(Face::B))
                && !colors
                    .iter()
                    .any(|&o| o == Color::home(Face::U) || o == Color::home(Face::D)))
    };
    if is_reference(colors[slot.primary_index()]) {
        0
    } else {
        1
    }
}

/// Clockwise steps from the slot's U/D facelet to the piece's U/D color.
fn corner_twist(state: &CubeState, slot: CornerSlot) -> usize {
    let colors = state.corner_colors(slot);
    let is_ud = |c: Color| c == Color::home(Face::U) || c == Color::home(Face::D);
    slot.clockwise()
        .iter()
        .position(|&idx| is_ud(colors[idx]))
        .unwrap_or(0)
}

fn is_odd(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    let mut transpositions = 0;
    for start in 0..perm.len() {
        if seen[start] {
            continue;
        }
        let mut len = 0;
        let mut i = start;
        while !seen[i] {
            seen[i] = true;
            i = perm[i];
            len += 1;
        }
        transpositions += len - 1;
    }
    transpositions % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Layer;

    fn swap_facelets(cube: &mut CubeState, a: (Face, usize, usize), b: (Face, usize, usize)) {
        let ca = cube.facelet(a.0, a.1, a.2).unwrap();
        let cb = cube.facelet(b.0, b.1, b.2).unwrap();
        cube.set_facelet(a.0, a.1, a.2, cb).unwrap();
        cube.set_facelet(b.0, b.1, b.2, ca).unwrap();
    }

    #[test]
    fn test_grammar_examples() {
        let report = validate("U R' F2");
        assert!(report.valid);
        assert_eq!(report.move_count, 3);

        let report = validate("U X");
        assert!(!report.valid);
        assert!(report.message.contains("'X'"));
        assert!(report.message.contains("position 2"));

        let report = validate("");
        assert!(report.valid);
        assert_eq!(report.move_count, 0);
        assert_eq!(report.message, "Empty move sequence");
    }

    #[test]
    fn test_grammar_rejects_combined_modifiers() {
        assert!(!validate("R2'").valid);
        assert!(!validate("R'2").valid);
        assert!(!validate("u").valid);
        assert!(validate("  R   U2\tF' ").valid);
    }

    #[test]
    fn test_scrambled_states_are_valid() {
        let mut cube = CubeState::solved();
        assert_eq!(validate_state(&cube), Ok(()));
        cube.apply_notation("R U R' U' F2 D L' B R2 U' F D2 L B'").unwrap();
        assert_eq!(validate_state(&cube), Ok(()));
        cube.apply_notation("F R U' B2 L D'").unwrap();
        assert_eq!(validate_state(&cube), Ok(()));
    }

    #[test]
    fn test_rejects_flipped_edge() {
        let mut cube = CubeState::solved();
        cube.apply_notation("R U F'").unwrap();
        let [a, b] = EdgeSlot::new(Layer::Top, 1).facelets();
        swap_facelets(&mut cube, (a.face, a.row, a.col), (b.face, b.row, b.col));
        assert_eq!(validate_state(&cube), Err(StateError::FlippedEdge));
    }

    #[test]
    fn test_rejects_twisted_corner() {
        let mut cube = CubeState::solved();
        let [u, f, r] = CornerSlot::top(0).facelets();
        let (cu, cf, cr) = (cube.facelet_at(u), cube.facelet_at(f), cube.facelet_at(r));
        cube.set_facelet(u.face, u.row, u.col, cr).unwrap();
        cube.set_facelet(f.face, f.row, f.col, cu).unwrap();
        cube.set_facelet(r.face, r.row, r.col, cf).unwrap();
        assert!(matches!(
            validate_state(&cube),
            Err(StateError::TwistedCorner { .. })
        ));
    }

    #[test]
    fn test_rejects_mirrored_corner() {
        // Same three colors as the UFR piece, read the wrong way round.
        let mut cube = CubeState::solved();
        let [_, f, r] = CornerSlot::top(0).facelets();
        swap_facelets(&mut cube, (f.face, f.row, f.col), (r.face, r.row, r.col));
        assert_eq!(
            validate_state(&cube),
            Err(StateError::UnknownCorner {
                slot: "UFR".to_string(),
                colors: [Color::White, Color::Green, Color::Red]
            })
        );

        // Mirroring a corner that has been moved and twisted is caught too.
        let mut cube = CubeState::solved();
        cube.apply_notation("R U2 F' L").unwrap();
        let [_, near, far] = CornerSlot::bottom(2).facelets();
        swap_facelets(
            &mut cube,
            (near.face, near.row, near.col),
            (far.face, far.row, far.col),
        );
        assert!(matches!(
            validate_state(&cube),
            Err(StateError::UnknownCorner { .. })
        ));
    }

    #[test]
    fn test_rejects_swapped_pair() {
        // Exchange the UF and UR edges without touching anything else.
        let mut cube = CubeState::solved();
        let [uf_top, uf_side] = EdgeSlot::new(Layer::Top, 0).facelets();
        let [ur_top, ur_side] = EdgeSlot::new(Layer::Top, 1).facelets();
        swap_facelets(
            &mut cube,
            (uf_top.face, uf_top.row, uf_top.col),
            (ur_top.face, ur_top.row, ur_top.col),
        );
        swap_facelets(
            &mut cube,
            (uf_side.face, uf_side.row, uf_side.col),
            (ur_side.face, ur_side.row, ur_side.col),
        );
        assert_eq!(validate_state(&cube), Err(StateError::PermutationParity));
    }

    #[test]
    fn test_rejects_bad_color_count() {
        let mut cube = CubeState::solved();
        cube.set_facelet(Face::U, 0, 0, Color::Red).unwrap();
        assert_eq!(
            validate_state(&cube),
            Err(StateError::ColorCount {
                color: Color::White,
                count: 8
            })
        );
    }

    #[test]
    fn test_rejects_moved_center() {
        let mut cube = CubeState::solved();
        swap_facelets(&mut cube, (Face::F, 1, 1), (Face::R, 0, 0));
        assert_eq!(
            validate_state(&cube),
            Err(StateError::CenterMismatch {
                face: Face::F,
                expected: Color::Red,
                found: Color::Green
            })
        );
    }

    #[test]
    fn test_rejects_impossible_piece() {
        let mut cube = CubeState::solved();
        // There is no white-yellow edge.
        swap_facelets(&mut cube, (Face::F, 0, 1), (Face::D, 1, 0));
        assert_eq!(
            validate_state(&cube),
            Err(StateError::UnknownEdge {
                slot: "UF".to_string(),
                colors: [Color::White, Color::Yellow]
            })
        );
    }
}
