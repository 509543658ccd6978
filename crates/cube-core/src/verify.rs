use crate::cube::CubeState;
use crate::error::VerificationFailed;
use crate::moves::Move;

/// Replays a solution from the scrambled state and checks the result.
pub struct SolutionVerifier;

impl SolutionVerifier {
    /// True when `moves` takes `scrambled` to the solved cube.
    pub fn verify(scrambled: &CubeState, moves: &[Move]) -> bool {
        Self::check(scrambled, moves).is_ok()
    }

    pub fn check(scrambled: &CubeState, moves: &[Move]) -> Result<(), VerificationFailed> {
        let end = scrambled.after(moves);
        let mismatched = end.mismatched_facelets(&CubeState::solved());
        if mismatched == 0 {
            Ok(())
        } else {
            Err(VerificationFailed { mismatched })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{invert_sequence, parse_sequence};

    #[test]
    fn test_inverse_sequence_verifies() {
        let scramble = parse_sequence("R U2 F' D L B2").unwrap();
        let cube = CubeState::solved().after(&scramble);
        assert!(SolutionVerifier::verify(&cube, &invert_sequence(&scramble)));
    }

    #[test]
    fn test_replays_from_scrambled_state() {
        let cube = CubeState::solved().after(&parse_sequence("R").unwrap());
        assert!(!SolutionVerifier::verify(&cube, &[]));
        assert!(SolutionVerifier::verify(&cube, &parse_sequence("R'").unwrap()));
        assert!(SolutionVerifier::verify(&CubeState::solved(), &[]));
    }

    #[test]
    fn test_check_counts_mismatches() {
        let cube = CubeState::solved().after(&parse_sequence("U").unwrap());
        // A quarter turn of U displaces three facelets on each of the four sides.
        assert_eq!(
            SolutionVerifier::check(&cube, &[]),
            Err(VerificationFailed { mismatched: 12 })
        );
    }
}
