//! Algorithm tables, one per phase.
//!
//! Every algorithm is written for the front-right slot (front face F, right
//! face R, top face U) and re-targeted at solve time with [`Move::shifted`].

use super::types::Phase;
use crate::error::SolveError;
use crate::moves::{parse_sequence, Move};
use std::fmt;

/// Pattern tag to algorithm, for one phase.
pub(crate) struct AlgorithmTable<C: 'static> {
    phase: Phase,
    entries: &'static [(C, &'static str)],
}

impl<C: Copy + PartialEq + fmt::Debug> AlgorithmTable<C> {
    pub(crate) fn lookup(&self, case: C) -> Result<Vec<Move>, SolveError> {
        let (_, notation) = self
            .entries
            .iter()
            .find(|(c, _)| *c == case)
            .ok_or_else(|| SolveError::UnrecognizedPattern {
                phase: self.phase,
                pattern: format!("{:?}", case),
            })?;
        Ok(parse_sequence(notation)?)
    }

    /// Table algorithm re-targeted onto the slot `offset` sides clockwise of front-right.
    pub(crate) fn shifted(&self, case: C, offset: usize) -> Result<Vec<Move>, SolveError> {
        Ok(self
            .lookup(case)?
            .into_iter()
            .map(|m| m.shifted(offset))
            .collect())
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &'static [(C, &'static str)] {
        self.entries
    }
}

/// Where a bottom edge sits relative to its home slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CrossCase {
    /// In the bottom layer, wrong slot or flipped.
    Sunk,
    /// In the middle layer.
    Wedged,
    /// Above its slot, bottom color facing up.
    TopUpright,
    /// Above its slot, bottom color facing the side.
    TopFlipped,
}

pub(crate) const CROSS: AlgorithmTable<CrossCase> = AlgorithmTable {
    phase: Phase::Cross,
    entries: &[
        (CrossCase::Sunk, "F2"),
        (CrossCase::Wedged, "R U R'"),
        (CrossCase::TopUpright, "F2"),
        (CrossCase::TopFlipped, "U' R' F R"),
    ],
};

/// Where a bottom corner sits; top cases are above the target slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CornerCase {
    /// In the bottom layer but wrong slot or twisted.
    Sunk,
    /// Bottom color on the top face.
    FacingUp,
    /// Bottom color on the front face.
    FacingFront,
    /// Bottom color on the right face.
    FacingSide,
}

pub(crate) const FIRST_LAYER_CORNERS: AlgorithmTable<CornerCase> = AlgorithmTable {
    phase: Phase::FirstLayerCorners,
    entries: &[
        (CornerCase::Sunk, "R U R'"),
        (CornerCase::FacingUp, "R U2 R' U' R U R'"),
        (CornerCase::FacingFront, "F' U' F"),
        (CornerCase::FacingSide, "R U R'"),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MiddleCase {
    /// In the middle layer, wrong slot or flipped.
    Misplaced,
    /// Over the front face, to be inserted front-right.
    ToRight,
    /// Over the right face, to be inserted into the slot on its left.
    ToLeft,
}

pub(crate) const MIDDLE_LAYER: AlgorithmTable<MiddleCase> = AlgorithmTable {
    phase: Phase::MiddleLayer,
    entries: &[
        (MiddleCase::Misplaced, "U R U' R' U' F' U F"),
        (MiddleCase::ToRight, "U R U' R' U' F' U F"),
        (MiddleCase::ToLeft, "U' L' U L U F U' F'"),
    ],
};

/// Top-layer edge orientation pattern, by which edges already show the top color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeOrientationCase {
    Dot,
    /// UR and UL.
    LineHorizontal,
    /// UF and UB.
    LineVertical,
    /// UB and UL.
    LBackLeft,
    /// UL and UF.
    LFrontLeft,
    /// UF and UR.
    LFrontRight,
    /// UR and UB.
    LBackRight,
}

impl EdgeOrientationCase {
    /// Classify from per-side flags in F, R, B, L order.
    pub(crate) fn classify(oriented: [bool; 4]) -> Option<Self> {
        match oriented {
            [false, false, false, false] => Some(Self::Dot),
            [false, true, false, true] => Some(Self::LineHorizontal),
            [true, false, true, false] => Some(Self::LineVertical),
            [false, false, true, true] => Some(Self::LBackLeft),
            [true, false, false, true] => Some(Self::LFrontLeft),
            [true, true, false, false] => Some(Self::LFrontRight),
            [false, true, true, false] => Some(Self::LBackRight),
            _ => None,
        }
    }
}

pub(crate) const LAST_LAYER_EDGE_ORIENTATION: AlgorithmTable<EdgeOrientationCase> =
    AlgorithmTable {
        phase: Phase::LastLayerEdgeOrientation,
        entries: &[
            (EdgeOrientationCase::Dot, "F R U R' U' F'"),
            (EdgeOrientationCase::LineHorizontal, "F R U R' U' F'"),
            (EdgeOrientationCase::LineVertical, "U F R U R' U' F'"),
            (EdgeOrientationCase::LBackLeft, "F R U R' U' F'"),
            (EdgeOrientationCase::LFrontLeft, "U F R U R' U' F'"),
            (EdgeOrientationCase::LFrontRight, "U2 F R U R' U' F'"),
            (EdgeOrientationCase::LBackRight, "U' F R U R' U' F'"),
        ],
    };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PermutationCase {
    /// Swap UF and UL, keeping UR and UB.
    EdgeSwap,
    /// Keep UFR, cycle the other three top corners.
    CornerCycle,
}

pub(crate) const LAST_LAYER_PERMUTATION: AlgorithmTable<PermutationCase> = AlgorithmTable {
    phase: Phase::LastLayerPermutation,
    entries: &[
        (PermutationCase::EdgeSwap, "R U R' U R U2 R' U"),
        (PermutationCase::CornerCycle, "U R U' L' U R' U' L"),
    ],
};

/// Where the top color of the front-right top corner points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CornerTwistCase {
    FacingSide,
    FacingFront,
}

pub(crate) const LAST_LAYER_CORNER_ORIENTATION: AlgorithmTable<CornerTwistCase> =
    AlgorithmTable {
        phase: Phase::LastLayerCornerOrientation,
        entries: &[
            (CornerTwistCase::FacingSide, "R' D' R D R' D' R D"),
            (
                CornerTwistCase::FacingFront,
                "R' D' R D R' D' R D R' D' R D R' D' R D",
            ),
        ],
    };
