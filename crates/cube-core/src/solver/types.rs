use crate::cube::{CubeState, Face};
use crate::moves::{format_sequence, quarter_turn_count, Move};
use crate::pieces::{CornerSlot, EdgeSlot, Layer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Solving stage of the layer-by-layer method, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Bottom-layer edges placed and oriented.
    Cross,
    /// Bottom-layer corners placed and oriented.
    FirstLayerCorners,
    /// The four equator edges.
    MiddleLayer,
    /// Top-layer edges showing the top color upward.
    LastLayerEdgeOrientation,
    /// Top-layer edges and corners in their slots (up to a U turn for edges).
    LastLayerPermutation,
    /// Top-layer corners twisted and the top layer aligned.
    LastLayerCornerOrientation,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Cross,
        Phase::FirstLayerCorners,
        Phase::MiddleLayer,
        Phase::LastLayerEdgeOrientation,
        Phase::LastLayerPermutation,
        Phase::LastLayerCornerOrientation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Cross => "Cross",
            Phase::FirstLayerCorners => "First Layer Corners",
            Phase::MiddleLayer => "Middle Layer",
            Phase::LastLayerEdgeOrientation => "Last Layer Edge Orientation",
            Phase::LastLayerPermutation => "Last Layer Permutation",
            Phase::LastLayerCornerOrientation => "Last Layer Corner Orientation",
        }
    }

    /// Whether `state` has reached the goal of this phase and every earlier one.
    pub fn is_complete(&self, state: &CubeState) -> bool {
        match self {
            Phase::Cross => (0..4).all(|s| state.is_edge_solved(EdgeSlot::new(Layer::Bottom, s))),
            Phase::FirstLayerCorners => {
                Phase::Cross.is_complete(state)
                    && (0..4).all(|s| state.is_corner_solved(CornerSlot::bottom(s)))
            }
            Phase::MiddleLayer => {
                Phase::FirstLayerCorners.is_complete(state)
                    && (0..4).all(|s| state.is_edge_solved(EdgeSlot::new(Layer::Middle, s)))
            }
            Phase::LastLayerEdgeOrientation => {
                Phase::MiddleLayer.is_complete(state) && top_edges_oriented(state)
            }
            Phase::LastLayerPermutation => {
                Phase::LastLayerEdgeOrientation.is_complete(state)
                    && top_corners_placed(state)
                    && top_edge_alignment(state).is_some()
            }
            Phase::LastLayerCornerOrientation => state.is_solved(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub(crate) fn top_edges_oriented(state: &CubeState) -> bool {
    let up = state.center(Face::U);
    (0..4).all(|s| state.facelet_at(EdgeSlot::new(Layer::Top, s).facelets()[0]) == up)
}

/// Every top corner holds the piece whose colors match the slot's centers.
pub(crate) fn top_corners_placed(state: &CubeState) -> bool {
    (0..4).all(|s| top_corner_placed(state, s))
}

pub(crate) fn top_corner_placed(state: &CubeState, side: usize) -> bool {
    let slot = CornerSlot::top(side);
    let mut expected = slot.facelets().map(|f| state.center(f.face));
    let mut found = state.corner_colors(slot);
    expected.sort();
    found.sort();
    expected == found
}

/// Side faces whose top edge sticker matches the side's center.
pub(crate) fn top_edge_matches(state: &CubeState) -> [bool; 4] {
    let mut matches = [false; 4];
    for (s, m) in matches.iter_mut().enumerate() {
        let side = EdgeSlot::new(Layer::Top, s).facelets()[1];
        *m = state.facelet_at(side) == state.center(side.face);
    }
    matches
}

/// Number of clockwise U quarter turns after which every top edge matches
/// its side center, if any.
pub(crate) fn top_edge_alignment(state: &CubeState) -> Option<usize> {
    (0..4).find(|&k| {
        let turned = match Move::u_turns(k) {
            Some(mv) => state.after(&[mv]),
            None => state.clone(),
        };
        top_edge_matches(&turned).iter().all(|&m| m)
    })
}

/// Moves produced by one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSolution {
    pub phase: Phase,
    pub moves: Vec<Move>,
}

/// A full solution: every phase's moves concatenated, plus the per-phase split.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub phases: Vec<PhaseSolution>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn quarter_turns(&self) -> usize {
        quarter_turn_count(&self.moves)
    }

    /// Solution in standard notation.
    pub fn notation(&self) -> String {
        format_sequence(&self.moves)
    }

    pub(crate) fn push_phase(&mut self, phase: Phase, moves: Vec<Move>) {
        self.moves.extend_from_slice(&moves);
        self.phases.push(PhaseSolution { phase, moves });
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}
