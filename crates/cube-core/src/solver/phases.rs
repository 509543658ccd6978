//! The six phases of the layer-by-layer method.
//!
//! Colors are read from the centers. The first layer is D, the last layer is U.

use super::tables::{
    CornerCase, CornerTwistCase, CrossCase, EdgeOrientationCase, MiddleCase, PermutationCase,
    CROSS, FIRST_LAYER_CORNERS, LAST_LAYER_CORNER_ORIENTATION, LAST_LAYER_EDGE_ORIENTATION,
    LAST_LAYER_PERMUTATION, MIDDLE_LAYER,
};
use super::types::{
    top_corner_placed, top_corners_placed, top_edge_alignment, top_edge_matches, Phase,
};
use crate::cube::{CubeState, Face};
use crate::error::SolveError;
use crate::moves::Move;
use crate::pieces::{CornerSlot, EdgeSlot, Layer};

/// Applies moves to the working state and records them for the current phase.
pub(crate) struct PhaseRunner<'a> {
    state: &'a mut CubeState,
    phase: Phase,
    moves: Vec<Move>,
    max_iterations: usize,
}

impl<'a> PhaseRunner<'a> {
    pub(crate) fn new(state: &'a mut CubeState, phase: Phase, max_iterations: usize) -> Self {
        Self {
            state,
            phase,
            moves: Vec::new(),
            max_iterations,
        }
    }

    pub(crate) fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    pub(crate) fn run(&mut self) -> Result<(), SolveError> {
        match self.phase {
            Phase::Cross => self.cross(),
            Phase::FirstLayerCorners => self.first_layer_corners(),
            Phase::MiddleLayer => self.middle_layer(),
            Phase::LastLayerEdgeOrientation => self.orient_top_edges(),
            Phase::LastLayerPermutation => self.permute_top_layer(),
            Phase::LastLayerCornerOrientation => self.orient_top_corners(),
        }
    }

    fn apply(&mut self, moves: &[Move]) {
        self.state.apply_all(moves);
        self.moves.extend_from_slice(moves);
    }

    fn turn_top(&mut self, quarters: usize) {
        if let Some(mv) = Move::u_turns(quarters) {
            self.apply(&[mv]);
        }
    }

    /// Run `step` until `done` holds, at most `max_iterations` times.
    fn converge(
        &mut self,
        done: impl Fn(&CubeState) -> bool,
        mut step: impl FnMut(&mut Self) -> Result<(), SolveError>,
    ) -> Result<(), SolveError> {
        for _ in 0..self.max_iterations {
            if done(&*self.state) {
                return Ok(());
            }
            step(self)?;
        }
        if done(&*self.state) {
            Ok(())
        } else {
            Err(SolveError::PhaseConvergenceFailure {
                phase: self.phase,
                iterations: self.max_iterations,
            })
        }
    }

    fn unrecognized(&self, pattern: String) -> SolveError {
        SolveError::UnrecognizedPattern {
            phase: self.phase,
            pattern,
        }
    }

    fn cross(&mut self) -> Result<(), SolveError> {
        for s in 0..4 {
            let slot = EdgeSlot::new(Layer::Bottom, s);
            self.converge(|st| st.is_edge_solved(slot), |run| run.cross_step(s))?;
        }
        Ok(())
    }

    fn cross_step(&mut self, s: usize) -> Result<(), SolveError> {
        let down = self.state.center(Face::D);
        let side = self.state.center(Face::side(s));
        let (slot, idx) = self
            .state
            .locate_edge(down, side)
            .ok_or_else(|| self.unrecognized(format!("missing edge {}{}", down, side)))?;

        let moves = match slot.layer {
            Layer::Bottom => CROSS.shifted(CrossCase::Sunk, slot.side)?,
            Layer::Middle => CROSS.shifted(CrossCase::Wedged, slot.side)?,
            Layer::Top => {
                self.turn_top(4 + slot.side - s);
                let case = if idx == 0 {
                    CrossCase::TopUpright
                } else {
                    CrossCase::TopFlipped
                };
                CROSS.shifted(case, s)?
            }
        };
        self.apply(&moves);
        Ok(())
    }

    fn first_layer_corners(&mut self) -> Result<(), SolveError> {
        for s in 0..4 {
            let slot = CornerSlot::bottom(s);
            self.converge(|st| st.is_corner_solved(slot), |run| run.corner_step(s))?;
        }
        Ok(())
    }

    fn corner_step(&mut self, s: usize) -> Result<(), SolveError> {
        let colors = [
            self.state.center(Face::D),
            self.state.center(Face::side(s)),
            self.state.center(Face::side(s + 1)),
        ];
        let (slot, idx) = self
            .state
            .locate_corner(colors)
            .ok_or_else(|| self.unrecognized(format!("missing corner {:?}", colors)))?;

        let moves = if slot.top {
            self.turn_top(4 + slot.side - s);
            let case = match idx {
                0 => CornerCase::FacingUp,
                1 => CornerCase::FacingFront,
                _ => CornerCase::FacingSide,
            };
            FIRST_LAYER_CORNERS.shifted(case, s)?
        } else {
            FIRST_LAYER_CORNERS.shifted(CornerCase::Sunk, slot.side)?
        };
        self.apply(&moves);
        Ok(())
    }

    fn middle_layer(&mut self) -> Result<(), SolveError> {
        for s in 0..4 {
            let slot = EdgeSlot::new(Layer::Middle, s);
            self.converge(|st| st.is_edge_solved(slot), |run| run.middle_step(s))?;
        }
        Ok(())
    }

    fn middle_step(&mut self, s: usize) -> Result<(), SolveError> {
        let near = self.state.center(Face::side(s));
        let far = self.state.center(Face::side(s + 1));
        let (slot, idx) = self
            .state
            .locate_edge(near, far)
            .ok_or_else(|| self.unrecognized(format!("missing edge {}{}", near, far)))?;

        let moves = match slot.layer {
            Layer::Middle => MIDDLE_LAYER.shifted(MiddleCase::Misplaced, slot.side)?,
            // Near color on the side sticker: bring the edge over side s.
            Layer::Top if idx == 1 => {
                self.turn_top(4 + slot.side - s);
                MIDDLE_LAYER.shifted(MiddleCase::ToRight, s)?
            }
            // Far color on the side sticker: bring the edge over side s + 1.
            Layer::Top => {
                self.turn_top(8 + slot.side - s - 1);
                MIDDLE_LAYER.shifted(MiddleCase::ToLeft, s + 1)?
            }
            Layer::Bottom => {
                return Err(self.unrecognized(format!("middle edge {} in bottom layer", slot)))
            }
        };
        self.apply(&moves);
        Ok(())
    }

    fn top_edge_flags(&self) -> [bool; 4] {
        let up = self.state.center(Face::U);
        let mut flags = [false; 4];
        for (s, flag) in flags.iter_mut().enumerate() {
            let top = EdgeSlot::new(Layer::Top, s).facelets()[0];
            *flag = self.state.facelet_at(top) == up;
        }
        flags
    }

    fn orient_top_edges(&mut self) -> Result<(), SolveError> {
        self.converge(
            |st| Phase::LastLayerEdgeOrientation.is_complete(st),
            |run| {
                let flags = run.top_edge_flags();
                let case = EdgeOrientationCase::classify(flags)
                    .ok_or_else(|| run.unrecognized(format!("oriented edges {:?}", flags)))?;
                let moves = LAST_LAYER_EDGE_ORIENTATION.lookup(case)?;
                run.apply(&moves);
                Ok(())
            },
        )
    }

    fn permute_top_layer(&mut self) -> Result<(), SolveError> {
        self.converge(
            |st| top_edge_alignment(st).is_some(),
            |run| run.swap_top_edges(),
        )?;
        if let Some(k) = top_edge_alignment(&*self.state) {
            self.turn_top(k);
        }

        self.converge(top_corners_placed, |run| {
            let anchor = (0..4)
                .find(|&s| top_corner_placed(&*run.state, s))
                .unwrap_or(0);
            let moves = LAST_LAYER_PERMUTATION.shifted(PermutationCase::CornerCycle, anchor)?;
            run.apply(&moves);
            Ok(())
        })
    }

    /// Turn U so two top edges match their centers, then swap the other two.
    fn swap_top_edges(&mut self) -> Result<(), SolveError> {
        let found = (0..4).find_map(|k| {
            let turned = match Move::u_turns(k) {
                Some(mv) => self.state.after(&[mv]),
                None => self.state.clone(),
            };
            let matches = top_edge_matches(&turned);
            (matches.iter().filter(|&&m| m).count() == 2).then_some((k, matches))
        });
        let (k, matches) =
            found.ok_or_else(|| self.unrecognized("no two top edges align".to_string()))?;

        self.turn_top(k);
        // Base algorithm keeps UR and UB; shift it so the matched pair plays that role.
        let offset = (0..4)
            .find(|&a| matches[a] && matches[(a + 1) % 4])
            .map(|a| (a + 3) % 4)
            .unwrap_or(0);
        let moves = LAST_LAYER_PERMUTATION.shifted(PermutationCase::EdgeSwap, offset)?;
        self.apply(&moves);
        Ok(())
    }

    fn orient_top_corners(&mut self) -> Result<(), SolveError> {
        let corner = CornerSlot::top(0);
        self.converge(
            |st| (0..4).all(|s| top_corner_oriented(st, CornerSlot::top(s))),
            |run| {
                let Some(u) = (0..4).find(|&s| !top_corner_oriented(&*run.state, CornerSlot::top(s)))
                else {
                    return Ok(());
                };
                run.turn_top(u);
                run.converge(
                    |st| top_corner_oriented(st, corner),
                    |inner| {
                        let up = inner.state.center(Face::U);
                        let [_, front, _] = corner.facelets();
                        let case = if inner.state.facelet_at(front) == up {
                            CornerTwistCase::FacingFront
                        } else {
                            CornerTwistCase::FacingSide
                        };
                        let moves = LAST_LAYER_CORNER_ORIENTATION.lookup(case)?;
                        inner.apply(&moves);
                        Ok(())
                    },
                )
            },
        )?;

        let k = (0..4)
            .find(|&k| match Move::u_turns(k) {
                Some(mv) => self.state.after(&[mv]).is_solved(),
                None => self.state.is_solved(),
            })
            .ok_or(SolveError::PhaseConvergenceFailure {
                phase: self.phase,
                iterations: self.max_iterations,
            })?;
        self.turn_top(k);
        Ok(())
    }
}

fn top_corner_oriented(state: &CubeState, slot: CornerSlot) -> bool {
    state.facelet_at(slot.facelets()[0]) == state.center(Face::U)
}
