//! Piece slots and the facelets that make them up.
//!
//! Slots are addressed by layer and side index, so an algorithm written for
//! the front-right slot can be re-targeted by shifting the side index.

use crate::cube::{Color, CubeState, Face};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

impl Facelet {
    pub const fn new(face: Face, row: usize, col: usize) -> Self {
        Self { face, row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Top,
    Middle,
    Bottom,
}

/// One of the 12 edge positions.
///
/// For top and bottom slots `side` names the side face the edge touches.
/// For middle slots the edge sits between side `side` and side `side + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeSlot {
    pub layer: Layer,
    pub side: usize,
}

impl EdgeSlot {
    pub const ALL: [EdgeSlot; 12] = [
        EdgeSlot::new(Layer::Top, 0),
        EdgeSlot::new(Layer::Top, 1),
        EdgeSlot::new(Layer::Top, 2),
        EdgeSlot::new(Layer::Top, 3),
        EdgeSlot::new(Layer::Middle, 0),
        EdgeSlot::new(Layer::Middle, 1),
        EdgeSlot::new(Layer::Middle, 2),
        EdgeSlot::new(Layer::Middle, 3),
        EdgeSlot::new(Layer::Bottom, 0),
        EdgeSlot::new(Layer::Bottom, 1),
        EdgeSlot::new(Layer::Bottom, 2),
        EdgeSlot::new(Layer::Bottom, 3),
    ];

    pub const fn new(layer: Layer, side: usize) -> Self {
        Self {
            layer,
            side: side % 4,
        }
    }

    /// Position of this slot in [`EdgeSlot::ALL`].
    pub fn ordinal(self) -> usize {
        let base = match self.layer {
            Layer::Top => 0,
            Layer::Middle => 4,
            Layer::Bottom => 8,
        };
        base + self.side
    }

    /// Facelets of the slot. Top and bottom slots list the U/D facelet
    /// first; middle slots list the facelet on side `side` first.
    pub fn facelets(self) -> [Facelet; 2] {
        let s = self.side;
        let side = Face::side(s);
        match self.layer {
            Layer::Top => {
                let (row, col) = [(2, 1), (1, 2), (0, 1), (1, 0)][s];
                [Facelet::new(Face::U, row, col), Facelet::new(side, 0, 1)]
            }
            Layer::Bottom => {
                let (row, col) = [(0, 1), (1, 2), (2, 1), (1, 0)][s];
                [Facelet::new(Face::D, row, col), Facelet::new(side, 2, 1)]
            }
            Layer::Middle => [
                Facelet::new(side, 1, 2),
                Facelet::new(Face::side(s + 1), 1, 0),
            ],
        }
    }

    /// Index of the facelet that decides edge orientation: the U/D facelet
    /// in the top and bottom layers, the F/B facelet in the middle layer.
    pub fn primary_index(self) -> usize {
        match self.layer {
            Layer::Middle => self.side % 2,
            _ => 0,
        }
    }
}

impl fmt::Display for EdgeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = Face::side(self.side);
        match self.layer {
            Layer::Top => write!(f, "U{}", side),
            Layer::Bottom => write!(f, "D{}", side),
            Layer::Middle => write!(f, "{}{}", side, Face::side(self.side + 1)),
        }
    }
}

/// One of the 8 corner positions, between side `side` and side `side + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerSlot {
    pub top: bool,
    pub side: usize,
}

impl CornerSlot {
    pub const ALL: [CornerSlot; 8] = [
        CornerSlot::top(0),
        CornerSlot::top(1),
        CornerSlot::top(2),
        CornerSlot::top(3),
        CornerSlot::bottom(0),
        CornerSlot::bottom(1),
        CornerSlot::bottom(2),
        CornerSlot::bottom(3),
    ];

    pub const fn top(side: usize) -> Self {
        Self {
            top: true,
            side: side % 4,
        }
    }

    pub const fn bottom(side: usize) -> Self {
        Self {
            top: false,
            side: side % 4,
        }
    }

    pub fn ordinal(self) -> usize {
        if self.top {
            self.side
        } else {
            4 + self.side
        }
    }

    /// Facelets as `[U/D facelet, side s facelet, side s+1 facelet]`.
    pub fn facelets(self) -> [Facelet; 3] {
        let s = self.side;
        let (near, far) = (Face::side(s), Face::side(s + 1));
        if self.top {
            let (row, col) = [(2, 2), (0, 2), (0, 0), (2, 0)][s];
            [
                Facelet::new(Face::U, row, col),
                Facelet::new(near, 0, 2),
                Facelet::new(far, 0, 0),
            ]
        } else {
            let (row, col) = [(0, 2), (2, 2), (2, 0), (0, 0)][s];
            [
                Facelet::new(Face::D, row, col),
                Facelet::new(near, 2, 2),
                Facelet::new(far, 2, 0),
            ]
        }
    }

    /// Indices into [`CornerSlot::facelets`] in clockwise order around the
    /// corner, starting at the U/D facelet.
    pub fn clockwise(self) -> [usize; 3] {
        if self.top {
            [0, 2, 1]
        } else {
            [0, 1, 2]
        }
    }
}

impl fmt::Display for CornerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layer = if self.top { Face::U } else { Face::D };
        write!(
            f,
            "{}{}{}",
            layer,
            Face::side(self.side),
            Face::side(self.side + 1)
        )
    }
}

impl CubeState {
    pub fn facelet_at(&self, facelet: Facelet) -> Color {
        self.get(facelet.face, facelet.row, facelet.col)
    }

    pub fn edge_colors(&self, slot: EdgeSlot) -> [Color; 2] {
        slot.facelets().map(|f| self.facelet_at(f))
    }

    pub fn corner_colors(&self, slot: CornerSlot) -> [Color; 3] {
        slot.facelets().map(|f| self.facelet_at(f))
    }

    /// Find the edge carrying colors `a` and `b`.
    ///
    /// Returns its slot and the index (into [`EdgeSlot::facelets`]) of the facelet showing `a`.
    pub fn locate_edge(&self, a: Color, b: Color) -> Option<(EdgeSlot, usize)> {
        EdgeSlot::ALL.into_iter().find_map(|slot| match self.edge_colors(slot) {
            [x, y] if x == a && y == b => Some((slot, 0)),
            [x, y] if x == b && y == a => Some((slot, 1)),
            _ => None,
        })
    }

    /// Find the corner carrying all of `colors`.
    ///
    /// Returns its slot and the index of the facelet showing `colors[0]`.
    pub fn locate_corner(&self, colors: [Color; 3]) -> Option<(CornerSlot, usize)> {
        let wanted = sorted3(colors);
        CornerSlot::ALL.into_iter().find_map(|slot| {
            let found = self.corner_colors(slot);
            if sorted3(found) != wanted {
                return None;
            }
            found
                .iter()
                .position(|&c| c == colors[0])
                .map(|idx| (slot, idx))
        })
    }

    /// Every facelet of the slot matches the center of its face.
    pub fn is_edge_solved(&self, slot: EdgeSlot) -> bool {
        slot.facelets()
            .iter()
            .all(|&f| self.facelet_at(f) == self.center(f.face))
    }

    pub fn is_corner_solved(&self, slot: CornerSlot) -> bool {
        slot.facelets()
            .iter()
            .all(|&f| self.facelet_at(f) == self.center(f.face))
    }
}

pub(crate) fn sorted2(colors: [Color; 2]) -> [Color; 2] {
    let mut c = colors;
    c.sort();
    c
}

pub(crate) fn sorted3(colors: [Color; 3]) -> [Color; 3] {
    let mut c = colors;
    c.sort();
    c
}
