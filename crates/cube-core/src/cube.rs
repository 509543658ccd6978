use crate::error::CubeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl Face {
    /// All faces in storage order.
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

    /// The four side faces in clockwise order seen from above.
    ///
    /// Position in this array is the face's side index: F=0, R=1, B=2, L=3.
    pub const SIDES: [Face; 4] = [Face::F, Face::R, Face::B, Face::L];

    pub fn index(self) -> usize {
        match self {
            Face::U => 0,
            Face::D => 1,
            Face::F => 2,
            Face::B => 3,
            Face::L => 4,
            Face::R => 5,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            _ => None,
        }
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
            Face::L => Face::R,
            Face::R => Face::L,
        }
    }

    /// The side face with the given side index (taken mod 4).
    pub fn side(index: usize) -> Face {
        Self::SIDES[index % 4]
    }

    /// Side index of this face, `None` for U and D.
    pub fn side_index(self) -> Option<usize> {
        Self::SIDES.iter().position(|&f| f == self)
    }

    /// Relabel a side face `offset` steps clockwise (seen from above); U and D are fixed.
    pub fn shifted(self, offset: usize) -> Face {
        match self.side_index() {
            Some(i) => Face::side(i + offset),
            None => self,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Facelet color, serialized as its one-character symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Color> {
        Self::ALL.into_iter().find(|c| c.symbol() == symbol)
    }

    /// The color each face carries in the solved state.
    pub fn home(face: Face) -> Color {
        match face {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::F => Color::Red,
            Face::B => Color::Orange,
            Face::L => Color::Blue,
            Face::R => Color::Green,
        }
    }
}

impl From<Color> for char {
    fn from(color: Color) -> char {
        color.symbol()
    }
}

impl TryFrom<char> for Color {
    type Error = String;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Color::from_symbol(symbol).ok_or_else(|| format!("unknown color symbol '{}'", symbol))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One face: `grid[row][col]`, viewed from outside the cube.
pub type FaceGrid = [[Color; 3]; 3];

/// Full facelet state of a 3x3 cube.
///
/// Each face is stored as seen from outside the cube:
/// - U: row 0 borders B, row 2 borders F, column 0 borders L
/// - D: row 0 borders F, row 2 borders B, column 0 borders L
/// - F, B, L, R: row 0 borders U; column 0 borders the face to the left
///   (F: L, R: F, B: R, L: B)
///
/// Any grid can be stored. Whether it is a reachable cube is checked by
/// [`crate::validate_state`], not enforced here.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "FaceletMap", from = "FaceletMap")]
pub struct CubeState {
    faces: [FaceGrid; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    /// The canonical solved cube.
    pub fn solved() -> Self {
        let mut faces = [[[Color::White; 3]; 3]; 6];
        for face in Face::ALL {
            faces[face.index()] = [[Color::home(face); 3]; 3];
        }
        Self { faces }
    }

    /// Build a state from six face grids in [`Face::ALL`] order.
    pub fn from_faces(faces: [FaceGrid; 6]) -> Self {
        Self { faces }
    }

    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    /// Read a facelet; `None` when `row` or `col` is out of range.
    pub fn facelet(&self, face: Face, row: usize, col: usize) -> Option<Color> {
        self.faces[face.index()].get(row)?.get(col).copied()
    }

    pub fn set_facelet(
        &mut self,
        face: Face,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<(), CubeError> {
        if row > 2 || col > 2 {
            return Err(CubeError::FaceletOutOfBounds { row, col });
        }
        self.faces[face.index()][row][col] = color;
        Ok(())
    }

    pub fn center(&self, face: Face) -> Color {
        self.faces[face.index()][1][1]
    }

    /// Facelet count per color, indexed by [`Color::index`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for grid in &self.faces {
            for row in grid {
                for color in row {
                    counts[color.index()] += 1;
                }
            }
        }
        counts
    }

    /// True when every face is a single color matching its center.
    pub fn is_solved(&self) -> bool {
        Face::ALL.iter().all(|&face| {
            let center = self.center(face);
            self.face(face).iter().flatten().all(|&c| c == center)
        })
    }

    /// Number of facelets that differ from `other`.
    pub fn mismatched_facelets(&self, other: &CubeState) -> usize {
        self.faces
            .iter()
            .flatten()
            .flatten()
            .zip(other.faces.iter().flatten().flatten())
            .filter(|(a, b)| a != b)
            .count()
    }

    pub(crate) fn get(&self, face: Face, row: usize, col: usize) -> Color {
        self.faces[face.index()][row][col]
    }

    pub(crate) fn grid_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face.index()]
    }
}

impl fmt::Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubeState(")?;
        for face in Face::ALL {
            write!(f, "{}:", face)?;
            for color in self.face(face).iter().flatten() {
                write!(f, "{}", color)?;
            }
            if face != Face::R {
                write!(f, " ")?;
            }
        }
        write!(f, ")")
    }
}

/// Unfolded net:
///
/// ```text
///       U
///   L   F   R   B
///       D
/// ```
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_str = |face: Face, row: usize| -> String {
            self.face(face)[row]
                .iter()
                .map(|c| c.symbol().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        for row in 0..3 {
            writeln!(f, "        {}", row_str(Face::U, row))?;
        }
        for row in 0..3 {
            writeln!(
                f,
                "{}  {}  {}  {}",
                row_str(Face::L, row),
                row_str(Face::F, row),
                row_str(Face::R, row),
                row_str(Face::B, row)
            )?;
        }
        for row in 0..3 {
            writeln!(f, "        {}", row_str(Face::D, row))?;
        }
        Ok(())
    }
}

/// Serialized form of a [`CubeState`]: one 3x3 grid per face letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceletMap {
    #[serde(rename = "U")]
    pub up: FaceGrid,
    #[serde(rename = "D")]
    pub down: FaceGrid,
    #[serde(rename = "F")]
    pub front: FaceGrid,
    #[serde(rename = "B")]
    pub back: FaceGrid,
    #[serde(rename = "L")]
    pub left: FaceGrid,
    #[serde(rename = "R")]
    pub right: FaceGrid,
}

impl From<CubeState> for FaceletMap {
    fn from(state: CubeState) -> Self {
        let [up, down, front, back, left, right] = state.faces;
        Self {
            up,
            down,
            front,
            back,
            left,
            right,
        }
    }
}

impl From<FaceletMap> for CubeState {
    fn from(map: FaceletMap) -> Self {
        CubeState::from_faces([map.up, map.down, map.front, map.back, map.left, map.right])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_state() {
        let cube = CubeState::solved();
        assert!(cube.is_solved());
        assert_eq!(cube.color_counts(), [9; 6]);
        for face in Face::ALL {
            assert_eq!(cube.center(face), Color::home(face));
        }
    }

    #[test]
    fn test_facelet_bounds() {
        let mut cube = CubeState::solved();
        assert_eq!(cube.facelet(Face::F, 2, 2), Some(Color::Red));
        assert_eq!(cube.facelet(Face::F, 3, 0), None);
        assert_eq!(cube.facelet(Face::F, 0, 3), None);

        assert_eq!(
            cube.set_facelet(Face::U, 0, 5, Color::Red),
            Err(CubeError::FaceletOutOfBounds { row: 0, col: 5 })
        );
        cube.set_facelet(Face::U, 0, 0, Color::Red).unwrap();
        assert_eq!(cube.facelet(Face::U, 0, 0), Some(Color::Red));
        assert!(!cube.is_solved());
    }

    #[test]
    fn test_structural_equality() {
        let a = CubeState::solved();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set_facelet(Face::D, 1, 2, Color::Blue).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.mismatched_facelets(&b), 1);
    }

    #[test]
    fn test_side_shift() {
        assert_eq!(Face::F.shifted(1), Face::R);
        assert_eq!(Face::L.shifted(1), Face::F);
        assert_eq!(Face::B.shifted(3), Face::R);
        assert_eq!(Face::U.shifted(2), Face::U);
        assert_eq!(Face::side(6), Face::B);
        assert_eq!(Face::D.side_index(), None);
    }

    #[test]
    fn test_serialize_keys_faces_by_letter() {
        let json = serde_json::to_value(CubeState::solved()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        assert_eq!(json["U"][0][0], "W");
        assert_eq!(json["F"][2][1], "R");
        assert_eq!(json["R"][1][1], "G");

        let back: CubeState = serde_json::from_value(json).unwrap();
        assert_eq!(back, CubeState::solved());
    }

    #[test]
    fn test_display_net() {
        let text = CubeState::solved().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].trim(), "W W W");
        assert_eq!(lines[3], "B B B  R R R  G G G  O O O");
        assert_eq!(lines[8].trim(), "Y Y Y");
    }
}
