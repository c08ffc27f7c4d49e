use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use itertools::Itertools;

/// The colour of a single facelet. `Unknown` marks a facelet that has not been
/// scanned yet and never appears in a finished cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
    Unknown,
}

impl Color {
    /// Every colour, indexable by `color as usize`.
    pub const ALL: [Self; 7] = {
        use Color::*;
        let v = [White, Yellow, Red, Orange, Blue, Green, Unknown];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The six colours a finished cube is made of.
    pub const REAL: [Self; 6] = {
        use Color::*;
        [White, Yellow, Red, Orange, Blue, Green]
    };

    /// The solver-bridge letter for this colour, or `None` for `Unknown`.
    pub fn letter(self) -> Option<char> {
        match self {
            Color::White => Some('w'),
            Color::Yellow => Some('y'),
            Color::Red => Some('r'),
            Color::Orange => Some('o'),
            Color::Blue => Some('b'),
            Color::Green => Some('g'),
            Color::Unknown => None,
        }
    }

    /// Inverse of [`Color::letter`]. Accepts either case since manual entry is
    /// rarely consistent about it.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'w' => Some(Color::White),
            'y' => Some(Color::Yellow),
            'r' => Some(Color::Red),
            'o' => Some(Color::Orange),
            'b' => Some(Color::Blue),
            'g' => Some(Color::Green),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Unknown => "Unknown",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Up, Down, Front, Back, Left, Right];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The colour every facelet of this face has when the cube is solved.
    pub fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
        }
    }

    /// The notation letter of the face (`U`, `D`, ...).
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'L' => Some(Face::Left),
            'R' => Some(Face::Right),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Up => "Up",
            Face::Down => "Down",
            Face::Front => "Front",
            Face::Back => "Back",
            Face::Left => "Left",
            Face::Right => "Right",
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One face's 3×3 facelets, indexed `[row][col]`.
///
/// Row 0 of the four side faces is the edge touching Up. Row 0 of Up touches
/// Back and row 0 of Down touches Front. Column 0 of Up, Down and Front
/// touches Left, column 0 of Right touches Front, column 0 of Left touches
/// Back and column 0 of Back touches Right. The adjacency tables in
/// `rotation` depend on exactly this layout.
pub type FaceGrid = [[Color; 3]; 3];

pub(crate) const fn uniform_grid(color: Color) -> FaceGrid {
    [[color; 3]; 3]
}

/// The 54 facelets of a cube.
///
/// Grids are stored by value so no two faces (and no two cubes) ever share
/// storage. `clone` is therefore a deep copy.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    pub(crate) faces: [FaceGrid; 6],
}

impl CubeState {
    /// A cube where nothing has been scanned yet.
    pub fn unknown() -> CubeState {
        CubeState {
            faces: [uniform_grid(Color::Unknown); 6],
        }
    }

    pub fn solved() -> CubeState {
        CubeState {
            faces: Face::ALL.map(|face| uniform_grid(face.solved_color())),
        }
    }

    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face as usize]
    }

    pub fn set_face(&mut self, face: Face, grid: FaceGrid) {
        self.faces[face as usize] = grid;
    }

    /// Forget everything known about one face.
    pub fn reset_face(&mut self, face: Face) {
        self.faces[face as usize] = uniform_grid(Color::Unknown);
    }

    /// Set a single facelet, e.g. when correcting one misread cell by hand.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in `0..3`.
    pub fn set_facelet(&mut self, face: Face, row: usize, col: usize, color: Color) {
        self.faces[face as usize][row][col] = color;
    }

    /// Every facelet together with its location, face by face in `Face::ALL`
    /// order and row-major within a face.
    pub fn facelets(&self) -> impl Iterator<Item = (Face, usize, usize, Color)> + '_ {
        Face::ALL.into_iter().flat_map(move |face| {
            let grid = self.face(face);
            (0..3).flat_map(move |row| (0..3).map(move |col| (face, row, col, grid[row][col])))
        })
    }
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::unknown()
    }
}

impl Index<Face> for CubeState {
    type Output = FaceGrid;

    fn index(&self, index: Face) -> &Self::Output {
        &self.faces[index as usize]
    }
}

impl IndexMut<Face> for CubeState {
    fn index_mut(&mut self, index: Face) -> &mut Self::Output {
        &mut self.faces[index as usize]
    }
}

fn cell_char(color: Color) -> char {
    color.letter().unwrap_or('?')
}

/// Prints the cube as an unfolded net:
///
/// ```text
///     UUU
///     UUU
///     UUU
/// LLL FFF RRR BBB
/// ...
///     DDD
/// ```
impl Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.face(Face::Up) {
            writeln!(f, "    {}", row.iter().copied().map(cell_char).collect::<String>())?;
        }

        for r in 0..3 {
            let line = [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .map(|face| self.face(face)[r].iter().copied().map(cell_char).collect::<String>())
                .join(" ");
            writeln!(f, "{line}")?;
        }

        for row in self.face(Face::Down) {
            writeln!(f, "    {}", row.iter().copied().map(cell_char).collect::<String>())?;
        }

        Ok(())
    }
}

impl fmt::Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(Face::ALL.iter().map(|face| (face, self.face(*face))))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for color in Color::REAL {
            assert_eq!(Color::from_letter(color.letter().unwrap()), Some(color));
        }
        assert_eq!(Color::Unknown.letter(), None);
        assert_eq!(Color::from_letter('W'), Some(Color::White));
        assert_eq!(Color::from_letter('?'), None);

        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
    }

    #[test]
    fn clones_do_not_share_grids() {
        let original = CubeState::solved();
        let mut copy = original.clone();
        copy.set_facelet(Face::Up, 0, 0, Color::Red);

        assert_eq!(original[Face::Up][0][0], Color::White);
        assert_eq!(copy[Face::Up][0][0], Color::Red);
    }

    #[test]
    fn reset_face_only_touches_that_face() {
        let mut cube = CubeState::solved();
        cube.reset_face(Face::Left);

        assert_eq!(cube[Face::Left], uniform_grid(Color::Unknown));
        assert_eq!(cube[Face::Right], uniform_grid(Color::Red));
    }

    #[test]
    fn net_rendering() {
        let net = CubeState::solved().to_string();
        let lines = net.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    www");
        assert_eq!(lines[3], "ooo ggg rrr bbb");
        assert_eq!(lines[8], "    yyy");
        assert!(CubeState::unknown().to_string().contains("???"));
    }
}
