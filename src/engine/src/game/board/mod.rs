use crate::error::{Result, WoggleError};
use crate::game::directions;
use core::fmt;

pub mod face;
pub mod path;

pub use face::Face;
pub use path::Path;

/// Number of rows and columns on the board.
pub const SIZE: usize = 4;
/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// A cell coordinate. Flattened row-major as `row * SIZE + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn from_index(index: usize) -> Self {
        Self {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    pub const fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    pub const fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        is_adjacent(self, other)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Two cells are adjacent when their Chebyshev distance is exactly one.
/// A cell is never adjacent to itself.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    if a == b {
        return false;
    }
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col)) == 1
}

/// Flat indices of the cells around `index`, in [`directions::DIRECTIONS`] order.
pub fn neighbors(index: usize) -> impl Iterator<Item = usize> {
    let Position { row, col } = Position::from_index(index);
    directions::DIRECTIONS
        .into_iter()
        .filter_map(move |(dr, dc)| {
            let next_row = row.checked_add_signed(dr)?;
            let next_col = col.checked_add_signed(dc)?;
            let next = Position::new(next_row, next_col);
            next.in_bounds().then(|| next.index())
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    faces: [Face; CELLS],
}

impl Board {
    pub fn new(faces: [Face; CELLS]) -> Self {
        Self { faces }
    }

    /// Builds a board from a run of letters, reading `Qu`/`QU` as the QU tile.
    pub fn from_letters(letters: &str) -> Result<Self> {
        let mut faces = Vec::with_capacity(CELLS);
        let mut chars = letters.chars().filter(|c| !c.is_whitespace()).peekable();
        while let Some(c) = chars.next() {
            if c.eq_ignore_ascii_case(&'q') && chars.peek().is_some_and(|n| n.eq_ignore_ascii_case(&'u')) {
                chars.next();
                faces.push(Face::Qu);
            } else if c.is_ascii_alphabetic() {
                faces.push(Face::Letter(c.to_ascii_uppercase()));
            } else {
                return Err(WoggleError::InvalidFace(c.to_string()));
            }
        }
        Self::try_from(faces)
    }

    pub fn faces(&self) -> &[Face; CELLS] {
        &self.faces
    }

    pub fn face(&self, position: Position) -> Option<Face> {
        position.in_bounds().then(|| self.faces[position.index()])
    }

    pub(crate) fn face_at(&self, index: usize) -> Face {
        self.faces[index]
    }

    /// Spells the cells along `positions`, or `None` if any cell is off the board.
    pub fn spell(&self, positions: &[Position]) -> Option<String> {
        let mut word = String::with_capacity(positions.len() + 1);
        for &position in positions {
            self.face(position)?.push_to(&mut word);
        }
        Some(word)
    }

    /// Finds one path spelling `target`, trying start cells in index order and
    /// neighbours in [`directions::DIRECTIONS`] order. The first complete path
    /// wins; it is not guaranteed to be the shortest.
    pub fn find_path_for_word(&self, target: &str) -> Option<Path> {
        let target = target.to_uppercase();
        if target.is_empty() {
            return None;
        }

        let mut tiles = Vec::with_capacity(CELLS);
        let mut spelled = String::with_capacity(target.len());
        for start in 0..CELLS {
            spelled.clear();
            self.face_at(start).push_to(&mut spelled);
            if !target.starts_with(spelled.as_str()) {
                continue;
            }

            tiles.push(start);
            if self.extend_path(&target, start, 1 << start, &mut tiles, &mut spelled) {
                return Some(tiles.iter().map(|&i| Position::from_index(i)).collect());
            }
            tiles.pop();
        }
        None
    }

    fn extend_path(
        &self,
        target: &str,
        index: usize,
        visited: u16,
        tiles: &mut Vec<usize>,
        spelled: &mut String,
    ) -> bool {
        if spelled.as_str() == target {
            return true;
        }
        if spelled.len() >= target.len() {
            return false;
        }

        for next in neighbors(index) {
            if visited & (1 << next) != 0 {
                continue;
            }

            let mark = spelled.len();
            self.face_at(next).push_to(spelled);
            if target.starts_with(spelled.as_str()) {
                tiles.push(next);
                if self.extend_path(target, next, visited | (1 << next), tiles, spelled) {
                    return true;
                }
                tiles.pop();
            }
            spelled.truncate(mark);
        }
        false
    }
}

impl TryFrom<Vec<Face>> for Board {
    type Error = WoggleError;

    fn try_from(faces: Vec<Face>) -> Result<Self> {
        let actual = faces.len();
        let faces: [Face; CELLS] = faces.try_into().map_err(|_| WoggleError::BoardSize {
            expected: CELLS,
            actual,
        })?;
        Ok(Self::new(faces))
    }
}

impl TryFrom<&[String]> for Board {
    type Error = WoggleError;

    fn try_from(faces: &[String]) -> Result<Self> {
        let faces = faces
            .iter()
            .map(|face| face.parse::<Face>())
            .collect::<Result<Vec<_>>>()?;
        Self::try_from(faces)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.faces.chunks(SIZE) {
            for face in row {
                write!(f, " {:<2}", face)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
