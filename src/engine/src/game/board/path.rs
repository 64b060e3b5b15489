use core::fmt;

use super::{is_adjacent, Board, Position};
use crate::game::dictionary::{Dictionary, MAX_WORD_LEN, MIN_WORD_LEN};
use crate::game::scoring::calculate_score;

/// An ordered run of board cells.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Path {
    pub tiles: Vec<Position>,
}

impl Path {
    pub fn new(tiles: Vec<Position>) -> Self {
        Self { tiles }
    }

    /// Number of cells visited. This is what scoring counts, not the spelled length.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn qu_count(&self, board: &Board) -> usize {
        qu_count(board, &self.tiles)
    }

    pub fn spell(&self, board: &Board) -> Option<String> {
        board.spell(&self.tiles)
    }

    pub fn score(&self) -> u32 {
        calculate_score(self.tile_count())
    }
}

impl FromIterator<Position> for Path {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, position) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", position)?;
        }
        Ok(())
    }
}

fn qu_count(board: &Board, positions: &[Position]) -> usize {
    positions
        .iter()
        .filter(|&&p| board.face(p).is_some_and(|face| face.is_qu()))
        .count()
}

/// Checks a claimed word against the path that produced it.
///
/// Rejects words outside three to sixteen characters, words missing from the
/// dictionary, paths whose spelled length (each QU cell counts twice) differs
/// from the word, and paths with a non-adjacent step. The path is not
/// re-spelled; callers pass a word already derived from it.
pub fn is_valid_word(word: &str, board: &Board, path: &[Position], dictionary: &Dictionary) -> bool {
    let word_len = word.chars().count();
    if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word_len) || !dictionary.contains(word) {
        return false;
    }

    if path.iter().any(|p| !p.in_bounds()) {
        return false;
    }

    if word_len != path.len() + qu_count(board, path) {
        return false;
    }

    path.windows(2).all(|pair| is_adjacent(pair[0], pair[1]))
}
