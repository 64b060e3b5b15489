use std::collections::BTreeSet;

use tracing::debug;

use super::board::{self, Board, CELLS};
use super::dictionary::{Dictionary, MAX_WORD_LEN, MIN_WORD_LEN};

/// Every dictionary word that can be traced on `board`, sorted and without
/// duplicates.
pub fn find_all_possible_words(board: &Board, dictionary: &Dictionary) -> Vec<String> {
    if dictionary.is_empty() {
        return Vec::new();
    }

    let mut found = BTreeSet::new();
    let mut buffer = String::with_capacity(MAX_WORD_LEN + 2);
    for start in 0..CELLS {
        find_words_from_position(board, dictionary, start, 1 << start, &mut buffer, &mut found);
    }

    debug!("Found {} words on board", found.len());
    found.into_iter().collect()
}

fn find_words_from_position(
    board: &Board,
    dictionary: &Dictionary,
    index: usize,
    visited: u16,
    buffer: &mut String,
    found: &mut BTreeSet<String>,
) {
    let mark = buffer.len();
    board.face_at(index).push_to(buffer);

    // Faces are ASCII, so byte length is the spelled length
    if buffer.len() <= MAX_WORD_LEN && dictionary.has_prefix(buffer) {
        if buffer.len() >= MIN_WORD_LEN && dictionary.contains(buffer) && !found.contains(buffer.as_str()) {
            found.insert(buffer.clone());
        }

        for next in board::neighbors(index) {
            if visited & (1 << next) == 0 {
                find_words_from_position(board, dictionary, next, visited | (1 << next), buffer, found);
            }
        }
    }

    buffer.truncate(mark);
}
