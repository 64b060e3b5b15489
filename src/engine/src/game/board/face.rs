use core::fmt;
use std::str::FromStr;

use crate::error::WoggleError;

/// The value showing on one board cell.
///
/// `Qu` occupies a single tile but spells two characters, so tile counts and
/// spelled lengths must always go through [`Face::tile_count`] and
/// [`Face::char_len`] rather than string lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Letter(char),
    Qu,
}

impl Face {
    /// Maps a die character to its face. Dice carry no bare `Q`, so a `Q` on
    /// a die always stands for the QU tile.
    pub fn from_die_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'Q' => Face::Qu,
            other => Face::Letter(other),
        }
    }

    pub const fn tile_count(self) -> usize {
        1
    }

    pub const fn char_len(self) -> usize {
        match self {
            Face::Letter(_) => 1,
            Face::Qu => 2,
        }
    }

    pub fn is_qu(self) -> bool {
        self == Face::Qu
    }

    /// Appends the characters this face spells to `buffer`.
    pub fn push_to(self, buffer: &mut String) {
        match self {
            Face::Letter(c) => buffer.push(c),
            Face::Qu => buffer.push_str("QU"),
        }
    }

    pub fn spelled(self) -> String {
        let mut s = String::with_capacity(self.char_len());
        self.push_to(&mut s);
        s
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Letter(c) => f.pad(c.encode_utf8(&mut [0; 4])),
            Face::Qu => f.pad("Qu"),
        }
    }
}

impl FromStr for Face {
    type Err = WoggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("qu") {
            return Ok(Face::Qu);
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Face::Letter(c.to_ascii_uppercase())),
            _ => Err(WoggleError::InvalidFace(s.to_string())),
        }
    }
}
