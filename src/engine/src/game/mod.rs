pub mod board;
pub mod dictionary;
pub mod directions;
pub mod scoring;
pub mod solver;

pub use board::{is_adjacent, Board, Face, Path, Position};
pub use dictionary::Dictionary;
pub use scoring::calculate_score;
pub use solver::find_all_possible_words;

use std::hash::Hash;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_seeder::Seeder;
use tracing::debug;

use crate::error::Result;

pub const FACES_PER_DIE: usize = 6;

/// The standard sixteen dice. A `Q` face is the QU tile.
pub const DICE: [&str; board::CELLS] = [
    "AACIOT", "ABILTY", "ABJMOQ", "ACDEMP", "ACELRS", "ADENVZ", "AHMORS", "BIFORX",
    "DENOSW", "DKNOTU", "EEFHIY", "EGINTV", "EGKLUY", "EHINPS", "ELPSTU", "GILRUW",
];

// BoardGenerator for game generation
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    dice: [&'static str; board::CELLS],
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGenerator {
    pub fn new() -> Self {
        Self { dice: DICE }
    }

    /// Generates a board. The same seed always produces the same board; with
    /// no seed the board comes from fresh entropy.
    pub fn generate_board(&self, seed: Option<u64>) -> Board {
        match seed {
            Some(seed) => self.generate_board_with_rng(&mut Self::seeded_rng(seed)),
            None => self.generate_board_with_rng(&mut rand::thread_rng()),
        }
    }

    /// Shuffles the dice into the sixteen slots, then rolls each one.
    pub fn generate_board_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let mut dice = self.dice;
        dice.shuffle(rng);

        let faces: [Face; board::CELLS] = std::array::from_fn(|slot| {
            let die = dice[slot].as_bytes();
            Face::from_die_char(die[rng.gen_range(0..die.len())] as char)
        });

        let board = Board::new(faces);
        debug!("Generated board:\n{}", board);
        board
    }

    /// Creates a deterministic RNG from any hashable seed
    pub fn seeded_rng<H: Hash>(seed: H) -> StdRng {
        StdRng::from_seed(Seeder::from(seed).make_seed())
    }

    /// RNG for a textual seed. Numeric text seeds like the same `u64` passed to
    /// [`BoardGenerator::generate_board`]; anything else is hashed as text.
    pub fn rng_for_seed(seed: &str) -> StdRng {
        match seed.trim().parse::<u64>() {
            Ok(number) => Self::seeded_rng(number),
            Err(_) => Self::seeded_rng(seed),
        }
    }
}

/// Main game engine that combines the dictionary with the board searches
#[derive(Clone, Debug)]
pub struct GameEngine {
    dictionary: Arc<Dictionary>,
}

impl GameEngine {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
        }
    }

    pub fn load<P: AsRef<std::path::Path>>(wordlist_path: P) -> Result<Self> {
        Ok(Self::new(Dictionary::load(wordlist_path)?))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn validate_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    pub fn is_valid_word(&self, word: &str, board: &Board, path: &[Position]) -> bool {
        board::path::is_valid_word(word, board, path, &self.dictionary)
    }

    pub fn find_all_valid_words(&self, board: &Board) -> Vec<String> {
        find_all_possible_words(board, &self.dictionary)
    }

    pub fn find_word_path(&self, board: &Board, word: &str) -> Option<Path> {
        board.find_path_for_word(word)
    }
}
