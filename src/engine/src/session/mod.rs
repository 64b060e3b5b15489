//! A single player's game: one board, its cached word list, and what the
//! player has found so far.

pub mod snapshot;

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::game::{calculate_score, Board, BoardGenerator, GameEngine, Path, Position};

pub use snapshot::SessionSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWord {
    pub word: String,
    pub tile_count: usize,
}

impl FoundWord {
    pub fn points(&self) -> u32 {
        calculate_score(self.tile_count)
    }
}

/// Result of submitting the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Word recorded and scored
    Accepted { word: String, points: u32 },
    /// Word was found earlier this game
    AlreadyFound { word: String },
    /// Too short, not a word, or an illegal path
    Invalid { word: String },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    pub fn points(&self) -> u32 {
        match self {
            SubmitOutcome::Accepted { points, .. } => *points,
            _ => 0,
        }
    }
}

pub struct GameSession {
    engine: GameEngine,
    generator: BoardGenerator,
    board: Board,
    possible_words: Vec<String>,
    found_words: Vec<FoundWord>,
    score: u32,
    selection: Vec<Position>,
    elapsed: Duration,
}

impl GameSession {
    pub fn new(engine: GameEngine, board: Board) -> Self {
        Self::with_generator(engine, BoardGenerator::new(), board)
    }

    /// Rolls the first board with the same generator later reshuffles use.
    pub fn generate<R: Rng + ?Sized>(engine: GameEngine, rng: &mut R) -> Self {
        let generator = BoardGenerator::new();
        let board = generator.generate_board_with_rng(rng);
        Self::with_generator(engine, generator, board)
    }

    fn with_generator(engine: GameEngine, generator: BoardGenerator, board: Board) -> Self {
        let possible_words = engine.find_all_valid_words(&board);
        info!("New game with {} possible words", possible_words.len());
        Self {
            engine,
            generator,
            board,
            possible_words,
            found_words: Vec::new(),
            score: 0,
            selection: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Every word findable on the current board, computed once per board.
    pub fn possible_words(&self) -> &[String] {
        &self.possible_words
    }

    pub fn found_words(&self) -> &[FoundWord] {
        &self.found_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selection(&self) -> &[Position] {
        &self.selection
    }

    pub fn selected_word(&self) -> String {
        self.board.spell(&self.selection).unwrap_or_default()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Play time is measured by the caller; the session only keeps the total.
    pub fn add_elapsed(&mut self, duration: Duration) {
        self.elapsed += duration;
    }

    pub fn has_found(&self, word: &str) -> bool {
        self.found_words.iter().any(|found| found.word == word)
    }

    /// Extends the selection with `position`.
    ///
    /// The first cell of an empty selection is always accepted. Picking the
    /// first selected cell again clears the selection. Anything else must be
    /// an unused cell next to the last one.
    pub fn select(&mut self, position: Position) -> bool {
        if !position.in_bounds() {
            return false;
        }

        let Some(&first) = self.selection.first() else {
            self.selection.push(position);
            return true;
        };

        if position == first {
            self.selection.clear();
            return true;
        }

        let last = self.selection[self.selection.len() - 1];
        if self.selection.contains(&position) || !last.is_adjacent(position) {
            return false;
        }

        self.selection.push(position);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Checks the selected word and scores it by tile count. The selection is
    /// cleared whatever the outcome.
    pub fn submit(&mut self) -> SubmitOutcome {
        let selection = std::mem::take(&mut self.selection);
        let word = self.board.spell(&selection).unwrap_or_default();

        if !self.engine.is_valid_word(&word, &self.board, &selection) {
            debug!("Rejected {}", word);
            return SubmitOutcome::Invalid { word };
        }

        if self.has_found(&word) {
            debug!("Already found {}", word);
            return SubmitOutcome::AlreadyFound { word };
        }

        let found = FoundWord {
            word: word.clone(),
            tile_count: selection.len(),
        };
        let points = found.points();
        self.score += points;
        self.found_words.push(found);
        info!("Accepted {} for {} points (total {})", word, points, self.score);

        SubmitOutcome::Accepted { word, points }
    }

    /// Replaces the board and resets everything derived from it.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board = self.generator.generate_board_with_rng(rng);
        self.possible_words = self.engine.find_all_valid_words(&self.board);
        self.found_words.clear();
        self.score = 0;
        self.selection.clear();
        self.elapsed = Duration::ZERO;
        info!("Reshuffled; {} possible words", self.possible_words.len());
    }

    /// A path spelling `word` on the current board, if there is one.
    pub fn hint(&self, word: &str) -> Option<Path> {
        self.engine.find_word_path(&self.board, word)
    }
}
