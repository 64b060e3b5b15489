use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{FoundWord, GameSession};
use crate::error::Result;
use crate::game::{Board, GameEngine};

/// The persistable part of a session. Writing it anywhere is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: Vec<String>,
    pub found_words: Vec<FoundWord>,
    pub score: u32,
    pub elapsed_ms: u64,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&GameSession> for SessionSnapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            board: session.board.faces().iter().map(|face| face.to_string()).collect(),
            found_words: session.found_words.clone(),
            score: session.score,
            elapsed_ms: u64::try_from(session.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl GameSession {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }

    /// Rebuilds a session from a snapshot. The possible-word list is
    /// recomputed for the restored board; the selection starts empty.
    pub fn restore(engine: GameEngine, snapshot: SessionSnapshot) -> Result<Self> {
        let board = Board::try_from(snapshot.board.as_slice())?;
        let mut session = GameSession::new(engine, board);
        session.found_words = snapshot.found_words;
        session.score = snapshot.score;
        session.elapsed = Duration::from_millis(snapshot.elapsed_ms);
        info!(
            "Restored game with {} found words and score {}",
            session.found_words.len(),
            session.score
        );
        Ok(session)
    }
}
