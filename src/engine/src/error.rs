use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WoggleError {
    #[error("failed to read word list {}: {source}", .path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid face '{0}'")]
    InvalidFace(String),

    #[error("board must have {expected} faces, got {actual}")]
    BoardSize { expected: usize, actual: usize },

    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WoggleError>;
