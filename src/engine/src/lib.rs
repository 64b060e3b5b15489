pub mod config;
pub mod error;
pub mod game;
pub mod session;

pub use error::{Result, WoggleError};

#[cfg(test)]
mod test_utils;
