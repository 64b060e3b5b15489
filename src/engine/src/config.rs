use std::env;
use std::path::PathBuf;

use crate::game::dictionary::{MAX_WORD_LEN, MIN_WORD_LEN};

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub wordlist_path: PathBuf,
    pub seed: Option<String>,
    pub min_word_len: usize,
    pub max_word_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist_path: PathBuf::from("words"),
            seed: None,
            min_word_len: MIN_WORD_LEN,
            max_word_len: MAX_WORD_LEN,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("WOGGLE_WORDLIST") {
            config.wordlist_path = PathBuf::from(path);
        }

        if let Ok(seed) = env::var("WOGGLE_SEED") {
            let seed = seed.trim();
            if !seed.is_empty() {
                config.seed = Some(seed.to_string());
            }
        }

        if let Ok(len) = env::var("WOGGLE_MIN_WORD_LEN") {
            if let Ok(value) = len.parse::<usize>() {
                config.min_word_len = value.clamp(MIN_WORD_LEN, MAX_WORD_LEN);
            }
        }

        if let Ok(len) = env::var("WOGGLE_MAX_WORD_LEN") {
            if let Ok(value) = len.parse::<usize>() {
                config.max_word_len = value.clamp(MIN_WORD_LEN, MAX_WORD_LEN);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.wordlist_path, PathBuf::from("words"));
        assert_eq!(config.seed, None);
        assert_eq!(config.min_word_len, 3);
        assert_eq!(config.max_word_len, 16);
    }

    #[test]
    fn test_from_env() {
        env::set_var("WOGGLE_WORDLIST", "/tmp/wordlist");
        env::set_var("WOGGLE_SEED", " daily ");
        env::set_var("WOGGLE_MIN_WORD_LEN", "4");
        env::set_var("WOGGLE_MAX_WORD_LEN", "not a number");

        let config = GameConfig::from_env();

        env::remove_var("WOGGLE_WORDLIST");
        env::remove_var("WOGGLE_SEED");
        env::remove_var("WOGGLE_MIN_WORD_LEN");
        env::remove_var("WOGGLE_MAX_WORD_LEN");

        assert_eq!(config.wordlist_path, PathBuf::from("/tmp/wordlist"));
        assert_eq!(config.seed.as_deref(), Some("daily"));
        assert_eq!(config.min_word_len, 4);
        assert_eq!(config.max_word_len, 16);

        // Same variables, so this stays in one test
        env::set_var("WOGGLE_MIN_WORD_LEN", "2");
        env::set_var("WOGGLE_MAX_WORD_LEN", "17");

        let config = GameConfig::from_env();

        env::remove_var("WOGGLE_MIN_WORD_LEN");
        env::remove_var("WOGGLE_MAX_WORD_LEN");

        assert_eq!(config.min_word_len, MIN_WORD_LEN);
        assert_eq!(config.max_word_len, MAX_WORD_LEN);
    }
}
