use std::{collections::HashSet, fs, path::Path};

use tracing::info;

use crate::error::{Result, WoggleError};

/// Shortest word the game accepts.
pub const MIN_WORD_LEN: usize = 3;
/// Longest word the game accepts; also the solver's depth ceiling.
pub const MAX_WORD_LEN: usize = 16;

/// Exact-word set plus the set of every non-empty prefix of those words.
///
/// A string missing from the prefix set starts no dictionary word, which is
/// what lets the solvers abandon a branch early.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary, keeping trimmed, uppercased entries of
    /// [`MIN_WORD_LEN`]..=[`MAX_WORD_LEN`] characters.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_limits(words, MIN_WORD_LEN, MAX_WORD_LEN)
    }

    /// Like [`Dictionary::from_words`] with a narrower length window. Limits
    /// outside [`MIN_WORD_LEN`]..=[`MAX_WORD_LEN`] are clamped to it.
    pub fn with_limits<I, S>(words: I, min_len: usize, max_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let min_len = min_len.max(MIN_WORD_LEN);
        let max_len = max_len.min(MAX_WORD_LEN);

        let mut result = Self::new();
        for word in words {
            let word = word.as_ref().trim();
            let len = word.chars().count();
            if word.is_empty() || len < min_len || len > max_len {
                continue;
            }
            result.insert(word);
        }
        result
    }

    /// Reads a word list with one word per line. Bytes that are not valid
    /// UTF-8 are replaced rather than failing the whole file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_limits(path, MIN_WORD_LEN, MAX_WORD_LEN)
    }

    pub fn load_with_limits<P: AsRef<Path>>(path: P, min_len: usize, max_len: usize) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| WoggleError::WordList {
            path: path.to_path_buf(),
            source,
        })?;

        let text = String::from_utf8_lossy(&bytes);
        let dictionary = Self::with_limits(text.lines(), min_len, max_len);
        info!(
            "Loaded {} words ({} prefixes) from {}",
            dictionary.len(),
            dictionary.prefixes.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Adds one word and all of its prefixes. No length filtering happens here.
    pub(crate) fn insert(&mut self, word: &str) {
        let word = word.to_uppercase();
        if self.words.contains(&word) {
            return;
        }

        for (i, c) in word.char_indices() {
            self.prefixes.insert(word[..i + c.len_utf8()].to_string());
        }
        self.words.insert(word);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl From<Vec<&str>> for Dictionary {
    fn from(words: Vec<&str>) -> Self {
        Self::from_words(words)
    }
}

impl From<Vec<String>> for Dictionary {
    fn from(words: Vec<String>) -> Self {
        Self::from_words(words)
    }
}

impl From<String> for Dictionary {
    fn from(text: String) -> Self {
        Self::from_words(text.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils;
    use std::io::Write;

    #[test]
    fn test_contains() {
        let d = Dictionary::from(vec!["apple", "banana"]);
        assert!(d.contains("APPLE"));
        assert!(d.contains("BANANA"));
        assert!(!d.contains("apple"));
        assert!(!d.contains("TESTINGTESTING"));
    }

    #[test]
    fn test_has_prefix() {
        let d = Dictionary::from(vec!["apple", "app", "application", "applause", "happy"]);

        for prefix in ["A", "AP", "APP", "APPL", "APPLA", "HA", "HAP", "HAPP"] {
            assert!(d.has_prefix(prefix), "{} should be a prefix", prefix);
        }
        // Whole words are their own prefixes
        assert!(d.has_prefix("APPLE"));
        assert!(d.has_prefix("HAPPY"));

        for not_prefix in ["", "B", "Z", "APPLEX", "HAPPYY", "XYZ"] {
            assert!(!d.has_prefix(not_prefix), "{} should not be a prefix", not_prefix);
        }
    }

    #[test]
    fn test_length_filter_and_normalization() {
        let d = Dictionary::from_words(["  cat ", "at", "", "abcdefghijklmnop", "abcdefghijklmnopq"]);
        assert!(d.contains("CAT"));
        assert!(d.contains("ABCDEFGHIJKLMNOP"));
        assert!(!d.contains("AT"));
        assert!(!d.contains("ABCDEFGHIJKLMNOPQ"));
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let d = Dictionary::from(vec!["cat", "CAT", "Cat"]);
        assert_eq!(d.len(), 1);
        assert_eq!(d.words().collect::<Vec<_>>(), vec!["CAT"]);
    }

    #[test]
    fn test_custom_limits() {
        let d = Dictionary::with_limits(["cat", "cats", "catsup"], 4, 5);
        assert!(!d.contains("CAT"));
        assert!(d.contains("CATS"));
        assert!(!d.contains("CATSUP"));
    }

    #[test]
    fn test_limits_clamped_to_word_length_rule() {
        let d = Dictionary::with_limits(["QUBCDEFGHIJKLMNOP", "AB", "cat"], 2, 17);
        assert!(!d.contains("QUBCDEFGHIJKLMNOP"));
        assert!(!d.contains("AB"));
        assert!(d.contains("CAT"));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_load_with_wide_limits_keeps_word_length_rule() {
        let file = test_utils::create_test_wordlist();
        let d = Dictionary::load_with_limits(file.path(), 0, 100).unwrap();
        assert!(!d.contains("GO"));
        assert!(!d.contains("INCOMPREHENSIBILITIES"));
        assert!(d.contains("QUIET"));
    }

    #[test]
    fn test_from_string() {
        let d = Dictionary::from("apple\nbanana\ncherry\r\nhappy".to_string());
        assert!(d.contains("APPLE"));
        assert!(d.contains("CHERRY"));
        assert!(d.contains("HAPPY"));
        assert!(!d.contains("GRAPE"));
    }

    #[test]
    fn test_empty_dictionary() {
        let d = Dictionary::default();
        assert!(d.is_empty());
        assert!(!d.contains("CAT"));
        assert!(!d.has_prefix("C"));
    }

    #[test]
    fn test_load() {
        let file = test_utils::create_test_wordlist();
        let d = Dictionary::load(file.path()).unwrap();
        assert!(d.contains("CAT"));
        assert!(d.contains("QUOD"));
        assert!(!d.contains("GO"));
    }

    #[test]
    fn test_load_invalid_utf8_is_lossy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"dog\ncaf\xe9\ngod\n").unwrap();
        file.flush().unwrap();

        let d = Dictionary::load(file.path()).unwrap();
        assert!(d.contains("DOG"));
        assert!(d.contains("GOD"));
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dictionary::load("/definitely/not/a/wordlist");
        assert!(matches!(result, Err(WoggleError::WordList { .. })));
    }
}
