#[cfg(test)]
pub mod test_utils {
    use crate::game::{Board, Dictionary, GameEngine};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Creates a board from sixteen letters, row by row; `Qu` is the QU tile
    pub fn create_test_board(letters: &str) -> Board {
        Board::from_letters(letters).unwrap()
    }

    pub fn create_test_dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied())
    }

    pub fn create_test_engine(words: &[&str]) -> GameEngine {
        GameEngine::new(create_test_dictionary(words))
    }

    /// Creates a temporary wordlist file for testing
    pub fn create_test_wordlist() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "Dog").unwrap();
        writeln!(file, "GOD").unwrap();
        writeln!(file, "go").unwrap();
        writeln!(file, "quod").unwrap();
        writeln!(file, "  quiet  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "incomprehensibilities").unwrap();
        file.flush().unwrap();
        file
    }
}
