use anyhow::Result;
use dotenvy::dotenv;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use tracing::{info, warn};

use woggle::config::GameConfig;
use woggle::game::{BoardGenerator, Dictionary, GameEngine};
use woggle::session::GameSession;

fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting woggle");

    let config = GameConfig::from_env();

    info!("Loading dictionary from {}", config.wordlist_path.display());
    let dictionary = match Dictionary::load_with_limits(
        &config.wordlist_path,
        config.min_word_len,
        config.max_word_len,
    ) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            warn!("{}; continuing with an empty dictionary", e);
            Dictionary::default()
        }
    };
    let engine = GameEngine::new(dictionary);

    let mut rng = match &config.seed {
        Some(seed) => {
            info!("Using board seed {}", seed);
            BoardGenerator::rng_for_seed(seed)
        }
        None => StdRng::from_entropy(),
    };
    let session = GameSession::generate(engine, &mut rng);

    println!("{}", session.board());
    println!("{} possible words:", session.possible_words().len());
    for word in session.possible_words() {
        let points = session.hint(word).map(|path| path.score()).unwrap_or_default();
        println!("{:>3}  {}", points, word);
    }

    for word in env::args().skip(1) {
        match session.hint(&word) {
            Some(path) => println!("{}: {}", word.to_uppercase(), path),
            None => println!("{}: not found", word.to_uppercase()),
        }
    }

    Ok(())
}
