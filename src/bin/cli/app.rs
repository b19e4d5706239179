use std::path::Path;

use anyhow::{Context, Result};

use quiztex_lib::config::Config;
use quiztex_lib::flashcards::{Deck, StudySession};
use quiztex_lib::import;

/// Shared application state for CLI commands and the TUI
pub struct App {
    pub config: Config,
    /// Shuffle seed: the command line wins over the config file
    pub seed: Option<u64>,
}

impl App {
    /// Load configuration from `config_path` or the default location
    pub fn new(config_path: Option<&Path>, seed: Option<u64>) -> Result<Self> {
        let config = Config::load_or_default(config_path)
            .context("Failed to load config")?;
        let seed = seed.or(config.shuffle.seed);

        Ok(Self { config, seed })
    }

    /// Read a deck file into a fresh deck
    pub fn read_deck(&self, path: &Path) -> Result<Deck> {
        let pairs = import::read_cards(path)
            .with_context(|| format!("Failed to import {}", path.display()))?;
        Deck::load(pairs).context("Deck has no cards")
    }

    /// A study session using the configured shuffle seed
    pub fn new_session(&self) -> StudySession {
        StudySession::with_seed(self.seed)
    }
}
