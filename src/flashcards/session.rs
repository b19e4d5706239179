//! Study session: one deck, its flip state and the last import error
//!
//! The session is the single owner of mutable study state. Front ends feed it
//! file contents and user actions; it re-keys the flip state after every
//! operation that may change the displayed card.

use std::io;

use super::deck::Deck;
use super::models::{Card, CardId, ViewState};
use super::presentation::FlipState;
use super::shuffle::{RandomShuffler, Shuffler};
use crate::import::{parse_cards, CardPair, ImportError, Result};

/// A user action on the displayed deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    ToggleFlag,
    Flip,
    Shuffle,
    ToggleFilter,
}

pub struct StudySession {
    deck: Option<Deck>,
    flip: FlipState,
    error: Option<String>,
    shuffler: Box<dyn Shuffler>,
}

impl StudySession {
    pub fn new(shuffler: Box<dyn Shuffler>) -> Self {
        Self {
            deck: None,
            flip: FlipState::new(),
            error: None,
            shuffler,
        }
    }

    /// Session with random shuffles, reproducible when a seed is given
    pub fn with_seed(seed: Option<u64>) -> Self {
        let shuffler = match seed {
            Some(seed) => RandomShuffler::seeded(seed),
            None => RandomShuffler::new(),
        };
        Self::new(Box::new(shuffler))
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    /// Message of the last failed load, cleared by the next successful one
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn flip_state(&self) -> &FlipState {
        &self.flip
    }

    /// For installing a flip observer
    pub fn flip_state_mut(&mut self) -> &mut FlipState {
        &mut self.flip
    }

    pub fn is_flipped(&self) -> bool {
        self.flip.is_flipped()
    }

    pub fn view_state(&self) -> ViewState {
        self.deck
            .as_ref()
            .map_or(ViewState::Empty, |deck| deck.view_state())
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.as_ref().and_then(|deck| deck.current_card())
    }

    // ==================== Loading ====================

    /// Parse CSV text and replace the deck with it
    pub fn load_text(&mut self, content: &str) -> Result<usize> {
        match parse_cards(content) {
            Ok(pairs) => Ok(self.load_pairs(pairs)),
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }

    /// Finish an asynchronous file read
    pub fn finish_load(&mut self, result: io::Result<String>) -> Result<usize> {
        match result {
            Ok(content) => self.load_text(&content),
            Err(e) => {
                let error = ImportError::Read(e);
                self.fail(&error);
                Err(error)
            }
        }
    }

    /// Replace the whole deck. Returns the number of cards loaded.
    pub fn load_pairs(&mut self, pairs: Vec<CardPair>) -> usize {
        self.deck = Deck::load(pairs);
        self.error = None;

        let count = self.deck.as_ref().map_or(0, |deck| deck.len());
        log::info!("Loaded deck with {} cards", count);

        let current = self.current_id();
        self.flip.reset(current);
        count
    }

    /// Record a failed load; the current deck stays as it is
    pub fn fail(&mut self, error: &ImportError) {
        log::warn!("Deck load failed: {}", error);
        self.error = Some(error.to_string());
    }

    // ==================== Deck operations ====================

    pub fn next(&mut self) {
        if let Some(deck) = self.deck.as_mut() {
            deck.next();
        }
        let current = self.current_id();
        self.flip.reset(current);
    }

    pub fn previous(&mut self) {
        if let Some(deck) = self.deck.as_mut() {
            deck.previous();
        }
        let current = self.current_id();
        self.flip.reset(current);
    }

    pub fn toggle_flag(&mut self) {
        if let Some(deck) = self.deck.as_mut() {
            deck.toggle_flag();
        }
        let current = self.current_id();
        self.flip.show(current);
    }

    pub fn shuffle(&mut self) {
        let shuffled = match self.deck.as_mut() {
            Some(deck) => deck.shuffle(self.shuffler.as_mut()),
            None => false,
        };
        if shuffled {
            let current = self.current_id();
            self.flip.reset(current);
        }
    }

    pub fn toggle_filter_mode(&mut self) {
        if let Some(deck) = self.deck.as_mut() {
            deck.toggle_filter_mode();
        }
        let current = self.current_id();
        self.flip.reset(current);
    }

    pub fn flip(&mut self) -> bool {
        let current = self.current_id();
        self.flip.show(current);
        self.flip.flip()
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Previous => self.previous(),
            Action::Next => self.next(),
            Action::ToggleFlag => self.toggle_flag(),
            Action::Flip => {
                self.flip();
            }
            Action::Shuffle => self.shuffle(),
            Action::ToggleFilter => self.toggle_filter_mode(),
        }
    }

    fn current_id(&self) -> Option<CardId> {
        self.current_card().map(|card| card.id)
    }
}

impl Default for StudySession {
    fn default() -> Self {
        Self::with_seed(None)
    }
}
