//! Flashcard study core
//!
//! This module provides:
//! - The deck state machine (canonical order, cursor, flag filter, shuffle)
//! - Injectable shuffle permutations
//! - Flip state keyed on card identity
//! - The study session tying a deck to its presentation

pub mod deck;
pub mod models;
pub mod presentation;
pub mod session;
pub mod shuffle;

pub use deck::Deck;
pub use models::*;
pub use presentation::{FlipObserver, FlipState};
pub use session::{Action, StudySession};
pub use shuffle::{FixedPermutation, RandomShuffler, Shuffler};
