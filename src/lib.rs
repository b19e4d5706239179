//! QuizTex: flashcards from two-column CSV files
//!
//! The library holds everything a front end needs: CSV import, the deck state
//! machine, flip state, LaTeX detection, asynchronous file loading and user
//! configuration. The `quiztex` binary builds its CLI and terminal UI on top.

pub mod config;
pub mod flashcards;
pub mod import;
pub mod loader;
pub mod markup;
pub mod sample;
