use std::path::PathBuf;

use ratatui::prelude::Rect;
use tokio::runtime::Handle;

use crate::app::App;
use quiztex_lib::flashcards::{Action, StudySession};
use quiztex_lib::import;
use quiztex_lib::loader::FileLoader;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Study,
    OpenFile,
}

pub struct TuiState {
    pub app: App,
    pub session: StudySession,
    pub loader: FileLoader,
    pub mode: Mode,

    // Path of the load in flight, for the status line
    pub loading: Option<PathBuf>,

    // Card area for mouse hit-testing (updated each draw)
    pub card_area: Option<Rect>,

    // Input mode state (for OpenFile)
    pub input_text: String,
    pub flash_message: Option<String>,

    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App, handle: Handle) -> Self {
        let session = app.new_session();
        Self {
            app,
            session,
            loader: FileLoader::new(handle),
            mode: Mode::Study,
            loading: None,
            card_area: None,
            input_text: String::new(),
            flash_message: None,
            show_help: false,
            quit: false,
        }
    }

    pub fn has_deck(&self) -> bool {
        self.session.deck().is_some()
    }

    /// Start reading a deck file unless its name rules it out
    pub fn request_open(&mut self, path: PathBuf) {
        let name = path.to_string_lossy().to_string();
        if let Err(e) = import::check_file_type(&name, None) {
            self.session.fail(&e);
            return;
        }
        self.session.clear_error();

        self.loader.request(path.clone());
        self.loading = Some(path);
    }

    /// Submit the path typed into the open prompt
    pub fn open_from_input(&mut self) {
        let path = self.input_text.trim().to_string();
        self.input_text.clear();
        self.mode = Mode::Study;

        if path.is_empty() {
            return;
        }
        self.request_open(PathBuf::from(path));
    }

    /// Hand finished reads to the session
    pub fn apply_completions(&mut self) {
        while let Some(completion) = self.loader.try_next() {
            self.loading = None;
            let name = completion
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            if let Ok(count) = self.session.finish_load(completion.result) {
                self.flash_message = Some(format!("Loaded {} cards from {}", count, name));
            }
        }
    }

    /// Deck actions only apply while a deck is shown
    pub fn apply(&mut self, action: Action) {
        if !self.has_deck() {
            return;
        }
        self.session.apply(action);
    }
}
