use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::app_state::{Mode, TuiState};
use quiztex_lib::flashcards::Action;

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    match state.mode {
        Mode::Study => handle_study_key(state, key),
        Mode::OpenFile => handle_input_key(state, key),
    }
}

/// Deck key bindings
fn action_for(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left => Some(Action::Previous),
        KeyCode::Right => Some(Action::Next),
        KeyCode::Char('f') => Some(Action::ToggleFlag),
        KeyCode::Char(' ') => Some(Action::Flip),
        KeyCode::Char('s') => Some(Action::Shuffle),
        KeyCode::Char('v') => Some(Action::ToggleFilter),
        _ => None,
    }
}

fn handle_study_key(state: &mut TuiState, key: KeyEvent) {
    if let Some(action) = action_for(key.code) {
        state.apply(action);
        return;
    }

    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char('o') => {
            state.mode = Mode::OpenFile;
            state.input_text.clear();
        }
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
        }
        KeyCode::Esc => {
            state.show_help = false;
            state.session.clear_error();
        }
        _ => {}
    }
}

fn handle_input_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.input_text.clear();
            state.mode = Mode::Study;
        }
        KeyCode::Enter => {
            state.open_from_input();
        }
        KeyCode::Backspace => {
            state.input_text.pop();
        }
        KeyCode::Char(c) => {
            state.input_text.push(c);
        }
        _ => {}
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    if !state.app.config.tui.mouse || state.mode != Mode::Study {
        return;
    }

    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let col = mouse.column;
        let row = mouse.row;

        // Click on the card flips it
        if let Some(ref area) = state.card_area {
            if col >= area.x && col < area.x + area.width
                && row >= area.y && row < area.y + area.height
            {
                state.apply(Action::Flip);
            }
        }
    }
}
