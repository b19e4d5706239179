use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    match state.mode {
        Mode::OpenFile => {
            let text = format!(" Open: {}█", state.input_text);
            let prompt = Paragraph::new(text)
                .style(Style::default().bg(Color::Blue).fg(Color::White));
            f.render_widget(prompt, area);
        }
        Mode::Study => {
            let text = if let Some(ref path) = state.loading {
                format!(" Loading {}...", path.display())
            } else if !state.app.config.tui.show_shortcuts {
                " ?: help  q: quit ".to_string()
            } else if state.has_deck() {
                " ←/→: navigate  Space: flip  f: flag  s: shuffle  v: filter  o: open  ?: help  q: quit "
                    .to_string()
            } else {
                " o: open a CSV file  ?: help  q: quit ".to_string()
            };

            let status = Paragraph::new(text)
                .style(Style::default().bg(Color::DarkGray).fg(Color::White));
            f.render_widget(status, area);
        }
    }
}
