use ratatui::prelude::*;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app_state::TuiState;
use super::{card_widget, status_bar};
use quiztex_lib::flashcards::ViewState;

const HELP_LINES: [(&str, &str); 9] = [
    ("Left / Right", "previous / next card"),
    ("Space", "flip card"),
    ("f", "flag or unflag card"),
    ("s", "shuffle visible cards"),
    ("v", "flagged cards / all cards"),
    ("o", "open a CSV file"),
    ("Esc", "dismiss error or help"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Header + card + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    let header_area = outer[0];
    let card_area = outer[1];
    let status_area = outer[2];

    // Save area for mouse hit-testing
    state.card_area = Some(card_area);

    draw_header(f, header_area, state);
    card_widget::draw(f, card_area, state);
    status_bar::draw(f, status_area, state);

    if state.show_help {
        draw_help(f, size);
    }
}

/// Filter button label and position within the visible cards
fn draw_header(f: &mut Frame, area: Rect, state: &TuiState) {
    let Some(deck) = state.session.deck() else {
        let title = Paragraph::new(" QuizTex").style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(title, area);
        return;
    };

    let filter_label = match state.session.view_state() {
        ViewState::AllView => format!("Flagged ({})", deck.flagged_count()),
        _ => "Show All Cards".to_string(),
    };

    let position = if deck.visible_count() == 0 {
        "0 / 0".to_string()
    } else {
        format!("{} / {}", deck.cursor() + 1, deck.visible_count())
    };

    let line = Line::from(vec![
        Span::styled(" QuizTex  ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("[v] {}", filter_label), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(position, Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let width = 44.min(area.width);
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<14}", keys), Style::default().fg(Color::Cyan)),
                Span::raw(*what),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}
