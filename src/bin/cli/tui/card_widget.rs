use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::TuiState;
use quiztex_lib::flashcards::ViewState;
use quiztex_lib::markup::{classify, ContentKind};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let flipped = state.session.is_flipped();
    let card = state.session.current_card();

    let mut title = if flipped { " Answer ".to_string() } else { " Question ".to_string() };
    if card.is_some_and(|c| c.flagged) {
        title.push_str("⚑ ");
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if flipped {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Cyan)
        });

    let mut lines: Vec<Line> = Vec::new();

    if let Some(error) = state.session.error() {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    match (state.session.view_state(), card) {
        (_, Some(card)) => {
            let text = if flipped { &card.answer } else { &card.question };
            lines.push(Line::from(""));
            lines.extend(card_text(text));
        }
        (ViewState::FlaggedViewEmpty, None) => {
            lines.extend(hint(
                "No flagged cards available.",
                "Press v to show all cards, then f to flag one.",
            ));
        }
        _ => {
            lines.extend(hint(
                "No cards available.",
                "Press o to open a CSV file (quiztex sample writes one).",
            ));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// Card text, with LaTeX shown as highlighted source
fn card_text(text: &str) -> Vec<Line<'static>> {
    let style = match classify(text) {
        ContentKind::Markup => Style::default().fg(Color::Magenta),
        ContentKind::Plain => Style::default().add_modifier(Modifier::BOLD),
    };

    text.lines()
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect()
}

fn hint(headline: &str, detail: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            headline.to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(detail.to_string(), Style::default().fg(Color::DarkGray))),
    ]
}
