use quiztex_lib::flashcards::Card;
use quiztex_lib::markup::{classify, ContentKind};

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Wrap `text` in an ANSI style when color is enabled
pub fn paint(text: &str, style: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", style, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Render card text, marking LaTeX so the reader knows it is raw source
pub fn render_text(text: &str, use_color: bool) -> String {
    match classify(text) {
        ContentKind::Markup => {
            let tag = paint("[tex]", Color::CYAN, use_color);
            format!("{} {}", tag, text)
        }
        ContentKind::Plain => text.to_string(),
    }
}

/// Render one card as a numbered question with the answer indented below
pub fn render_card(number: usize, card: &Card, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let label = format!("{:>3}.", number);
    let question = render_text(&card.question, use_color);

    let mut question_lines = question.lines();
    let first = question_lines.next().unwrap_or("");
    lines.push(format!("{} {}", paint(&label, Color::BOLD, use_color), first));
    for rest in question_lines {
        lines.push(format!("     {}", rest));
    }

    for answer_line in render_text(&card.answer, use_color).lines() {
        lines.push(format!("     {}", paint(answer_line, Color::DIM, use_color)));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(question: &str, answer: &str) -> Card {
        Card::new(0, question.to_string(), answer.to_string())
    }

    #[test]
    fn test_paint_without_color() {
        assert_eq!(paint("x", Color::RED, false), "x");
        assert_eq!(paint("x", Color::RED, true), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn test_render_text_marks_markup() {
        assert_eq!(render_text("$x^2$", false), "[tex] $x^2$");
        assert_eq!(render_text("plain question", false), "plain question");
    }

    #[test]
    fn test_render_card_plain() {
        let lines = render_card(1, &card("2+2=?", "4"), false);
        assert_eq!(lines, vec!["  1. 2+2=?", "     4"]);
    }

    #[test]
    fn test_render_card_multiline_answer() {
        let lines = render_card(12, &card("Q", "line one\nline two"), false);
        assert_eq!(lines, vec![" 12. Q", "     line one", "     line two"]);
    }
}
