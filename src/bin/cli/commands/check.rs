use std::path::Path;

use anyhow::Result;

use crate::render::terminal::{self, Color};
use crate::OutputFormat;
use quiztex_lib::import;
use quiztex_lib::markup::contains_markup;

/// Returns whether the deck is valid
pub fn run(file: &Path, format: &OutputFormat, use_color: bool) -> Result<bool> {
    let (cards, markup_cards, error) = match import::read_cards(file) {
        Ok(pairs) => {
            let markup = pairs
                .iter()
                .filter(|p| contains_markup(&p.question) || contains_markup(&p.answer))
                .count();
            (pairs.len(), markup, None)
        }
        Err(e) => (0, 0, Some(e.to_string())),
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "file": file.to_string_lossy(),
                "valid": error.is_none(),
                "cards": cards,
                "markupCards": markup_cards,
                "error": error,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => match &error {
            None => {
                let mark = terminal::paint("\u{2713}", Color::GREEN, use_color);
                println!(
                    "{} {}: {} cards ({} with LaTeX)",
                    mark,
                    file.display(),
                    cards,
                    markup_cards
                );
            }
            Some(message) => {
                let mark = terminal::paint("\u{2717}", Color::RED, use_color);
                println!("{} {}: {}", mark, file.display(), message);
            }
        },
    }

    Ok(error.is_none())
}
