use std::path::Path;

use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;
use quiztex_lib::markup::classify;

pub fn run(app: &App, file: &Path, format: &OutputFormat, use_color: bool) -> Result<()> {
    let deck = app.read_deck(file)?;

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = deck
                .cards()
                .iter()
                .map(|card| {
                    serde_json::json!({
                        "id": card.id,
                        "question": card.question,
                        "answer": card.answer,
                        "questionKind": classify(&card.question),
                        "answerKind": classify(&card.answer),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let title = file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| file.display().to_string());
            println!("{}", terminal::paint(&title, Color::BOLD, use_color));
            println!();

            for (i, card) in deck.cards().iter().enumerate() {
                for line in terminal::render_card(i + 1, card, use_color) {
                    println!("{}", line);
                }
            }

            println!("\n{} cards total", deck.len());
        }
    }

    Ok(())
}
