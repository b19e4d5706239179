//! LaTeX detection for card text
//!
//! Decides whether a question or answer goes through the math renderer or is
//! shown as plain text.

use std::sync::OnceLock;

use regex::RegexSet;
use serde::{Deserialize, Serialize};

const MARKUP_PATTERNS: [&str; 5] = [
    // Inline math: $...$
    r"\$.+?\$",
    // Inline math: \(...\)
    r"\\\(.+?\\\)",
    // Display math: \[...\]
    r"\\\[.+?\\\]",
    // Environments: \begin{...}...\end{...}
    r"\\begin\{.+?\}.+?\\end\{.+?\}",
    // Commands: \command or \command{...}
    r"\\[a-zA-Z]+(\{.+?\})?",
];

fn markup_patterns() -> &'static RegexSet {
    static PATTERNS: OnceLock<RegexSet> = OnceLock::new();
    PATTERNS.get_or_init(|| RegexSet::new(MARKUP_PATTERNS).expect("Invalid markup regex"))
}

/// How a piece of card text should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    Markup,
    Plain,
}

pub fn contains_markup(text: &str) -> bool {
    markup_patterns().is_match(text)
}

pub fn classify(text: &str) -> ContentKind {
    if contains_markup(text) {
        ContentKind::Markup
    } else {
        ContentKind::Plain
    }
}
