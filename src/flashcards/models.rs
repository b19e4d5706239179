//! Data models for the flashcard deck

use serde::{Deserialize, Serialize};

/// Stable card handle, assigned from input position when a deck is loaded
pub type CardId = usize;

/// A question/answer card with a mutable review flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub flagged: bool,
}

impl Card {
    pub fn new(id: CardId, question: String, answer: String) -> Self {
        Self {
            id,
            question,
            answer,
            flagged: false,
        }
    }
}

/// Which cards of the deck are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterMode {
    /// Every card, in canonical order
    #[default]
    All,
    /// Only flagged cards, in canonical order
    FlaggedOnly,
}

impl FilterMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::All => Self::FlaggedOnly,
            Self::FlaggedOnly => Self::All,
        }
    }

    /// Whether a card is part of the visible subsequence under this mode
    pub fn includes(self, card: &Card) -> bool {
        match self {
            Self::All => true,
            Self::FlaggedOnly => card.flagged,
        }
    }
}

/// Display state of a study session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewState {
    /// No deck loaded
    Empty,
    /// Showing every card
    AllView,
    /// Showing flagged cards
    FlaggedView,
    /// Flagged filter active but nothing is flagged; only "show all" is offered
    FlaggedViewEmpty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_toggle_round_trip() {
        assert_eq!(FilterMode::All.toggled(), FilterMode::FlaggedOnly);
        assert_eq!(FilterMode::All.toggled().toggled(), FilterMode::All);
    }

    #[test]
    fn test_filter_includes() {
        let mut card = Card::new(0, "q".to_string(), "a".to_string());
        assert!(FilterMode::All.includes(&card));
        assert!(!FilterMode::FlaggedOnly.includes(&card));

        card.flagged = true;
        assert!(FilterMode::FlaggedOnly.includes(&card));
    }

    #[test]
    fn test_card_serializes_camel_case() {
        let card = Card::new(3, "q".to_string(), "a".to_string());
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["flagged"], false);
    }
}
