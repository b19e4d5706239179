//! Deck state machine
//!
//! A deck owns the canonical card order, a cursor into the cards visible
//! under the active filter, and the filter mode. The visible subsequence is
//! always derived from the canonical order on demand, and every operation is
//! total: on an empty view navigation, flagging and shuffling do nothing.

use super::models::{Card, CardId, FilterMode, ViewState};
use super::shuffle::{is_permutation, Shuffler};
use crate::import::CardPair;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
    filter: FilterMode,
}

impl Deck {
    /// Build a deck with ids `0..n` in input order, all unflagged.
    ///
    /// Returns `None` for an empty input; "no cards" is not a deck.
    pub fn load(pairs: Vec<CardPair>) -> Option<Self> {
        if pairs.is_empty() {
            return None;
        }

        let cards = pairs
            .into_iter()
            .enumerate()
            .map(|(id, pair)| Card::new(id, pair.question, pair.answer))
            .collect();

        Some(Self {
            cards,
            cursor: 0,
            filter: FilterMode::All,
        })
    }

    /// All cards in canonical order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Canonical positions of the visible cards
    fn visible_positions(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| self.filter.includes(card))
            .map(|(position, _)| position)
            .collect()
    }

    /// Cards selected by the active filter, in canonical order
    pub fn visible_cards(&self) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|card| self.filter.includes(card))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| self.filter.includes(card))
            .count()
    }

    /// Flagged cards across the whole deck, whatever the filter
    pub fn flagged_count(&self) -> usize {
        self.cards.iter().filter(|card| card.flagged).count()
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards
            .iter()
            .filter(|card| self.filter.includes(card))
            .nth(self.cursor)
    }

    pub fn view_state(&self) -> ViewState {
        match self.filter {
            FilterMode::All => ViewState::AllView,
            FilterMode::FlaggedOnly if self.visible_count() == 0 => ViewState::FlaggedViewEmpty,
            FilterMode::FlaggedOnly => ViewState::FlaggedView,
        }
    }

    /// Flip the flag of the current card and return its id.
    ///
    /// Under the flagged filter an unflagged card leaves the view at once; the
    /// cursor stays on the same index (now the following flagged card) or
    /// falls back to the last one.
    pub fn toggle_flag(&mut self) -> Option<CardId> {
        let position = *self.visible_positions().get(self.cursor)?;

        let card = &mut self.cards[position];
        card.flagged = !card.flagged;
        let id = card.id;

        self.clamp_cursor();
        Some(id)
    }

    fn clamp_cursor(&mut self) {
        let visible = self.visible_count();
        if self.cursor >= visible {
            self.cursor = visible.saturating_sub(1);
        }
    }

    pub fn next(&mut self) {
        let visible = self.visible_count();
        if visible == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % visible;
    }

    pub fn previous(&mut self) {
        let visible = self.visible_count();
        if visible == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            visible - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn toggle_filter_mode(&mut self) {
        self.filter = self.filter.toggled();
        self.cursor = 0;
    }

    /// Shuffle the visible cards among the canonical slots they occupy.
    ///
    /// Cards hidden by the filter keep their positions. Returns `false` when
    /// nothing moved: one visible card or fewer, or a shuffler that did not
    /// produce a permutation.
    pub fn shuffle(&mut self, shuffler: &mut dyn Shuffler) -> bool {
        let positions = self.visible_positions();
        if positions.len() <= 1 {
            return false;
        }

        let order = shuffler.permutation(positions.len());
        if !is_permutation(&order, positions.len()) {
            log::warn!(
                "Ignoring shuffle: expected a permutation of {} cards, got {:?}",
                positions.len(),
                order
            );
            return false;
        }

        let mut taken: Vec<Option<Card>> = positions
            .iter()
            .map(|&position| Some(std::mem::take(&mut self.cards[position])))
            .collect();

        for (&position, &source) in positions.iter().zip(&order) {
            if let Some(card) = taken[source].take() {
                self.cards[position] = card;
            }
        }

        self.cursor = 0;
        log::debug!("Shuffled {} visible cards", positions.len());
        true
    }
}
