//! Flip state of the displayed card

use std::fmt;

use super::models::CardId;

/// Called with the new flip value after every flip
pub type FlipObserver = Box<dyn FnMut(bool)>;

/// Whether the displayed card shows its answer.
///
/// The state is keyed on the id of the displayed card, not its position, so a
/// different card never inherits a stale flip.
#[derive(Default)]
pub struct FlipState {
    card: Option<CardId>,
    flipped: bool,
    observer: Option<FlipObserver>,
}

impl FlipState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_observer(&mut self, observer: impl FnMut(bool) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Id of the card the state belongs to
    pub fn card(&self) -> Option<CardId> {
        self.card
    }

    /// Toggle the displayed card; does nothing when no card is displayed
    pub fn flip(&mut self) -> bool {
        if self.card.is_none() {
            return false;
        }

        self.flipped = !self.flipped;
        if let Some(observer) = self.observer.as_mut() {
            observer(self.flipped);
        }
        self.flipped
    }

    /// Follow the displayed card, showing the question again if it changed
    pub fn show(&mut self, card: Option<CardId>) {
        if self.card != card {
            self.reset(card);
        }
    }

    /// Show the question side of `card`, even if it is already displayed
    pub fn reset(&mut self, card: Option<CardId>) {
        self.card = card;
        self.flipped = false;
    }
}

impl fmt::Debug for FlipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlipState")
            .field("card", &self.card)
            .field("flipped", &self.flipped)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_flip_is_its_own_inverse() {
        let mut state = FlipState::new();
        state.show(Some(0));

        assert!(state.flip());
        assert!(!state.flip());
        assert!(!state.is_flipped());
    }

    #[test]
    fn test_flip_without_card_is_noop() {
        let mut state = FlipState::new();
        assert!(!state.flip());
        assert!(!state.is_flipped());
    }

    #[test]
    fn test_show_resets_only_on_identity_change() {
        let mut state = FlipState::new();
        state.show(Some(4));
        state.flip();

        state.show(Some(4));
        assert!(state.is_flipped());

        state.show(Some(5));
        assert!(!state.is_flipped());
        assert_eq!(state.card(), Some(5));
    }

    #[test]
    fn test_reset_always_clears() {
        let mut state = FlipState::new();
        state.show(Some(1));
        state.flip();

        state.reset(Some(1));
        assert!(!state.is_flipped());
    }

    #[test]
    fn test_observer_sees_each_flip() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut state = FlipState::new();
        state.set_observer(move |flipped| sink.borrow_mut().push(flipped));
        state.show(Some(0));
        state.flip();
        state.flip();
        state.reset(Some(1));

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
