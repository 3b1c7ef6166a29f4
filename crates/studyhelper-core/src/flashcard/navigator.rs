//! Cursor over the selected deck.

use rand::Rng;
use tracing::info;

use super::{Flashcard, FlashcardDeck};
use crate::error::{Result, ValidationError};

/// Cursor position and visible side. Transient; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    cursor: usize,
    facing_front: bool,
}

impl NavigationState {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn facing_front(&self) -> bool {
        self.facing_front
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            cursor: 0,
            facing_front: true,
        }
    }
}

/// Study view over the selected deck.
///
/// Obtained from [`FlashcardDeckStore::navigator`](super::FlashcardDeckStore::navigator).
/// With no deck selected, or an empty deck, every movement is a no-op and
/// [`current_card`](Self::current_card) is `None`.
pub struct DeckNavigator<'a> {
    deck: Option<&'a mut FlashcardDeck>,
    nav: &'a mut NavigationState,
}

impl<'a> DeckNavigator<'a> {
    pub(crate) fn new(deck: Option<&'a mut FlashcardDeck>, nav: &'a mut NavigationState) -> Self {
        Self { deck, nav }
    }

    pub fn deck(&self) -> Option<&FlashcardDeck> {
        self.deck.as_deref()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.active().map(|_| self.nav.cursor)
    }

    pub fn facing_front(&self) -> bool {
        self.nav.facing_front
    }

    /// `(cursor, card count)` when a non-empty deck is active.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.active().map(|d| (self.nav.cursor, d.len()))
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.active().and_then(|d| d.cards().get(self.nav.cursor))
    }

    /// Text on the side currently facing the user.
    pub fn current_face(&self) -> Option<&str> {
        self.current_card().map(|c| {
            if self.nav.facing_front {
                c.front()
            } else {
                c.back()
            }
        })
    }

    /// Append a card to the active deck.
    ///
    /// # Errors
    /// [`ValidationError::NoDeckSelected`] with no active deck, or
    /// [`ValidationError::EmptyField`] for a blank side.
    pub fn add_card(&mut self, front: &str, back: &str) -> Result<()> {
        let deck = self.deck.as_deref_mut().ok_or(ValidationError::NoDeckSelected)?;
        let was_empty = deck.is_empty();
        deck.add_card(front, back)?;
        info!("Added card to '{}' ({} cards)", deck.name(), deck.len());
        if was_empty {
            self.nav.reset();
        }
        Ok(())
    }

    pub fn flip(&mut self) {
        if self.active().is_some() {
            self.nav.facing_front = !self.nav.facing_front;
        }
    }

    pub fn next(&mut self) {
        if let Some(count) = self.active().map(FlashcardDeck::len) {
            self.nav.cursor = (self.nav.cursor + 1) % count;
            self.nav.facing_front = true;
        }
    }

    pub fn prev(&mut self) {
        if let Some(count) = self.active().map(FlashcardDeck::len) {
            self.nav.cursor = (self.nav.cursor + count - 1) % count;
            self.nav.facing_front = true;
        }
    }

    /// Shuffle with the thread RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Reorder the active deck in place and return to its first card.
    /// Decks with fewer than two cards are left alone.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(deck) = self.deck.as_deref_mut() else {
            return;
        };
        if deck.len() < 2 {
            return;
        }
        deck.shuffle_cards(rng);
        info!("Shuffled deck '{}'", deck.name());
        self.nav.reset();
    }

    /// The active deck, only if it has cards.
    fn active(&self) -> Option<&FlashcardDeck> {
        self.deck.as_deref().filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn deck_of(n: usize) -> FlashcardDeck {
        let mut deck = FlashcardDeck::new("test").unwrap();
        for i in 0..n {
            deck.add_card(&format!("q{i}"), &format!("a{i}")).unwrap();
        }
        deck
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut deck = deck_of(3);
        let mut nav = NavigationState::default();
        let mut n = DeckNavigator::new(Some(&mut deck), &mut nav);

        n.next();
        n.next();
        assert_eq!(n.cursor(), Some(2));
        n.next();
        assert_eq!(n.cursor(), Some(0));
        n.prev();
        assert_eq!(n.cursor(), Some(2));
        assert_eq!(n.current_card().map(|c| c.front()), Some("q2"));
    }

    #[test]
    fn moving_turns_card_face_up() {
        let mut deck = deck_of(2);
        let mut nav = NavigationState::default();
        let mut n = DeckNavigator::new(Some(&mut deck), &mut nav);

        n.flip();
        assert!(!n.facing_front());
        assert_eq!(n.current_face(), Some("a0"));
        n.next();
        assert!(n.facing_front());
        assert_eq!(n.current_face(), Some("q1"));
        n.flip();
        n.prev();
        assert!(n.facing_front());
    }

    #[test]
    fn empty_or_missing_deck_is_inert() {
        let mut nav = NavigationState::default();
        let mut n = DeckNavigator::new(None, &mut nav);
        n.next();
        n.flip();
        n.shuffle();
        assert!(n.current_card().is_none());
        assert!(n.cursor().is_none());
        assert!(n.facing_front());

        let mut empty = deck_of(0);
        let mut n = DeckNavigator::new(Some(&mut empty), &mut nav);
        n.prev();
        n.flip();
        assert!(n.position().is_none());
        assert!(n.facing_front());
    }

    #[test]
    fn add_card_without_deck_fails() {
        let mut nav = NavigationState::default();
        let mut n = DeckNavigator::new(None, &mut nav);
        let err = n.add_card("q", "a").unwrap_err();
        assert!(err.to_string().contains("No deck selected"));
    }

    #[test]
    fn add_card_rejects_blank_and_leaves_deck_alone() {
        let mut deck = deck_of(1);
        let mut nav = NavigationState::default();
        let mut n = DeckNavigator::new(Some(&mut deck), &mut nav);
        assert!(n.add_card("q", "  ").is_err());
        assert!(n.add_card("", "a").is_err());
        assert_eq!(n.position(), Some((0, 1)));
    }

    #[test]
    fn first_card_enables_navigation() {
        let mut deck = deck_of(0);
        let mut nav = NavigationState::default();
        let mut n = DeckNavigator::new(Some(&mut deck), &mut nav);
        n.add_card("first", "card").unwrap();
        assert_eq!(n.position(), Some((0, 1)));
        assert_eq!(n.current_face(), Some("first"));
    }

    #[test]
    fn adding_to_non_empty_deck_keeps_cursor() {
        let mut deck = deck_of(2);
        let mut nav = NavigationState::default();
        let mut n = DeckNavigator::new(Some(&mut deck), &mut nav);
        n.next();
        n.flip();
        n.add_card("q9", "a9").unwrap();
        assert_eq!(n.position(), Some((1, 3)));
        assert!(!n.facing_front());
    }

    #[test]
    fn shuffle_resets_cursor_and_keeps_cards() {
        let mut deck = deck_of(5);
        let original = deck.cards().to_vec();
        let mut nav = NavigationState::default();
        let mut n = DeckNavigator::new(Some(&mut deck), &mut nav);
        n.next();
        n.next();
        n.flip();

        n.shuffle_with(&mut Mcg128Xsl64::seed_from_u64(3));
        assert_eq!(n.cursor(), Some(0));
        assert!(n.facing_front());

        let mut after = n.deck().unwrap().cards().to_vec();
        let mut before = original;
        after.sort_by(|a, b| a.front().cmp(b.front()));
        before.sort_by(|a, b| a.front().cmp(b.front()));
        assert_eq!(after, before);
    }

    #[test]
    fn shuffle_one_card_keeps_cursor_state() {
        let mut deck = deck_of(1);
        let mut nav = NavigationState::default();
        let mut n = DeckNavigator::new(Some(&mut deck), &mut nav);
        n.flip();
        n.shuffle();
        assert!(!n.facing_front());
    }
}
