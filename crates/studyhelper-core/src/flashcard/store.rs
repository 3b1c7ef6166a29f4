//! Ordered deck collection with one optional selected deck.

use std::path::Path;

use tracing::{info, warn};

use super::{DeckCodec, DeckNavigator, FlashcardDeck, NavigationState};
use crate::error::{Result, ValidationError};
use crate::storage::{atomic_write, read_if_exists, LoadOutcome};

#[derive(Debug, Clone, Default)]
pub struct FlashcardDeckStore {
    decks: Vec<FlashcardDeck>,
    selected: Option<usize>,
    nav: NavigationState,
}

impl FlashcardDeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decks(&self) -> &[FlashcardDeck] {
        &self.decks
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Append an empty deck.
    ///
    /// # Errors
    /// Returns a validation error, with the store unchanged, if `name` is
    /// blank.
    pub fn add_deck(&mut self, name: &str) -> Result<&FlashcardDeck> {
        let deck = FlashcardDeck::new(name)?;
        info!("Added deck: {}", deck.name());
        let index = self.decks.len();
        self.decks.push(deck);
        Ok(&self.decks[index])
    }

    /// Decks whose name contains `term`, ignoring case, in store order.
    /// A blank term lists every deck.
    pub fn search(&self, term: &str) -> Vec<&FlashcardDeck> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.decks.iter().collect();
        }
        let found: Vec<&FlashcardDeck> = self
            .decks
            .iter()
            .filter(|d| d.name().to_lowercase().contains(&needle))
            .collect();
        info!("Found {} decks matching '{}'", found.len(), needle);
        found
    }

    /// Index of the first deck named `name`, ignoring case.
    pub fn find(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.decks
            .iter()
            .position(|d| d.name().trim().eq_ignore_ascii_case(name))
    }

    /// Make the deck at `index` the one the navigator works on, starting at
    /// its first card face up. `None` disables navigation.
    ///
    /// # Errors
    /// [`ValidationError::OutOfBounds`] for an index past the end; the
    /// previous selection is kept.
    pub fn select_deck(&mut self, index: Option<usize>) -> Result<()> {
        if let Some(i) = index {
            if i >= self.decks.len() {
                return Err(ValidationError::OutOfBounds {
                    collection: "decks",
                    index: i,
                    len: self.decks.len(),
                }
                .into());
            }
            info!("Selected deck: {}", self.decks[i]);
        } else {
            info!("Deck selection cleared");
        }
        self.selected = index;
        self.nav.reset();
        Ok(())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&FlashcardDeck> {
        self.selected.and_then(|i| self.decks.get(i))
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    /// Study view over the selected deck.
    pub fn navigator(&mut self) -> DeckNavigator<'_> {
        let deck = match self.selected {
            Some(i) => self.decks.get_mut(i),
            None => None,
        };
        DeckNavigator::new(deck, &mut self.nav)
    }

    /// Replace every deck with the contents of `path` and clear the
    /// selection.
    ///
    /// # Errors
    /// I/O and parse failures are returned with the store untouched.
    pub fn load(&mut self, path: &Path) -> Result<LoadOutcome> {
        let text = match read_if_exists(path) {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("No saved decks found at {}", path.display());
                return Ok(LoadOutcome::NotFound);
            }
            Err(e) => {
                warn!("Error loading decks from {}: {e}", path.display());
                return Err(e.into());
            }
        };
        let decks = DeckCodec::deserialize(&text).inspect_err(|e| {
            warn!("Error loading decks from {}: {e}", path.display());
        })?;
        self.decks = decks;
        self.selected = None;
        self.nav.reset();
        info!("Loaded {} decks from {}", self.decks.len(), path.display());
        Ok(LoadOutcome::Loaded(self.decks.len()))
    }

    /// Write every deck to `path`, replacing any previous file atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = DeckCodec::serialize(&self.decks)?;
        atomic_write(path, &text).inspect_err(|e| {
            warn!("Error saving decks to {}: {e}", path.display());
        })?;
        info!("Decks saved to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn store_with(names: &[&str]) -> FlashcardDeckStore {
        let mut store = FlashcardDeckStore::new();
        for n in names {
            store.add_deck(n).unwrap();
        }
        store
    }

    #[test]
    fn add_deck_validates_name() {
        let mut store = FlashcardDeckStore::new();
        assert!(matches!(
            store.add_deck("  "),
            Err(CoreError::Validation(ValidationError::EmptyField { .. }))
        ));
        assert!(store.is_empty());
        assert!(store.add_deck("Biology").unwrap().is_empty());
    }

    #[test]
    fn search_filters_without_reordering() {
        let store = store_with(&["French verbs", "Chemistry", "french nouns"]);
        let names: Vec<_> = store.search("FRENCH").into_iter().map(|d| d.name()).collect();
        assert_eq!(names, ["French verbs", "french nouns"]);
        assert_eq!(store.search("").len(), 3);
        assert_eq!(store.decks()[1].name(), "Chemistry");
    }

    #[test]
    fn find_ignores_case() {
        let store = store_with(&["Alpha", "Beta"]);
        assert_eq!(store.find("beta"), Some(1));
        assert_eq!(store.find("gamma"), None);
    }

    #[test]
    fn selection_resets_navigation() {
        let mut store = store_with(&["a", "b"]);
        store.select_deck(Some(0)).unwrap();
        {
            let mut nav = store.navigator();
            nav.add_card("q1", "a1").unwrap();
            nav.add_card("q2", "a2").unwrap();
            nav.next();
            nav.flip();
        }
        assert_eq!(store.navigation().cursor(), 1);

        store.select_deck(Some(1)).unwrap();
        assert_eq!(store.navigation().cursor(), 0);
        assert!(store.navigation().facing_front());
        assert!(store.navigator().current_card().is_none());

        store.select_deck(Some(0)).unwrap();
        assert_eq!(store.navigator().position(), Some((0, 2)));
    }

    #[test]
    fn out_of_range_selection_keeps_previous() {
        let mut store = store_with(&["a"]);
        store.select_deck(Some(0)).unwrap();
        let err = store.select_deck(Some(4)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfBounds { index: 4, len: 1, .. })
        ));
        assert_eq!(store.selected_index(), Some(0));
    }

    #[test]
    fn deselect_disables_navigation() {
        let mut store = store_with(&["a"]);
        store.select_deck(Some(0)).unwrap();
        store.navigator().add_card("q", "a").unwrap();
        store.select_deck(None).unwrap();
        assert!(store.selected().is_none());
        assert!(store.navigator().current_card().is_none());
        assert!(store.navigator().add_card("q", "a").is_err());
    }
}
