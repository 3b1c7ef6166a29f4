//! Flashcard decks.
//!
//! A [`FlashcardDeckStore`] owns the decks. The selected deck is studied
//! through a [`DeckNavigator`], which borrows that deck together with the
//! cursor state the store keeps for it.

pub mod codec;
pub mod navigator;
pub mod store;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

pub use codec::DeckCodec;
pub use navigator::{DeckNavigator, NavigationState};
pub use store::FlashcardDeckStore;

/// One card: a prompt on the front, the answer on the back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flashcard {
    front: String,
    back: String,
}

impl Flashcard {
    /// Build a card, rejecting a blank side.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Result<Self, ValidationError> {
        let (front, back) = (front.into(), back.into());
        ValidationError::require_text("front", &front)?;
        ValidationError::require_text("back", &back)?;
        Ok(Self { front, back })
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }
}

/// A named, ordered sequence of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardDeck {
    name: String,
    #[serde(default)]
    cards: Vec<Flashcard>,
}

impl FlashcardDeck {
    /// Build an empty deck, rejecting a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        ValidationError::require_text("deck name", &name)?;
        Ok(Self {
            name,
            cards: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a card, rejecting a blank side.
    pub fn add_card(&mut self, front: &str, back: &str) -> Result<&Flashcard, ValidationError> {
        let card = Flashcard::new(front, back)?;
        let index = self.cards.len();
        self.cards.push(card);
        Ok(&self.cards[index])
    }

    /// In-place Fisher-Yates: for `i` from the last index down to 1, swap
    /// `i` with a uniformly drawn `j` in `0..=i`.
    pub(crate) fn shuffle_cards<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }
}

impl fmt::Display for FlashcardDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cards)", self.name, self.cards.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    #[test]
    fn card_rejects_blank_sides() {
        assert_eq!(
            Flashcard::new("", "answer"),
            Err(ValidationError::EmptyField { field: "front" })
        );
        assert_eq!(
            Flashcard::new("question", " "),
            Err(ValidationError::EmptyField { field: "back" })
        );
    }

    #[test]
    fn deck_rejects_blank_name() {
        assert_eq!(
            FlashcardDeck::new("\t"),
            Err(ValidationError::EmptyField { field: "deck name" })
        );
    }

    #[test]
    fn display_shows_card_count() {
        let mut deck = FlashcardDeck::new("Spanish").unwrap();
        deck.add_card("hola", "hello").unwrap();
        deck.add_card("adios", "goodbye").unwrap();
        assert_eq!(deck.to_string(), "Spanish (2 cards)");
    }

    #[test]
    fn shuffle_single_card_is_identity() {
        let mut deck = FlashcardDeck::new("one").unwrap();
        deck.add_card("q", "a").unwrap();
        let before = deck.clone();
        deck.shuffle_cards(&mut Mcg128Xsl64::seed_from_u64(7));
        assert_eq!(deck, before);
    }

    #[test]
    fn shuffle_is_deterministic_for_a_seed() {
        let mut a = FlashcardDeck::new("d").unwrap();
        for i in 0..10 {
            a.add_card(&format!("q{i}"), &format!("a{i}")).unwrap();
        }
        let mut b = a.clone();
        a.shuffle_cards(&mut Mcg128Xsl64::seed_from_u64(42));
        b.shuffle_cards(&mut Mcg128Xsl64::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
