//! JSON encoding of the deck collection.
//!
//! ```text
//! [ { "name": "Spanish", "cards": [ { "front": "hola", "back": "hello" } ] } ]
//! ```
//!
//! Records are flat; no discriminator is needed. Cards keep their current
//! order, including any shuffle.

use super::FlashcardDeck;
use crate::error::{CoreError, ParseError, Result};

pub struct DeckCodec;

impl DeckCodec {
    pub fn serialize(decks: &[FlashcardDeck]) -> Result<String> {
        serde_json::to_string_pretty(decks).map_err(CoreError::Encode)
    }

    /// Decode the whole collection or nothing.
    ///
    /// Stored cards are not re-validated.
    pub fn deserialize(text: &str) -> Result<Vec<FlashcardDeck>> {
        serde_json::from_str(text).map_err(|e| ParseError::Document(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_card_order() {
        let mut deck = FlashcardDeck::new("Capitals").unwrap();
        deck.add_card("France", "Paris").unwrap();
        deck.add_card("Japan", "Tokyo").unwrap();
        deck.add_card("Peru", "Lima").unwrap();

        let json = DeckCodec::serialize(std::slice::from_ref(&deck)).unwrap();
        let back = DeckCodec::deserialize(&json).unwrap();
        let fronts: Vec<_> = back[0].cards().iter().map(|c| c.front()).collect();
        assert_eq!(fronts, ["France", "Japan", "Peru"]);
        assert_eq!(back[0].name(), "Capitals");
    }

    #[test]
    fn wire_shape_is_flat() {
        let mut deck = FlashcardDeck::new("d").unwrap();
        deck.add_card("q", "a").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&DeckCodec::serialize(&[deck]).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "name": "d", "cards": [{ "front": "q", "back": "a" }] }])
        );
    }

    #[test]
    fn missing_cards_means_empty_deck() {
        let decks = DeckCodec::deserialize(r#"[{"name":"Empty"}]"#).unwrap();
        assert!(decks[0].is_empty());
    }

    #[test]
    fn stored_blank_cards_are_accepted() {
        let decks =
            DeckCodec::deserialize(r#"[{"name":"d","cards":[{"front":"","back":""}]}]"#).unwrap();
        assert_eq!(decks[0].len(), 1);
    }

    #[test]
    fn malformed_text_is_parse_error() {
        for text in ["", "[{\"name\": 3}]", "{\"decks\": []}", "[{\"name\":\"x\",\"cards\":[{\"front\":\"q\"}]}]"] {
            let err = DeckCodec::deserialize(text).unwrap_err();
            assert!(matches!(err, CoreError::Parse(_)), "{text:?} gave {err:?}");
        }
    }
}
