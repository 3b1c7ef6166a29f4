use clap::Subcommand;

use super::deck::open_selected;
use crate::context::Context;

#[derive(Subcommand)]
pub enum CardAction {
    /// Add a card to a deck
    Add {
        /// Deck name
        deck: String,
        /// Question side
        front: String,
        /// Answer side
        back: String,
    },
    /// List the cards of a deck in their stored order
    List {
        /// Deck name
        deck: String,
    },
}

pub fn run(action: CardAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CardAction::Add { deck, front, back } => {
            let mut store = open_selected(ctx, &deck)?;
            store.navigator().add_card(&front, &back)?;
            store.save(&ctx.decks_path())?;
            println!("Card added to {deck}");
        }
        CardAction::List { deck } => {
            let store = open_selected(ctx, &deck)?;
            let cards = store.selected().map(|d| d.cards()).unwrap_or_default();
            if cards.is_empty() {
                println!("No cards.");
            }
            for (i, card) in cards.iter().enumerate() {
                println!("{:>3}. {} | {}", i + 1, card.front(), card.back());
            }
        }
    }
    Ok(())
}
