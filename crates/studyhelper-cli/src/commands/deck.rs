//! Flashcard deck commands.

use clap::Subcommand;
use studyhelper_core::{DeckCodec, FlashcardDeck, FlashcardDeckStore};

use crate::context::Context;

#[derive(Subcommand)]
pub enum DeckAction {
    /// Create an empty deck
    Add {
        /// Deck name
        name: String,
    },
    /// List decks
    List {
        /// Only show decks whose name contains this text
        #[arg(long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Shuffle a deck's cards and persist the new order
    Shuffle {
        /// Deck name
        name: String,
    },
}

/// Load the deck file, treating a missing file as an empty collection.
pub(crate) fn open_store(ctx: &Context) -> Result<FlashcardDeckStore, Box<dyn std::error::Error>> {
    let mut store = FlashcardDeckStore::new();
    store.load(&ctx.decks_path())?;
    Ok(store)
}

/// Load the deck file and select the deck named `name`.
pub(crate) fn open_selected(
    ctx: &Context,
    name: &str,
) -> Result<FlashcardDeckStore, Box<dyn std::error::Error>> {
    let mut store = open_store(ctx)?;
    let index = store
        .find(name)
        .ok_or_else(|| format!("deck not found: {name}"))?;
    store.select_deck(Some(index))?;
    Ok(store)
}

pub fn run(action: DeckAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DeckAction::Add { name } => {
            let mut store = open_store(ctx)?;
            let added = store.add_deck(&name)?.to_string();
            store.save(&ctx.decks_path())?;
            println!("Deck added: {added}");
        }
        DeckAction::List { search, json } => {
            let store = open_store(ctx)?;
            let shown: Vec<FlashcardDeck> = store
                .search(search.as_deref().unwrap_or(""))
                .into_iter()
                .cloned()
                .collect();

            if json {
                println!("{}", DeckCodec::serialize(&shown)?);
            } else if shown.is_empty() {
                println!("No decks.");
            } else {
                for deck in &shown {
                    println!("{deck}");
                }
            }
        }
        DeckAction::Shuffle { name } => {
            let mut store = open_selected(ctx, &name)?;
            store.navigator().shuffle();
            store.save(&ctx.decks_path())?;
            println!("Deck shuffled: {name}");
        }
    }
    Ok(())
}
