//! Interactive study session over one deck.

use std::io::{self, BufRead, Write};

use studyhelper_core::{DeckNavigator, FlashcardDeckStore};

use super::deck::open_selected;
use crate::context::Context;

const HELP: &str = "n: next  p: previous  f: flip  s: shuffle  q: quit";

pub fn run(deck: &str, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_selected(ctx, deck)?;
    let stdin = io::stdin();
    let shuffled = session(&mut store, stdin.lock(), io::stdout().lock())?;
    if shuffled {
        store.save(&ctx.decks_path())?;
    }
    Ok(())
}

fn show(nav: &DeckNavigator<'_>, out: &mut impl Write) -> io::Result<()> {
    match (nav.position(), nav.current_face()) {
        (Some((cursor, count)), Some(face)) => {
            let side = if nav.facing_front() { "front" } else { "back" };
            writeln!(out, "[{}/{count}] ({side}) {face}", cursor + 1)
        }
        _ => writeln!(out, "(deck is empty)"),
    }
}

/// Drive the selected deck from line commands until `q` or end of input.
/// Returns whether the deck order changed.
fn session(
    store: &mut FlashcardDeckStore,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<bool> {
    let mut nav = store.navigator();
    let mut shuffled = false;
    writeln!(out, "{HELP}")?;
    show(&nav, &mut out)?;

    for line in input.lines() {
        match line?.trim() {
            "n" => nav.next(),
            "p" => nav.prev(),
            "f" => nav.flip(),
            "s" => {
                let before = nav.deck().map(|d| d.cards().to_vec());
                nav.shuffle();
                shuffled |= nav.deck().map(|d| d.cards().to_vec()) != before;
            }
            "q" => break,
            "" => continue,
            other => {
                writeln!(out, "unknown command: {other} ({HELP})")?;
                continue;
            }
        }
        show(&nav, &mut out)?;
    }
    Ok(shuffled)
}
