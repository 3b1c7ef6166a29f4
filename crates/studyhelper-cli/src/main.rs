use clap::{Parser, Subcommand};

mod commands;
mod context;
mod logging;

use context::Context;

#[derive(Parser)]
#[command(name = "studyhelper", version, about = "StudyHelper CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task list management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Flashcard deck management
    Deck {
        #[command(subcommand)]
        action: commands::deck::DeckAction,
    },
    /// Flashcards within a deck
    Card {
        #[command(subcommand)]
        action: commands::card::CardAction,
    },
    /// Study a deck interactively (n: next, p: previous, f: flip, s: shuffle, q: quit)
    Study {
        /// Deck name
        deck: String,
    },
    /// Pomodoro timer
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = Context::open().and_then(|ctx| {
        if let Err(e) = logging::init(&ctx.config.logging, &ctx.data_dir) {
            eprintln!("warning: logging disabled: {e}");
        }
        tracing::debug!("Using data directory {}", ctx.data_dir.display());
        match cli.command {
            Commands::Task { action } => commands::task::run(action, &ctx),
            Commands::Deck { action } => commands::deck::run(action, &ctx),
            Commands::Card { action } => commands::card::run(action, &ctx),
            Commands::Study { deck } => commands::study::run(&deck, &ctx),
            Commands::Timer { action } => commands::timer::run(action, &ctx),
            Commands::Config { action } => commands::config::run(action, &ctx),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
