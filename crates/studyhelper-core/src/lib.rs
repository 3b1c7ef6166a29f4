//! # StudyHelper Core Library
//!
//! This library provides the non-visual logic behind StudyHelper: a task list,
//! a work/break countdown and flashcard decks. A presentation layer (the
//! `studyhelper` CLI, or any GUI) drives it; the core never prompts the user,
//! never picks a storage location, and never installs a log subscriber.
//!
//! ## Architecture
//!
//! - **Tasks**: work/personal tasks with priority, sorted and searched in
//!   place, persisted as JSON with an explicit `"type"` discriminator
//! - **Timer**: a tick-driven state machine; the caller calls `tick()` once
//!   per second
//! - **Flashcards**: decks of cards, a cursor over the selected deck, and
//!   Fisher-Yates shuffling
//! - **Storage**: atomic file replacement, a per-store lock, TOML config
//!
//! ## Key Components
//!
//! - [`TaskStore`] / [`TaskCodec`]: task collection and its file format
//! - [`PomodoroTimer`]: timer state machine
//! - [`FlashcardDeckStore`] / [`DeckNavigator`] / [`DeckCodec`]: decks
//! - [`Config`]: application configuration
//!
//! State changes are reported through `tracing`; hosts attach whatever
//! subscriber they like.

pub mod error;
pub mod events;
pub mod flashcard;
pub mod storage;
pub mod task;
pub mod timer;

pub use error::{ConfigError, CoreError, ParseError, Result, SchemaError, ValidationError};
pub use events::Event;
pub use flashcard::{
    DeckCodec, DeckNavigator, Flashcard, FlashcardDeck, FlashcardDeckStore, NavigationState,
};
pub use storage::{atomic_write, Config, LoadOutcome, Shared};
pub use task::{Priority, Task, TaskCodec, TaskKind, TaskStore};
pub use timer::{Period, PomodoroTimer, TimerSettings, TimerState};
