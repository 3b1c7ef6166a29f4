pub mod card;
pub mod config;
pub mod deck;
pub mod study;
pub mod task;
pub mod timer;
