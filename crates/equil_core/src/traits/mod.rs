//! Traits shared by deck-rendering parameter families.
//!
//! - `parameter`: [`DeckParameter`], [`DeckSection`], [`DeckOutput`], [`Dims`]

pub mod parameter;

pub use parameter::{DeckOutput, DeckParameter, DeckSection, Dims};
