//! Cards and the shared deck.
//!
//! - `Card`: colour + rank, plus the declared colour of a played wild
//! - `Deck`: draw pile and discard pile, with the current card on top

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank};
pub use deck::{dealing_stack, full_set, Deck, DECK_SIZE};
