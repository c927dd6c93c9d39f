//! Game rules: players and the engine that enforces legality.
//!
//! `UnoGame` is the single mutator of deck, hands and turn order.
//! Everything else observes it through `GameView`.

pub mod game;
pub mod player;

pub use game::{GameResult, GameView, UnoGame};
pub use player::Player;
