//! # uno-engine
//!
//! A turn-based Uno engine: a 108-card deck, player hands, a reversible
//! turn order and the special-card rules (skip, reverse, draw two, wild,
//! wild draw four).
//!
//! ## Design Principles
//!
//! 1. **Single Mutator**: `UnoGame::play` is the only way state changes.
//!    It validates the whole move before touching anything, so a rejected
//!    move leaves the game exactly as it was.
//!
//! 2. **Reproducible**: every random choice comes from a seeded `GameRng`.
//!    An unshuffled deck deals a fixed layout for tests.
//!
//! 3. **Cheap Snapshots**: hands and piles are `im` vectors, so cloning a
//!    game (for lookahead or rendering) is O(1).
//!
//! ## Example
//!
//! ```
//! use uno_engine::core::PlayerId;
//! use uno_engine::rules::{GameView, UnoGame};
//!
//! let mut game = UnoGame::with_players(3, false).unwrap();
//! let first = game.current_player();
//! assert_eq!(first, PlayerId::new(0));
//!
//! // Nothing to play? Draw one card and pass.
//! game.play(first, None, None).unwrap();
//! assert_eq!(game.current_player(), PlayerId::new(1));
//! ```
//!
//! ## Modules
//!
//! - `core`: player ids, turn cycle, actions, RNG, configuration, errors
//! - `cards`: cards and the deck
//! - `rules`: players and the game engine
//! - `session`: a game shared across threads behind one lock
//! - `policy`: automated players and a driver loop

pub mod cards;
pub mod core;
pub mod policy;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Direction, GameRng, PlayerId, PlayerMap, Result, TurnCycle, UnoConfig,
    UnoError,
};

pub use crate::cards::{Card, Color, Deck, Rank, DECK_SIZE};

pub use crate::rules::{GameResult, GameView, Player, UnoGame};

pub use crate::session::SharedGame;

pub use crate::policy::{run_to_completion, FirstPlayable, Policy, UniformRandom};
