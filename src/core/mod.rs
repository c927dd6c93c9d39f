//! Core engine types: players, turn order, actions, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod cycle;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{UnoConfig, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
pub use cycle::{Direction, TurnCycle};
pub use error::{Result, UnoError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
