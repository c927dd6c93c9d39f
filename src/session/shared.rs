//! A game shared between a driver thread and readers.
//!
//! All access goes through one lock per game, so a reader never sees a move
//! half applied and at most one `play` runs at a time.

use im::Vector;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::cards::{Card, Color};
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::rules::{GameView, UnoGame};

/// Cloneable handle to a game behind a mutex.
#[derive(Clone, Debug)]
pub struct SharedGame {
    inner: Arc<Mutex<UnoGame>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(game: UnoGame) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Take a turn under the lock.
    pub fn play(
        &self,
        player: PlayerId,
        card_index: Option<usize>,
        new_color: Option<Color>,
    ) -> Result<()> {
        self.inner.lock().play(player, card_index, new_color)
    }

    /// Run `f` against a consistent view of the game.
    pub fn read<R>(&self, f: impl FnOnce(&UnoGame) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run `f` with exclusive access, e.g. to let a policy choose and play
    /// in one critical section.
    pub fn write<R>(&self, f: impl FnOnce(&mut UnoGame) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Point-in-time copy of the whole game.
    #[must_use]
    pub fn snapshot(&self) -> UnoGame {
        self.inner.lock().clone()
    }
}

impl GameView for SharedGame {
    fn current_card(&self) -> Card {
        self.read(|game| game.current_card())
    }

    fn current_player(&self) -> PlayerId {
        self.read(|game| game.current_player())
    }

    fn is_active(&self) -> bool {
        self.read(|game| game.is_active())
    }

    fn winner(&self) -> Option<PlayerId> {
        self.read(|game| game.winner())
    }

    fn player_count(&self) -> usize {
        self.read(|game| game.player_count())
    }

    fn player_hand(&self, player: PlayerId) -> Option<Vector<Card>> {
        self.read(|game| game.player_hand(player))
    }
}
