//! Automated players.
//!
//! A `Policy` looks at a game through `GameView` and picks an `Action` for
//! the current player. `run_to_completion` drives a game with one policy per
//! seat.
//!
//! - `FirstPlayable`: plays the first playable card in hand order
//! - `UniformRandom`: plays a uniformly random playable card
//!
//! Both declare a random colour for black cards and draw when nothing plays.

mod random;

pub use random::{FirstPlayable, UniformRandom};

use tracing::{debug, trace};

use crate::cards::Color;
use crate::core::{Action, GameRng, PlayerId, Result, UnoError};
use crate::rules::{GameResult, GameView, UnoGame};

/// Strategy for choosing a player's action.
pub trait Policy: Send + Sync {
    /// Choose an action for `player`, who must be the current player.
    fn choose_action(&self, view: &dyn GameView, player: PlayerId, rng: &mut GameRng) -> Action;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;
}

/// Build the action that plays hand card `index`, picking a colour if it
/// is black.
pub(crate) fn play_card(
    view: &dyn GameView,
    player: PlayerId,
    index: usize,
    rng: &mut GameRng,
) -> Action {
    let is_black = view
        .player_hand(player)
        .and_then(|hand| hand.get(index).map(|card| card.is_black()))
        .unwrap_or(false);
    if is_black {
        let color = Color::SUITS[rng.gen_range_usize(0..Color::SUITS.len())];
        Action::play_wild(index, color)
    } else {
        Action::play(index)
    }
}

/// Play `game` until someone wins or `max_turns` actions have been taken.
///
/// `policies` holds one policy per seat. Seat `i` is driven by
/// `policies[i % policies.len()]`. Fails with `InvalidPlayer` when
/// `policies` is empty, since no seat could move.
pub fn run_to_completion(
    game: &mut UnoGame,
    policies: &[Box<dyn Policy>],
    rng: &mut GameRng,
    max_turns: u32,
) -> Result<GameResult> {
    if policies.is_empty() {
        return Err(UnoError::InvalidPlayer("no policy to drive the seats".into()));
    }

    for _ in 0..max_turns {
        if let Some(result) = game.result() {
            return Ok(result);
        }
        let player = game.current_player();
        let policy = &policies[player.index() % policies.len()];
        let action = policy.choose_action(&*game, player, rng);
        trace!(%player, policy = policy.name(), ?action, "policy chose");
        game.apply(player, &action)?;
    }

    Ok(game.result().unwrap_or_else(|| {
        debug!(max_turns, "turn limit reached without a winner");
        GameResult::TurnLimit
    }))
}
