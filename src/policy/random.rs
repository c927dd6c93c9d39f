//! Scripted and random policies.

use super::{play_card, Policy};
use crate::core::{Action, GameRng, PlayerId};
use crate::rules::GameView;

/// Plays the first playable card in hand order; draws if none plays.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPlayable;

impl Policy for FirstPlayable {
    fn choose_action(&self, view: &dyn GameView, player: PlayerId, rng: &mut GameRng) -> Action {
        let current = view.current_card();
        let first = view
            .player_hand(player)
            .and_then(|hand| hand.iter().position(|card| current.playable(card)));

        match first {
            Some(index) => play_card(view, player, index, rng),
            None => Action::Draw,
        }
    }

    fn name(&self) -> &'static str {
        "first-playable"
    }
}

/// Plays a uniformly random playable card; draws if none plays.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl Policy for UniformRandom {
    fn choose_action(&self, view: &dyn GameView, player: PlayerId, rng: &mut GameRng) -> Action {
        let current = view.current_card();
        let playable: Vec<usize> = view
            .player_hand(player)
            .map(|hand| {
                hand.iter()
                    .enumerate()
                    .filter(|(_, card)| current.playable(card))
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default();

        match rng.choose(&playable) {
            Some(&index) => play_card(view, player, index, rng),
            None => Action::Draw,
        }
    }

    fn name(&self) -> &'static str {
        "uniform-random"
    }
}
