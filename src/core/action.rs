//! Player actions and the action history.
//!
//! A turn is either a draw or a play of one hand card (with a declared colour
//! when the card is black). `ActionRecord` stamps an action with who took it
//! and on which turn.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Color;

/// A complete player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Pick up one card and pass.
    Draw,
    /// Play the card at `card_index` of the hand.
    Play {
        card_index: usize,
        new_color: Option<Color>,
    },
}

impl Action {
    /// Play a coloured card.
    #[must_use]
    pub const fn play(card_index: usize) -> Self {
        Action::Play {
            card_index,
            new_color: None,
        }
    }

    /// Play a black card, declaring `color`.
    #[must_use]
    pub const fn play_wild(card_index: usize, color: Color) -> Self {
        Action::Play {
            card_index,
            new_color: Some(color),
        }
    }

    /// The hand index this action plays, if any.
    #[must_use]
    pub const fn card_index(&self) -> Option<usize> {
        match self {
            Action::Draw => None,
            Action::Play { card_index, .. } => Some(*card_index),
        }
    }

    #[must_use]
    pub const fn new_color(&self) -> Option<Color> {
        match self {
            Action::Draw => None,
            Action::Play { new_color, .. } => *new_color,
        }
    }
}

/// A recorded action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
