//! Engine errors.
//!
//! Every error is a rejected precondition: when a constructor or `play`
//! returns one of these, nothing has been mutated.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;

/// Errors returned by card, player and game operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnoError {
    /// Colour is unknown, or black where only the four suits are allowed.
    #[error("invalid color: must be red, yellow, green or blue")]
    InvalidColor,

    /// Rank is unknown, or does not belong with the card's colour.
    #[error("invalid card type")]
    InvalidCardType,

    /// Bad game size, bad player construction or unknown player index.
    #[error("invalid player: {0}")]
    InvalidPlayer(String),

    /// A valid player tried to act out of turn.
    #[error("invalid player: {player} acted but it is {current}'s turn")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("invalid card index {index}: hand holds {hand_size} cards")]
    InvalidCardIndex { index: usize, hand_size: usize },

    #[error("invalid card: {card} not playable on {current}")]
    CardNotPlayable { card: Card, current: Card },

    #[error("game is over")]
    GameOver,
}

impl UnoError {
    /// True for errors that blame the acting player rather than the move.
    #[must_use]
    pub fn is_player_error(&self) -> bool {
        matches!(self, UnoError::InvalidPlayer(_) | UnoError::NotYourTurn { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, UnoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Rank};

    #[test]
    fn test_player_error_classification() {
        assert!(UnoError::InvalidPlayer("index out of range".into()).is_player_error());
        assert!(UnoError::NotYourTurn {
            player: PlayerId::new(1),
            current: PlayerId::new(0),
        }
        .is_player_error());
        assert!(!UnoError::GameOver.is_player_error());
        assert!(!UnoError::InvalidColor.is_player_error());
    }

    #[test]
    fn test_error_messages() {
        let err = UnoError::NotYourTurn {
            player: PlayerId::new(2),
            current: PlayerId::new(0),
        };
        assert_eq!(
            err.to_string(),
            "invalid player: Player 2 acted but it is Player 0's turn"
        );

        let err = UnoError::CardNotPlayable {
            card: Card::new(Color::Green, Rank::Number(2)).unwrap(),
            current: Card::new(Color::Red, Rank::Number(1)).unwrap(),
        };
        assert_eq!(err.to_string(), "invalid card: G2 not playable on R1");
    }
}
