//! A seat at the table and the hand it holds.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::HAND_SIZE;
use crate::core::error::{Result, UnoError};
use crate::core::player::PlayerId;

/// A player: stable id plus an ordered hand.
///
/// Hand order is deal/draw order; it only matters for addressing cards by
/// index when playing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: Vector<Card>,
}

impl Player {
    /// Seat a player with a freshly dealt hand of exactly seven cards.
    pub fn new(id: PlayerId, cards: Vec<Card>) -> Result<Self> {
        if cards.len() != HAND_SIZE {
            return Err(UnoError::InvalidPlayer(format!(
                "must be dealt {HAND_SIZE} cards, got {}",
                cards.len()
            )));
        }
        Ok(Self {
            id,
            hand: cards.into_iter().collect(),
        })
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    /// Does any card in hand play on `current_card`?
    #[must_use]
    pub fn can_play(&self, current_card: &Card) -> bool {
        self.hand.iter().any(|card| current_card.playable(card))
    }

    /// Hand indices of cards that play on `current_card`, in hand order.
    pub fn playable_indices<'a>(
        &'a self,
        current_card: &'a Card,
    ) -> impl Iterator<Item = usize> + 'a {
        self.hand
            .iter()
            .enumerate()
            .filter(move |(_, card)| current_card.playable(card))
            .map(|(i, _)| i)
    }

    pub(crate) fn take(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    pub(crate) fn receive(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }
}
