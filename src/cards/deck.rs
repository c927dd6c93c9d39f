//! The shared deck: a draw pile and a discard pile whose top is the current card.
//!
//! ## Layout
//!
//! A fresh deck is built as a *stack* of 108 cards whose top is the end of
//! the `Vec`. Hands are dealt by popping from that top; the next card up
//! becomes the current card, and what is left underneath becomes the draw
//! pile. Draws take from the bottom of the stack (the front of the draw
//! pile), never from the discard side.
//!
//! When the draw pile runs dry, every discarded card except the current one
//! is shuffled back in.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use super::card::{Card, Color, Rank};
use crate::core::rng::GameRng;

/// Total number of cards in a full deck.
pub const DECK_SIZE: usize = 108;

/// Build the full 108-card set in construction order.
///
/// Each colour contributes 0-9, 1-9 and two each of skip, reverse and
/// draw-two; then four wild and four wild-draw-four cards follow.
#[must_use]
pub fn full_set() -> Vec<Card> {
    let colored = Rank::colored_set();
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for color in Color::SUITS {
        cards.extend(
            colored
                .iter()
                .map(|&rank| Card::from_valid_parts(color, rank)),
        );
    }
    for _ in 0..4 {
        cards.extend(
            Rank::BLACK
                .iter()
                .map(|&rank| Card::from_valid_parts(Color::Black, rank)),
        );
    }

    cards
}

/// Build the dealing stack (top = last element).
///
/// Shuffled uniformly when `shuffle` is set; otherwise the construction
/// order reversed, so deals are reproducible without a seed.
#[must_use]
pub fn dealing_stack(shuffle: bool, rng: &mut GameRng) -> Vec<Card> {
    let mut cards = full_set();
    if shuffle {
        rng.shuffle(&mut cards);
    } else {
        cards.reverse();
    }
    cards
}

/// Draw pile plus discard pile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    /// Cards still to be drawn; the front is drawn first.
    draw_pile: Vector<Card>,

    /// Played cards beneath the current one, oldest first.
    discard: Vector<Card>,

    /// The current card.
    top: Card,
}

impl Deck {
    /// Turn what remains of a dealing stack into a deck.
    ///
    /// The stack's last card becomes the current card. Returns `None` for an
    /// empty stack.
    #[must_use]
    pub fn from_stack(mut stack: Vec<Card>) -> Option<Self> {
        let top = stack.pop()?;
        Some(Self {
            draw_pile: stack.into_iter().collect(),
            discard: Vector::new(),
            top,
        })
    }

    /// The current card.
    #[must_use]
    pub fn top(&self) -> &Card {
        &self.top
    }

    /// Mutable access to the current card (to declare a wild's colour).
    pub fn top_mut(&mut self) -> &mut Card {
        &mut self.top
    }

    /// Total cards held by the deck, current card included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard.len() + 1
    }

    /// A deck always holds at least its current card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Played cards, current card included.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len() + 1
    }

    /// Lay `card` on top; the previous top drops into the discard pile.
    pub fn push(&mut self, card: Card) {
        let mut buried = std::mem::replace(&mut self.top, card);
        buried.clear_override();
        self.discard.push_back(buried);
    }

    /// Draw one card, recycling the discard pile first if needed.
    ///
    /// Returns `None` only when every other card is held in a hand.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.draw_pile.is_empty() {
            self.recycle(rng);
        }
        self.draw_pile.pop_front()
    }

    /// Draw up to `n` cards.
    pub fn draw_n(&mut self, n: usize, rng: &mut GameRng) -> SmallVec<[Card; 4]> {
        let mut drawn = SmallVec::new();
        for _ in 0..n {
            match self.draw(rng) {
                Some(card) => drawn.push(card),
                None => {
                    warn!(requested = n, drawn = drawn.len(), "deck exhausted");
                    break;
                }
            }
        }
        drawn
    }

    /// Shuffle the discard pile (minus the current card) under the draw pile.
    ///
    /// Returns the number of cards recycled.
    pub fn recycle(&mut self, rng: &mut GameRng) -> usize {
        let mut cards: Vec<Card> = std::mem::take(&mut self.discard).into_iter().collect();
        if cards.is_empty() {
            return 0;
        }
        for card in &mut cards {
            card.clear_override();
        }
        rng.shuffle(&mut cards);

        let count = cards.len();
        self.draw_pile.extend(cards);
        debug!(recycled = count, draw_pile = self.draw_pile.len(), "recycled discard pile");
        count
    }
}
