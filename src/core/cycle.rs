//! Reversible turn order.
//!
//! `TurnCycle` walks a fixed sequence of seats round and round. Reversing
//! flips the walking direction in O(1) without moving the current position
//! or rebuilding the sequence.
//!
//! ```
//! use uno_engine::core::TurnCycle;
//!
//! let mut cycle = TurnCycle::new(vec![0, 1, 2]).unwrap();
//! assert_eq!(*cycle.advance(), 0);
//! assert_eq!(*cycle.advance(), 1);
//! cycle.reverse();
//! assert_eq!(*cycle.advance(), 0);
//! assert_eq!(*cycle.advance(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Walking direction of a `TurnCycle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Bidirectional circular iterator over seats.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnCycle<T> {
    items: Vec<T>,
    /// `None` until the first `advance`.
    pos: Option<usize>,
    direction: Direction,
}

impl<T> TurnCycle<T> {
    /// Create a cycle over `items`. Returns `None` if `items` is empty.
    #[must_use]
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            pos: None,
            direction: Direction::Forward,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: empty cycles cannot be built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Where the first `advance` lands: the first seat, or the last one if
    /// the cycle was reversed before starting.
    fn start_index(&self) -> usize {
        match self.direction {
            Direction::Forward => 0,
            Direction::Backward => self.items.len() - 1,
        }
    }

    /// Position of the current seat.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos.unwrap_or_else(|| self.start_index())
    }

    /// The current seat.
    ///
    /// Before the first `advance` this peeks at the seat the first
    /// `advance` will return.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.items[self.position()]
    }

    /// Step one seat in the current direction and return it.
    pub fn advance(&mut self) -> &T {
        let len = self.items.len();
        let next = match self.pos {
            None => self.start_index(),
            Some(pos) => match self.direction {
                Direction::Forward => (pos + 1) % len,
                Direction::Backward => (pos + len - 1) % len,
            },
        };
        self.pos = Some(next);
        &self.items[next]
    }

    /// Flip the walking direction. Does not move.
    pub fn reverse(&mut self) {
        self.direction = self.direction.flipped();
    }
}
