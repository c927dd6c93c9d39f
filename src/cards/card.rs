//! Card identity: colour, rank and the colour a played wild takes on.
//!
//! ## Playability
//!
//! `current.playable(&candidate)` answers "may `candidate` be laid on
//! `current`?". It holds when the candidate matches the current card's
//! effective colour or its rank, or when the candidate is black.
//!
//! ```
//! use uno_engine::cards::{Card, Color, Rank};
//!
//! let top = Card::new(Color::Red, Rank::Number(1)).unwrap();
//! assert!(top.playable(&Card::new(Color::Red, Rank::Number(2)).unwrap()));
//! assert!(top.playable(&Card::new(Color::Green, Rank::Number(1)).unwrap()));
//! assert!(!top.playable(&Card::new(Color::Green, Rank::Number(2)).unwrap()));
//! assert!(top.playable(&Card::new(Color::Black, Rank::Wild).unwrap()));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::core::error::{Result, UnoError};

/// Card colour. `Black` is reserved for wild cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Black,
}

impl Color {
    /// The four colours a wild card may be declared as.
    pub const SUITS: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }

    /// Single-letter tag used by `Display` for cards.
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Black => 'K',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Black => "black",
        };
        f.write_str(name)
    }
}

impl FromStr for Color {
    type Err = UnoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "black" => Ok(Color::Black),
            _ => Err(UnoError::InvalidColor),
        }
    }
}

/// Card rank.
///
/// Numbers, `Skip`, `Reverse` and `DrawTwo` only exist on coloured cards;
/// `Wild` and `WildDrawFour` only on black ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "RankRepr")]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// Wire shape of `Rank`, checked before it becomes one.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RankRepr {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl TryFrom<RankRepr> for Rank {
    type Error = UnoError;

    fn try_from(repr: RankRepr) -> Result<Self> {
        Ok(match repr {
            RankRepr::Number(n) if n <= 9 => Rank::Number(n),
            RankRepr::Number(_) => return Err(UnoError::InvalidCardType),
            RankRepr::Skip => Rank::Skip,
            RankRepr::Reverse => Rank::Reverse,
            RankRepr::DrawTwo => Rank::DrawTwo,
            RankRepr::Wild => Rank::Wild,
            RankRepr::WildDrawFour => Rank::WildDrawFour,
        })
    }
}

impl Rank {
    /// Ranks of one colour in deck order: 0-9, 1-9, then the action cards twice.
    #[must_use]
    pub fn colored_set() -> Vec<Rank> {
        let mut ranks: Vec<Rank> = (0..=9).chain(1..=9).map(Rank::Number).collect();
        for _ in 0..2 {
            ranks.extend([Rank::Skip, Rank::Reverse, Rank::DrawTwo]);
        }
        ranks
    }

    /// The ranks a black card can carry.
    pub const BLACK: [Rank; 2] = [Rank::Wild, Rank::WildDrawFour];

    /// Cards a player is forced to pick up when this rank is played.
    #[must_use]
    pub const fn penalty(self) -> usize {
        match self {
            Rank::DrawTwo => 2,
            Rank::WildDrawFour => 4,
            _ => 0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{n}"),
            Rank::Skip => f.write_str("S"),
            Rank::Reverse => f.write_str("R"),
            Rank::DrawTwo => f.write_str("+2"),
            Rank::Wild => f.write_str("W"),
            Rank::WildDrawFour => f.write_str("+4"),
        }
    }
}

impl FromStr for Rank {
    type Err = UnoError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "skip" => Ok(Rank::Skip),
            "reverse" => Ok(Rank::Reverse),
            "+2" | "draw-two" | "draw_two" => Ok(Rank::DrawTwo),
            "wild" | "wildcard" => Ok(Rank::Wild),
            "+4" | "wild-draw-four" | "wild_draw_four" => Ok(Rank::WildDrawFour),
            digit => match digit.parse::<u8>() {
                Ok(n) if n <= 9 => Ok(Rank::Number(n)),
                _ => Err(UnoError::InvalidCardType),
            },
        }
    }
}

/// A single Uno card.
///
/// Equality and hashing consider only colour and rank; the declared colour
/// of a played wild is transient and ignored. Deserializing goes through
/// `Card::new` and `set_color_override`, so the same pairings are rejected.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "CardRepr")]
pub struct Card {
    color: Color,
    rank: Rank,
    #[serde(default)]
    color_override: Option<Color>,
}

#[derive(Deserialize)]
struct CardRepr {
    color: Color,
    rank: Rank,
    #[serde(default)]
    color_override: Option<Color>,
}

impl TryFrom<CardRepr> for Card {
    type Error = UnoError;

    fn try_from(repr: CardRepr) -> Result<Self> {
        let mut card = Card::new(repr.color, repr.rank)?;
        card.set_color_override(repr.color_override)?;
        Ok(card)
    }
}

impl Card {
    /// Create a card, rejecting ranks that do not belong with `color`.
    pub fn new(color: Color, rank: Rank) -> Result<Self> {
        let valid = match rank {
            Rank::Number(n) => !color.is_black() && n <= 9,
            Rank::Skip | Rank::Reverse | Rank::DrawTwo => !color.is_black(),
            Rank::Wild | Rank::WildDrawFour => color.is_black(),
        };
        if !valid {
            return Err(UnoError::InvalidCardType);
        }
        Ok(Self {
            color,
            rank,
            color_override: None,
        })
    }

    /// Build a card whose colour/rank pairing the caller has already checked.
    pub(super) const fn from_valid_parts(color: Color, rank: Rank) -> Self {
        Self {
            color,
            rank,
            color_override: None,
        }
    }

    /// Parse a card from colour and rank names, e.g. `("red", "+2")`.
    pub fn parse(color: &str, rank: &str) -> Result<Self> {
        Self::new(color.parse()?, rank.parse()?)
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn is_black(&self) -> bool {
        self.color.is_black()
    }

    #[must_use]
    pub const fn color_override(&self) -> Option<Color> {
        self.color_override
    }

    /// Colour the card counts as: the declared colour if set, else its own.
    #[must_use]
    pub fn effective_color(&self) -> Color {
        self.color_override.unwrap_or(self.color)
    }

    /// Declare (or clear) the colour a black card stands for.
    ///
    /// Clearing is always allowed. Declaring black fails with
    /// `InvalidColor`; declaring on a coloured card fails with
    /// `InvalidCardType`.
    pub fn set_color_override(&mut self, color: Option<Color>) -> Result<()> {
        match color {
            None => {
                self.color_override = None;
                Ok(())
            }
            Some(c) if c.is_black() => Err(UnoError::InvalidColor),
            Some(_) if !self.is_black() => Err(UnoError::InvalidCardType),
            Some(c) => {
                self.color_override = Some(c);
                Ok(())
            }
        }
    }

    pub fn clear_override(&mut self) {
        self.color_override = None;
    }

    /// Can `candidate` be legally played while `self` is the current card?
    #[must_use]
    pub fn playable(&self, candidate: &Card) -> bool {
        self.effective_color() == candidate.color
            || self.rank == candidate.rank
            || candidate.is_black()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    /// Short form such as `R1`, `GS`, `B+2`, `KW`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.short(), self.rank)
    }
}
