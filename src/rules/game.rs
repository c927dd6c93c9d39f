//! The Uno game engine.
//!
//! `UnoGame` owns the deck, the players and the turn cycle. `play` is the
//! only mutator: it validates the whole move first and then applies the
//! card's effects in a fixed order, so a rejected move changes nothing.
//!
//! ## Effect order
//!
//! 1. The card leaves the hand and becomes the current card.
//! 2. Its rank takes effect:
//!    - wild: the declared colour is set
//!    - wild draw four: colour set, turn skips ahead, skipped player draws 4
//!    - reverse: direction flips
//!    - skip: turn skips ahead
//!    - draw two: turn skips ahead, skipped player draws 2
//! 3. If the hand is now empty the player wins and the turn stays put.
//! 4. Otherwise the turn passes on once.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::player::Player;
use crate::cards::{dealing_stack, Card, Color, Deck, Rank};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::{UnoConfig, HAND_SIZE};
use crate::core::cycle::{Direction, TurnCycle};
use crate::core::error::{Result, UnoError};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;

/// Outcome of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player emptied their hand.
    Winner(PlayerId),
    /// A driver gave up after its turn limit.
    TurnLimit,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Read-only view of a game, shared by the engine and its wrappers.
///
/// Drivers and renderers only need this surface plus `play`.
pub trait GameView {
    /// Snapshot of the current card, declared colour included.
    fn current_card(&self) -> Card;

    fn current_player(&self) -> PlayerId;

    /// True until someone has won.
    fn is_active(&self) -> bool;

    fn winner(&self) -> Option<PlayerId>;

    fn player_count(&self) -> usize;

    /// A player's hand in hand order, or `None` for an unknown seat.
    fn player_hand(&self, player: PlayerId) -> Option<Vector<Card>>;
}

/// A single game of Uno.
#[derive(Clone, Debug)]
pub struct UnoGame {
    config: UnoConfig,
    deck: Deck,
    players: PlayerMap<Player>,
    cycle: TurnCycle<PlayerId>,
    winner: Option<PlayerId>,
    rng: GameRng,
    turn_number: u32,
    history: Vector<ActionRecord>,
}

impl UnoGame {
    /// Deal a new game.
    ///
    /// Fails with `InvalidPlayer` unless 2-15 players are requested.
    pub fn new(config: UnoConfig) -> Result<Self> {
        config.validate()?;

        let seed_rng = GameRng::new(config.seed);
        let mut rng = seed_rng.for_context("deck");
        let mut stack = dealing_stack(config.shuffle, &mut rng);

        let mut hands = Vec::with_capacity(config.player_count);
        for id in PlayerId::all(config.player_count) {
            let split = stack.len().checked_sub(HAND_SIZE).ok_or_else(|| {
                UnoError::InvalidPlayer("not enough cards to deal every player".into())
            })?;
            let mut hand = stack.split_off(split);
            // Dealt top first.
            hand.reverse();
            hands.push(Player::new(id, hand)?);
        }
        let players = PlayerMap::new(config.player_count, |id| hands[id.index()].clone());

        let mut deck = Deck::from_stack(stack).ok_or_else(|| {
            UnoError::InvalidPlayer("no card left to start the discard pile".into())
        })?;
        if deck.top().is_black() {
            let mut starter = seed_rng.for_context("starter");
            let color = Color::SUITS[starter.gen_range_usize(0..Color::SUITS.len())];
            deck.top_mut().set_color_override(Some(color))?;
            debug!(card = %deck.top(), %color, "starting card is black; colour picked at random");
        }

        let mut cycle = TurnCycle::new(players.player_ids().collect()).ok_or_else(|| {
            UnoError::InvalidPlayer("game must have at least one player".into())
        })?;
        cycle.advance();

        debug!(
            players = config.player_count,
            shuffled = config.shuffle,
            seed = config.seed,
            current_card = %deck.top(),
            "dealt new game"
        );

        Ok(Self {
            config,
            deck,
            players,
            cycle,
            winner: None,
            rng,
            turn_number: 1,
            history: Vector::new(),
        })
    }

    /// Deal a game for `player_count` players with the default seed.
    pub fn with_players(player_count: usize, shuffle: bool) -> Result<Self> {
        Self::new(UnoConfig::new(player_count).with_shuffle(shuffle))
    }

    #[must_use]
    pub fn config(&self) -> &UnoConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn hand_sizes(&self) -> PlayerMap<usize> {
        self.players.map(|_, p| p.hand_len())
    }

    /// Cards held by the deck, current card included.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.deck.draw_pile_len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.deck.discard_len()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.cycle.direction()
    }

    /// Turn number of the next action (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every successful action so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.winner.map(GameResult::Winner)
    }

    /// All actions `player` may take right now.
    ///
    /// Black cards appear once per declarable colour. Drawing is always
    /// allowed on your turn. Empty when it is not `player`'s turn or the game
    /// is over.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if !self.is_active() || player != self.current_player() {
            return Vec::new();
        }
        let Some(seat) = self.players.get(player) else {
            return Vec::new();
        };

        let top = self.deck.top();
        let mut actions = Vec::new();
        for index in seat.playable_indices(top) {
            if seat.hand()[index].is_black() {
                actions.extend(Color::SUITS.iter().map(|&c| Action::play_wild(index, c)));
            } else {
                actions.push(Action::play(index));
            }
        }
        actions.push(Action::Draw);
        actions
    }

    /// Apply an `Action` for `player`.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<()> {
        self.play(player, action.card_index(), action.new_color())
    }

    /// Take a turn: draw (`card_index == None`) or play a card from hand.
    ///
    /// `new_color` is required when the card is black and ignored otherwise.
    pub fn play(
        &mut self,
        player: PlayerId,
        card_index: Option<usize>,
        new_color: Option<Color>,
    ) -> Result<()> {
        let seat = self.players.get(player).ok_or_else(|| {
            UnoError::InvalidPlayer(format!(
                "index {} out of range for {} players",
                player.0,
                self.players.player_count()
            ))
        })?;
        if self.winner.is_some() {
            return Err(UnoError::GameOver);
        }
        let current = self.current_player();
        if player != current {
            return Err(UnoError::NotYourTurn { player, current });
        }

        let Some(index) = card_index else {
            self.draw_turn(player);
            return Ok(());
        };

        let mut card = seat
            .hand()
            .get(index)
            .copied()
            .ok_or(UnoError::InvalidCardIndex {
                index,
                hand_size: seat.hand_len(),
            })?;
        let top = *self.deck.top();
        if !top.playable(&card) {
            return Err(UnoError::CardNotPlayable { card, current: top });
        }
        if card.is_black() {
            let color = new_color
                .filter(|c| !c.is_black())
                .ok_or(UnoError::InvalidColor)?;
            card.set_color_override(Some(color))?;
        }

        // Validation done; nothing below can fail.
        self.seat_mut(player).take(index);
        self.deck.push(card);
        trace!(%player, %card, "card played");

        match card.rank() {
            Rank::WildDrawFour => {
                let target = self.next_player();
                self.penalize(target, Rank::WildDrawFour.penalty());
            }
            Rank::Wild | Rank::Number(_) => {}
            Rank::Reverse => {
                self.cycle.reverse();
                debug!(direction = ?self.cycle.direction(), "direction reversed");
            }
            Rank::Skip => {
                let skipped = self.next_player();
                trace!(%skipped, "turn skipped");
            }
            Rank::DrawTwo => {
                let target = self.next_player();
                self.penalize(target, Rank::DrawTwo.penalty());
            }
        }

        let action = Action::Play {
            card_index: index,
            new_color: card.color_override(),
        };
        self.record(player, action);

        if self.players[player].has_won() {
            self.winner = Some(player);
            debug!(winner = %player, turn = self.turn_number - 1, "game won");
            return Ok(());
        }

        self.next_player();
        Ok(())
    }

    /// Pick up one card and pass the turn.
    fn draw_turn(&mut self, player: PlayerId) {
        let drawn = self.deck.draw(&mut self.rng);
        trace!(%player, card = ?drawn.map(|c| c.to_string()), "drew a card");
        self.seat_mut(player).receive(drawn);
        self.record(player, Action::Draw);
        self.next_player();
    }

    /// Force `target` to pick up `count` cards.
    fn penalize(&mut self, target: PlayerId, count: usize) {
        let drawn = self.deck.draw_n(count, &mut self.rng);
        debug!(%target, requested = count, drawn = drawn.len(), "penalty draw");
        self.seat_mut(target).receive(drawn);
    }

    /// Advance the cycle and return the new current player.
    fn next_player(&mut self) -> PlayerId {
        *self.cycle.advance()
    }

    fn seat_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number));
        self.turn_number += 1;
    }
}

impl GameView for UnoGame {
    fn current_card(&self) -> Card {
        *self.deck.top()
    }

    fn current_player(&self) -> PlayerId {
        *self.cycle.current()
    }

    fn is_active(&self) -> bool {
        self.winner.is_none()
    }

    fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    fn player_count(&self) -> usize {
        self.players.player_count()
    }

    fn player_hand(&self, player: PlayerId) -> Option<Vector<Card>> {
        self.players.get(player).map(|p| p.hand().clone())
    }
}
