//! Rule scenarios on the unshuffled five-player deal.
//!
//! With the fixed deck order the opening hands are:
//!
//! | seat | hand                         |
//! |------|------------------------------|
//! | 0    | R0 R1 R2 R3 R4 R5 R6         |
//! | 1    | R7 R8 R9 R1 R2 R3 R4         |
//! | 2    | R5 R6 R7 R8 R9 RS RR         |
//! | 3    | R+2 RS RR R+2 Y0 Y1 Y2       |
//! | 4    | Y3 Y4 Y5 Y6 Y7 Y8 Y9         |
//!
//! The current card is Y1 and the draw pile starts with the eight black
//! cards (K+4 first, alternating with KW).

use uno_engine::{
    Card, Color, Direction, GameView, PlayerId, UnoConfig, UnoError, UnoGame, DECK_SIZE,
};

fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

fn card(color: &str, rank: &str) -> Card {
    Card::parse(color, rank).unwrap()
}

fn fixture() -> UnoGame {
    UnoGame::with_players(5, false).unwrap()
}

fn hand_len(game: &UnoGame, id: u8) -> usize {
    game.player_hand(p(id)).unwrap().len()
}

fn total_cards(game: &UnoGame) -> usize {
    game.deck_len() + game.hand_sizes().values().sum::<usize>()
}

fn play(game: &mut UnoGame, id: u8, index: usize) {
    game.play(p(id), Some(index), None).unwrap();
    assert_eq!(total_cards(game), DECK_SIZE);
}

/// Test the fixed deal matches the documented layout.
#[test]
fn test_fixture_layout() {
    let game = fixture();

    assert_eq!(game.current_player(), p(0));
    assert_eq!(game.current_card(), card("yellow", "1"));
    assert_eq!(game.winner(), None);
    assert_eq!(game.deck_len(), DECK_SIZE - 35);

    let hand0: Vec<Card> = game.player_hand(p(0)).unwrap().into_iter().collect();
    let expected: Vec<Card> = (0..7).map(|n| card("red", &n.to_string())).collect();
    assert_eq!(hand0, expected);

    let hand3 = game.player_hand(p(3)).unwrap();
    assert_eq!(hand3[0], card("red", "+2"));
    assert_eq!(hand3[6], card("yellow", "2"));

    assert!(game.player(p(0)).unwrap().can_play(&game.current_card()));
}

/// Test rejected moves leave the game untouched.
#[test]
fn test_rejections_do_not_mutate() {
    let mut game = fixture();
    let before_hands = game.hand_sizes();
    let before_card = game.current_card();

    assert!(matches!(
        game.play(p(1), Some(0), None),
        Err(UnoError::NotYourTurn { player, current }) if player == p(1) && current == p(0)
    ));
    assert!(matches!(game.play(p(5), Some(0), None), Err(UnoError::InvalidPlayer(_))));
    assert!(matches!(
        game.play(p(0), Some(7), None),
        Err(UnoError::InvalidCardIndex { index: 7, hand_size: 7 })
    ));
    assert!(matches!(
        game.play(p(0), Some(0), None),
        Err(UnoError::CardNotPlayable { .. })
    ));

    assert!(game.play(p(1), Some(0), None).unwrap_err().is_player_error());
    assert_eq!(game.hand_sizes(), before_hands);
    assert_eq!(game.current_card(), before_card);
    assert_eq!(game.current_player(), p(0));
    assert!(game.history().is_empty());
}

/// Test a plain card passes the turn to the next seat.
#[test]
fn test_number_card_advances_once() {
    let mut game = fixture();

    play(&mut game, 0, 1);

    assert_eq!(hand_len(&game, 0), 6);
    assert_eq!(game.current_card(), card("red", "1"));
    assert_eq!(game.current_player(), p(1));
    assert!(game.is_active());
}

/// Test reverse flips direction and the previous seat acts next.
#[test]
fn test_reverse() {
    let mut game = fixture();
    play(&mut game, 0, 1);
    play(&mut game, 1, 0);

    // Player 2 plays RR.
    play(&mut game, 2, 6);

    assert_eq!(game.direction(), Direction::Backward);
    assert_eq!(game.current_player(), p(1));

    play(&mut game, 1, 0);
    assert_eq!(game.current_player(), p(0));
    play(&mut game, 0, 0);
    assert_eq!(game.current_player(), p(4));
}

/// Test skip passes over the next seat.
#[test]
fn test_skip() {
    let mut game = fixture();
    play(&mut game, 0, 1);
    play(&mut game, 1, 0);

    // Player 2 plays RS.
    let hand3_before = hand_len(&game, 3);
    play(&mut game, 2, 5);

    assert_eq!(game.current_player(), p(4));
    assert_eq!(hand_len(&game, 3), hand3_before);
}

/// Test draw two penalizes and skips the next seat.
#[test]
fn test_draw_two() {
    let mut game = fixture();
    play(&mut game, 0, 1);
    play(&mut game, 1, 0);
    play(&mut game, 2, 0);

    play(&mut game, 3, 0);

    assert_eq!(hand_len(&game, 4), 9);
    assert_eq!(game.current_player(), p(0));
    let hand4 = game.player_hand(p(4)).unwrap();
    assert_eq!(hand4[7], card("black", "+4"));
    assert_eq!(hand4[8], card("black", "wildcard"));
}

/// Test wild draw four declares a colour, penalizes and skips.
#[test]
fn test_wild_draw_four() {
    let mut game = fixture();

    // Player 0 draws the first black card of the pile.
    game.play(p(0), None, None).unwrap();
    assert_eq!(game.player_hand(p(0)).unwrap()[7], card("black", "+4"));
    play(&mut game, 1, 3);
    play(&mut game, 2, 0);
    play(&mut game, 3, 0);
    assert_eq!(game.current_player(), p(0));

    assert_eq!(game.play(p(0), Some(7), None), Err(UnoError::InvalidColor));
    assert_eq!(
        game.play(p(0), Some(7), Some(Color::Black)),
        Err(UnoError::InvalidColor)
    );

    let hand1_before = hand_len(&game, 1);
    game.play(p(0), Some(7), Some(Color::Blue)).unwrap();

    assert_eq!(game.current_card(), card("black", "+4"));
    assert_eq!(game.current_card().effective_color(), Color::Blue);
    assert_eq!(hand_len(&game, 1), hand1_before + 4);
    assert_eq!(game.current_player(), p(2));
    assert_eq!(total_cards(&game), DECK_SIZE);
}

/// Test drawing when nothing plays.
#[test]
fn test_draw_when_stuck() {
    let mut game = fixture();
    for (id, index) in [
        (0, 1), (1, 0), (2, 0), (3, 0),
        (0, 0), (1, 0), (2, 0), (3, 0),
        (0, 0), (1, 0), (2, 0), (3, 0),
        (2, 0), (1, 0), (0, 0), (4, 0), (3, 1),
    ] {
        play(&mut game, id, index);
    }

    let stuck = game.player(p(2)).unwrap();
    assert_eq!(game.current_player(), p(2));
    assert!(!stuck.can_play(&game.current_card()));

    let before = hand_len(&game, 2);
    game.play(p(2), None, None).unwrap();
    assert_eq!(hand_len(&game, 2), before + 1);
    assert_eq!(game.current_player(), p(1));
}

/// Test a whole scripted game through to the win.
#[test]
fn test_full_game_to_win() {
    let mut game = fixture();

    play(&mut game, 0, 1);
    assert_eq!(hand_len(&game, 0), 6);
    play(&mut game, 1, 0);
    play(&mut game, 2, 0);
    play(&mut game, 3, 0);
    assert_eq!(hand_len(&game, 4), 9);
    assert_eq!(game.current_player(), p(0));

    assert!(matches!(
        game.play(p(4), Some(1), None),
        Err(UnoError::NotYourTurn { .. })
    ));

    play(&mut game, 0, 0);
    play(&mut game, 1, 0);
    play(&mut game, 2, 0);
    play(&mut game, 3, 0); // RS skips player 4
    assert_eq!(game.current_player(), p(0));

    play(&mut game, 0, 0);
    play(&mut game, 1, 0);
    play(&mut game, 2, 0);
    play(&mut game, 3, 0); // RR
    assert_eq!(game.current_player(), p(2));

    play(&mut game, 2, 0);
    play(&mut game, 1, 0);
    play(&mut game, 0, 0);
    play(&mut game, 4, 0);
    play(&mut game, 3, 1);

    assert_eq!(game.current_player(), p(2));
    assert!(!game.player(p(2)).unwrap().can_play(&game.current_card()));
    game.play(p(2), None, None).unwrap();
    assert_eq!(hand_len(&game, 2), 4);

    game.play(p(1), None, None).unwrap();
    game.play(p(0), None, None).unwrap();

    // Player 4 plays the wild drawn from the draw-two penalty.
    let hand3_before = hand_len(&game, 3);
    game.play(p(4), Some(7), Some(Color::Yellow)).unwrap();
    assert_eq!(game.current_player(), p(3));
    assert_eq!(game.current_card().effective_color(), Color::Yellow);
    assert_eq!(hand_len(&game, 3), hand3_before);
    play(&mut game, 3, 1);

    assert_eq!(game.play(p(2), Some(3), None), Err(UnoError::InvalidColor));

    let hand1_before = hand_len(&game, 1);
    game.play(p(2), Some(3), Some(Color::Red)).unwrap();
    assert_eq!(game.current_player(), p(0));
    assert_eq!(game.current_card().effective_color(), Color::Red);
    assert_eq!(hand_len(&game, 1), hand1_before + 4);

    play(&mut game, 0, 0);
    play(&mut game, 4, 0);
    play(&mut game, 3, 1);
    game.play(p(2), None, None).unwrap();
    play(&mut game, 1, 0);
    play(&mut game, 0, 0);
    game.play(p(4), None, None).unwrap();
    assert_eq!(game.winner(), None);
    assert_eq!(hand_len(&game, 3), 1);

    // Player 3's last card is R+2: player 2 still picks up two.
    let hand2_before = hand_len(&game, 2);
    play(&mut game, 3, 0);

    assert_eq!(hand_len(&game, 3), 0);
    assert!(!game.is_active());
    assert_eq!(game.winner(), Some(p(3)));
    assert_eq!(hand_len(&game, 2), hand2_before + 2);
    assert_eq!(game.current_player(), p(2));
    let turns = game.turn_number();

    assert_eq!(game.play(p(2), Some(0), None), Err(UnoError::GameOver));
    assert_eq!(game.play(p(1), Some(0), None), Err(UnoError::GameOver));
    assert_eq!(game.play(p(2), None, None), Err(UnoError::GameOver));
    assert_eq!(game.play(p(2), Some(99), None), Err(UnoError::GameOver));
    assert_eq!(game.turn_number(), turns);
    assert!(game.legal_actions(p(2)).is_empty());
}

/// Test the action history records every accepted move in order.
#[test]
fn test_history() {
    use uno_engine::Action;

    let mut game = fixture();
    play(&mut game, 0, 1);
    game.play(p(1), None, None).unwrap();
    let _ = game.play(p(0), Some(0), None);

    let history = game.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, p(0));
    assert_eq!(history[0].action, Action::play(1));
    assert_eq!(history[0].turn, 1);
    assert_eq!(history[1].player, p(1));
    assert_eq!(history[1].action, Action::Draw);
    assert_eq!(history[1].turn, 2);
}

/// Test GameOver wins over every other precondition once the game is won.
#[test]
fn test_game_over_checked_before_move_details() {
    let mut game = UnoGame::new(UnoConfig::new(2).with_seed(4)).unwrap();
    for _ in 0..10_000 {
        if !game.is_active() {
            break;
        }
        let player = game.current_player();
        let action = game.legal_actions(player)[0];
        game.apply(player, &action).unwrap();
    }
    let winner = game.winner().expect("game should finish");
    let other = PlayerId::new(1 - winner.0);

    // The winner's hand is empty, so any index is out of range.
    assert_eq!(game.play(winner, Some(0), None), Err(UnoError::GameOver));
    assert_eq!(game.play(winner, None, None), Err(UnoError::GameOver));
    assert_eq!(game.play(other, Some(999), None), Err(UnoError::GameOver));
    assert_eq!(game.play(other, Some(0), Some(Color::Black)), Err(UnoError::GameOver));
    assert!(matches!(
        game.play(p(7), Some(0), None),
        Err(UnoError::InvalidPlayer(_))
    ));
}

/// Test draws keep working after the draw pile runs dry.
///
/// Two players draw until every card is in a hand, then play on. Later
/// draws must refill the draw pile from the discard pile.
#[test]
fn test_deck_exhaustion_recycles_through_play() {
    let mut recycled = false;
    let mut winners = 0;

    for seed in 0..10 {
        let mut game = UnoGame::new(UnoConfig::new(2).with_seed(seed)).unwrap();

        for _ in 0..200 {
            let player = game.current_player();
            game.play(player, None, None).unwrap();
            assert_eq!(total_cards(&game), DECK_SIZE);
        }
        assert_eq!(game.draw_pile_len(), 0);
        assert_eq!(game.discard_len(), 1);
        assert_eq!(game.hand_sizes().values().sum::<usize>(), DECK_SIZE - 1);

        for _ in 0..5_000 {
            if !game.is_active() {
                winners += 1;
                break;
            }
            let player = game.current_player();
            let action = game.legal_actions(player)[0];
            let discard_before = game.discard_len();

            game.apply(player, &action).unwrap();

            assert_eq!(total_cards(&game), DECK_SIZE);
            if game.discard_len() < discard_before {
                recycled = true;
                assert!(!game.current_card().effective_color().is_black());
            }
        }
    }

    assert!(recycled, "no draw ever recycled the discard pile");
    assert!(winners > 0);
}
