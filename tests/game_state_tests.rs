//! End-to-end simulation tests through the public API.

use duotris::core::{GameState, SimpleRng};
use duotris::types::{GameAction, PieceKind, Rotation};

/// Find a seed whose piece sequence starts with `kinds`. Spawns draw one
/// kind per piece, so the rng draw order is the piece order.
fn seed_for_kinds(kinds: &[PieceKind]) -> u32 {
    (1..500_000u32)
        .find(|&seed| {
            let mut rng = SimpleRng::new(seed);
            kinds.iter().all(|&k| rng.next_kind() == k)
        })
        .expect("no seed found for the requested piece sequence")
}

#[test]
fn o_piece_spawns_at_pivot_and_locks_on_the_floor() {
    let seed = seed_for_kinds(&[PieceKind::O]);
    let mut state = GameState::new(10, 20, seed);
    assert_eq!(state.piece().kind, PieceKind::O);
    assert_eq!(state.piece().col, 5);
    assert_eq!(state.piece().row, 19);

    state.start_game();
    while state.board().is_empty() {
        state.move_down();
    }

    assert_eq!(state.score(), 10);
    for pos in [(5, 0), (6, 0), (5, 1), (6, 1)] {
        assert!(state.board().is_occupied(pos), "missing frozen cell {pos:?}");
    }
}

#[test]
fn two_o_pieces_fill_and_clear_rows_on_a_narrow_board() {
    // On a 4-wide board two O pieces tile rows 0 and 1 completely.
    let seed = seed_for_kinds(&[PieceKind::O, PieceKind::O]);
    let mut state = GameState::new(4, 8, seed);
    state.start_game();

    // First O at the spawn pivot covers columns 2 and 3.
    state.hard_drop();
    // Second O shifted to columns 0 and 1.
    state.move_left();
    state.move_left();
    state.hard_drop();

    assert_eq!(state.score(), 20);
    assert_eq!(state.board().len(), 8);

    // Clears happen at the head of the next tick.
    state.tick(0.0);
    assert_eq!(state.score(), 20 + 200);
    assert!(state.board().is_empty());
}

#[test]
fn actions_do_nothing_before_start() {
    let mut state = GameState::new(10, 20, 7);
    let before = state.piece();
    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::HardDrop,
        GameAction::Rotate,
    ] {
        state.apply_action(action);
    }
    assert_eq!(state.piece(), before);
    assert!(state.waiting_for_start());
}

#[test]
fn session_runs_to_game_over_and_restarts() {
    let mut state = GameState::new(10, 20, 42);
    state.apply_action(GameAction::Start);

    let mut drops = 0;
    while !state.game_over() {
        state.apply_action(GameAction::HardDrop);
        drops += 1;
        assert!(drops < 1000, "session never ended");
    }
    assert!(state.score() > 0);
    assert!(!state.board().is_empty());

    state.apply_action(GameAction::Restart);
    assert!(state.waiting_for_start());
    assert_eq!(state.score(), 0);
    assert!(state.board().is_empty());
    assert_eq!(state.piece().rotation, Rotation::R0);

    // The restarted session is playable again.
    state.apply_action(GameAction::Start);
    state.apply_action(GameAction::HardDrop);
    assert_eq!(state.score(), 10);
}

#[test]
fn gravity_accumulates_partial_deltas() {
    let mut state = GameState::new(10, 20, 1);
    state.start_game();
    let row = state.piece().row;

    for _ in 0..4 {
        state.tick(0.1);
    }
    assert_eq!(state.piece().row, row);

    state.tick(0.1);
    assert_eq!(state.piece().row, row - 1);
}

#[test]
fn negative_delta_does_not_rewind_the_timer() {
    let mut state = GameState::new(10, 20, 1);
    state.start_game();
    let row = state.piece().row;

    state.tick(0.4);
    state.tick(-100.0);
    state.tick(0.1);
    assert_eq!(state.piece().row, row - 1);
}

#[test]
fn same_seed_gives_identical_sessions() {
    let mut a = GameState::new(10, 20, 777);
    let mut b = GameState::new(10, 20, 777);
    a.start_game();
    b.start_game();

    for i in 0..300 {
        let action = match i % 4 {
            0 => GameAction::MoveLeft,
            1 => GameAction::Rotate,
            2 => GameAction::MoveRight,
            _ => GameAction::MoveDown,
        };
        a.apply_action(action);
        b.apply_action(action);
        a.tick(0.25);
        b.tick(0.25);

        assert_eq!(a.piece(), b.piece());
        assert_eq!(a.score(), b.score());
        assert_eq!(a.game_over(), b.game_over());
        if a.game_over() {
            break;
        }
    }
}

#[test]
fn resize_applies_to_subsequent_spawns() {
    let mut state = GameState::new(10, 20, 3);
    state.resize_board(6, 12);
    state.restart_game();
    assert_eq!(state.piece().col, 3);
    assert_eq!(state.piece().row, 11);

    state.start_game();
    state.hard_drop();
    for ((col, row), _) in state.board().iter() {
        assert!(col >= 0 && col < 6);
        assert!(row >= 0 && row < 12);
    }
}
