//! Integration tests for whole games driven through the public API.

use blockfall::core::{GameState, ScriptedRng};
use blockfall::types::{GameAction, LockSource, BOARD_HEIGHT, GRAVITY_MS, SPAWN_COLUMN};

/// Every draw is the O shape (catalog index 1).
fn all_o() -> GameState<ScriptedRng> {
    GameState::with_randomizer(ScriptedRng::new(vec![1]))
}

/// Shift the active piece so its left edge sits on `x`, then hard drop.
fn drop_at(state: &mut GameState<ScriptedRng>, x: i8) {
    let mut dx = x - state.active().x;
    while dx < 0 {
        assert!(state.apply_action(GameAction::MoveLeft));
        dx += 1;
    }
    while dx > 0 {
        assert!(state.apply_action(GameAction::MoveRight));
        dx -= 1;
    }
    assert!(state.apply_action(GameAction::HardDrop));
}

#[test]
fn test_stacking_in_one_column_ends_after_ten_drops() {
    let mut state = all_o();

    for i in 0..10 {
        assert!(!state.game_over(), "ended early after {i} drops");
        assert!(state.apply_action(GameAction::HardDrop));
    }

    assert!(state.game_over());
    assert_eq!(state.score(), 20);
    assert_eq!(state.lines(), 0);
    let ev = state.take_last_event().unwrap();
    assert!(ev.game_over);
    assert_eq!(ev.source, LockSource::HardDrop);
}

#[test]
fn test_hard_drop_double_clear() {
    let mut state = all_o();
    for x in [0, 2, 4, 6, 8] {
        drop_at(&mut state, x);
    }

    assert_eq!(state.lines(), 2);
    assert_eq!(state.score(), 5 * 2 + 400);
    assert!(state.board().cells().iter().all(|&c| c == 0));

    let ev = state.take_last_event().unwrap();
    assert_eq!(ev.lines_cleared, 2);
    assert_eq!(ev.line_clear_score, 400);
    assert!(!ev.game_over);
}

#[test]
fn test_gravity_double_clear_uses_table() {
    let mut state = all_o();
    for x in [0, 2, 4, 6] {
        drop_at(&mut state, x);
    }
    while state.active().x < 8 {
        assert!(state.apply_action(GameAction::MoveRight));
    }
    // Discard the event left by the last hard drop.
    assert_eq!(
        state.take_last_event().map(|ev| ev.source),
        Some(LockSource::HardDrop)
    );

    // Let gravity bring the last piece down and lock it.
    let mut ev = None;
    for _ in 0..(BOARD_HEIGHT as usize * 2) {
        assert!(state.take_last_event().is_none());
        state.tick(GRAVITY_MS);
        ev = state.take_last_event();
        if ev.is_some() {
            break;
        }
    }

    let ev = ev.unwrap();
    assert_eq!(ev.source, LockSource::Gravity);
    assert_eq!(ev.lines_cleared, 2);
    assert_eq!(ev.line_clear_score, 300);
    assert_eq!(state.score(), 4 * 2 + 300);
}

#[test]
fn test_hold_one_shot_per_piece() {
    let mut state = GameState::new(2024);
    let first = *state.active();
    let next = *state.next();

    assert!(state.apply_action(GameAction::Hold));
    assert_eq!(state.held().map(|p| p.shape), Some(first.shape));
    assert_eq!(state.active().shape, next.shape);
    assert!(!state.apply_action(GameAction::Hold));

    assert!(state.apply_action(GameAction::HardDrop));
    assert!(state.can_hold());
    assert!(state.apply_action(GameAction::Hold));
    assert_eq!(state.active().shape, first.shape);
    assert_eq!(state.active().x, SPAWN_COLUMN);
    assert_eq!(state.active().y, 0);
}

#[test]
fn test_actions_are_noops_after_game_over() {
    let mut state = all_o();
    while !state.game_over() {
        state.apply_action(GameAction::HardDrop);
    }
    let before = state.snapshot();

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::Hold,
    ] {
        assert!(!state.apply_action(action), "{} accepted", action.as_str());
    }
    assert!(!state.tick(GRAVITY_MS * 4));
    assert_eq!(state.snapshot(), before);

    assert!(state.apply_action(GameAction::Restart));
    assert!(!state.game_over());
    assert_eq!(state.score(), 0);
    assert_eq!(state.episode_id(), before.episode_id + 1);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::Rotate,
        GameAction::MoveLeft,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
    ];

    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    for _ in 0..5 {
        for &action in &script {
            assert_eq!(a.apply_action(action), b.apply_action(action));
        }
        a.tick(GRAVITY_MS);
        b.tick(GRAVITY_MS);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_action_names_round_trip_through_dispatch() {
    let mut state = GameState::new(3);
    let x = state.active().x;
    let action = GameAction::from_str("moveLeft").unwrap();
    assert!(state.apply_action(action));
    assert_eq!(state.active().x, x - 1);
    assert_eq!(GameAction::from_str("teleport"), None);
}
