use blockfall::core::{GameState, ScriptedRng};
use blockfall::term::{block_color, AnchorY, GameView, Viewport, GAME_OVER_HINT, GAME_OVER_TEXT};
use blockfall::types::{GameAction, BOARD_HEIGHT};

fn row_containing(fb: &blockfall::term::FrameBuffer, needle: &str) -> Option<u16> {
    (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // 10 cells of 2 columns plus the border; panel space is left on the right.
    let vp = view.required_size();
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = 3;
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, view.required_size());

    let bottom = BOARD_HEIGHT as u16;
    let left = fb.get(1, bottom).unwrap();
    let right = fb.get(2, bottom).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, block_color(3).unwrap());
    assert_eq!(fb.get(3, bottom).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    // All O pieces: spawn at columns 3..=4, rows 0..=1.
    let state = GameState::with_randomizer(ScriptedRng::new(vec![1]));
    let snap = state.snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, view.required_size());

    // Board column 3 starts at screen column 1 + 3 * 2.
    assert_eq!(fb.get(7, 1).unwrap().ch, '█');
    assert_eq!(fb.get(7, 2).unwrap().ch, '█');
    assert_eq!(snap.ghost_y, 18);
    assert_eq!(fb.get(7, 19).unwrap().ch, '░');
    assert_eq!(fb.get(7, 20).unwrap().ch, '░');
}

#[test]
fn term_view_shows_score_and_game_over_prompt() {
    let mut state = GameState::with_randomizer(ScriptedRng::new(vec![1]));
    while !state.game_over() {
        state.apply_action(GameAction::HardDrop);
    }
    let snap = state.snapshot();
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(80, 30));

    let over = row_containing(&fb, GAME_OVER_TEXT).expect("game over banner");
    let hint = row_containing(&fb, GAME_OVER_HINT).expect("retry hint");
    assert_eq!(hint, over + 1);

    let score_label = row_containing(&fb, "SCORE").unwrap();
    assert!(fb.row_text(score_label + 1).contains("20"));
}
