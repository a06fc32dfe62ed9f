//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, randomizer, and scoring.
//! It handles gravity timing, piece movement, rotation, hold, line clears, and game lifecycle.

use tracing::{debug, info};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::{Randomizer, SimpleRng};
use crate::scoring::{calculate_drop_score, line_clear_score};
use crate::shapes::CATALOG;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Draw a uniformly random shape and color, positioned at the spawn point.
fn draw_piece<R: Randomizer>(rng: &mut R) -> Piece {
    let shape = CATALOG[rng.pick(CATALOG.len())];
    let color = rng.pick(COLOR_COUNT as usize) as ColorId + 1;
    Piece::spawn(shape, SPAWN_COLUMN, color)
}

/// Complete game state
///
/// Every action is a no-op returning `false` once the game is over; only
/// [`GameState::reset`] leaves that state.
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Piece,
    next: Piece,
    held: Option<Piece>,
    hold_used: bool,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Last lock/line-clear event (consumed by the driver).
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
    /// Gravity accumulator
    drop_timer_ms: u32,
    gravity_ms: u32,
    game_over: bool,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_randomizer(SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: Randomizer> GameState<R> {
    /// Create a new game drawing pieces from `rng`
    pub fn with_randomizer(mut rng: R) -> Self {
        let active = draw_piece(&mut rng);
        let next = draw_piece(&mut rng);

        Self {
            board: Board::new(),
            active,
            next,
            held: None,
            hold_used: false,
            episode_id: 0,
            last_event: None,
            score: 0,
            lines: 0,
            drop_timer_ms: 0,
            gravity_ms: GRAVITY_MS,
            game_over: false,
            rng,
        }
    }

    /// Override the gravity interval (clamped to at least 1ms)
    pub fn with_gravity_ms(mut self, gravity_ms: u32) -> Self {
        self.gravity_ms = gravity_ms.max(1);
        self
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn hold_used(&self) -> bool {
        self.hold_used
    }

    pub fn can_hold(&self) -> bool {
        !self.hold_used && !self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn gravity_ms(&self) -> u32 {
        self.gravity_ms
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn held(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_color_grid(&mut out.board);

        out.active = self.active;
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.held = self.held;
        out.can_hold = self.can_hold();
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot {
            board: [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: self.active,
            ghost_y: self.active.y,
            next: self.next,
            held: None,
            can_hold: true,
            game_over: false,
            episode_id: 0,
            score: 0,
            lines: 0,
        };
        self.snapshot_into(&mut s);
        s
    }

    /// Start over with an empty board and fresh pieces.
    ///
    /// The randomizer carries on from its current state.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = draw_piece(&mut self.rng);
        self.next = draw_piece(&mut self.rng);
        self.held = None;
        self.hold_used = false;
        self.last_event = None;
        self.score = 0;
        self.lines = 0;
        self.drop_timer_ms = 0;
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);

        info!(episode_id = self.episode_id, "game reset");
    }

    /// Try to move the active piece; it stays put if the target does not fit
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let candidate = self.active.shifted(dx, dy);
        if self.board.fits(&candidate) {
            self.active = candidate;
            return true;
        }
        false
    }

    pub fn move_left(&mut self) -> bool {
        !self.game_over && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        !self.game_over && self.try_move(1, 0)
    }

    /// Move down one row, +1 point when it moves. Never locks.
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over || !self.try_move(0, 1) {
            return false;
        }
        self.score = self.score.saturating_add(calculate_drop_score(false));
        true
    }

    /// Rotate clockwise in place; no kicks, so a blocked rotation is rejected
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let candidate = self.active.with_shape(self.active.rotated());
        if self.board.fits(&candidate) {
            self.active = candidate;
            return true;
        }
        false
    }

    /// Where the active piece ends up when dropped: step down while it fits,
    /// then back up one row.
    fn landing_piece(&self) -> Piece {
        let mut piece = self.active;
        while self.board.fits(&piece) {
            piece = piece.shifted(0, 1);
        }
        piece.shifted(0, -1)
    }

    /// Calculate the ghost piece Y position (where piece would land)
    pub fn ghost_y(&self) -> i8 {
        self.landing_piece().y
    }

    /// Hard drop the active piece to the bottom and lock it
    pub fn hard_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        self.active = self.landing_piece();
        self.score = self.score.saturating_add(calculate_drop_score(true));
        self.lock_and_advance(LockSource::HardDrop);
        true
    }

    /// Set the active piece aside, once per spawned piece.
    ///
    /// With an empty hold slot the next piece comes in; otherwise the held
    /// piece swaps in at the spawn point. The incoming piece is not checked
    /// against the board, so it may overlap locked cells.
    pub fn hold(&mut self) -> bool {
        if self.game_over || self.hold_used {
            return false;
        }

        let current = Piece::spawn(self.active.shape, SPAWN_COLUMN, self.active.color);

        match self.held {
            Some(held) => {
                self.active = Piece::spawn(held.shape, SPAWN_COLUMN, held.color);
            }
            None => {
                self.active = Piece::spawn(self.next.shape, SPAWN_COLUMN, self.next.color);
                self.next = draw_piece(&mut self.rng);
            }
        }

        self.held = Some(current);
        self.hold_used = true;
        true
    }

    /// Move down one row, locking the piece if it cannot. Returns true on lock.
    fn descend(&mut self) -> bool {
        if self.try_move(0, 1) {
            return false;
        }
        self.lock_and_advance(LockSource::Gravity);
        true
    }

    /// Lock the active piece onto the board, clear rows, score, and spawn the next piece
    fn lock_and_advance(&mut self, source: LockSource) {
        let piece = self.active;
        self.board.lock(&piece);

        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len();
        let bonus = line_clear_score(source, lines_cleared);
        self.score = self.score.saturating_add(bonus);
        self.lines = self.lines.saturating_add(lines_cleared as u32);

        if lines_cleared > 0 {
            debug!(
                source = source.as_str(),
                rows = ?cleared_rows.as_slice(),
                bonus,
                score = self.score,
                "rows cleared"
            );
        }

        self.active = Piece::spawn(self.next.shape, SPAWN_COLUMN, self.next.color);
        self.next = draw_piece(&mut self.rng);
        self.hold_used = false;

        if !self.board.fits(&self.active) {
            self.game_over = true;
            info!(
                score = self.score,
                lines = self.lines,
                episode_id = self.episode_id,
                "game over: spawn blocked"
            );
        }

        self.last_event = Some(LockEvent {
            source,
            lines_cleared: lines_cleared as u32,
            line_clear_score: bonus,
            game_over: self.game_over,
        });
    }

    /// Take and clear the last lock/line-clear event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Gravity tick - accumulate time and drop the piece one row per interval
    ///
    /// At most one piece locks per call; time left over after a lock stays in
    /// the accumulator for the next call. Returns true if the piece moved or locked.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);

        let mut changed = false;
        while self.drop_timer_ms >= self.gravity_ms {
            self.drop_timer_ms -= self.gravity_ms;
            changed = true;
            if self.descend() {
                break;
            }
        }
        changed
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Hold => self.hold(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }
}
