//! Game state: the board simulation.
//!
//! Owns the grid, the active piece, scoring, and the session state machine.
//! Driven by a fixed-interval gravity tick plus discrete player commands;
//! every operation is a fast, synchronous state mutation and invalid
//! commands are defined as no-ops.

use crate::core::pieces::get_offsets;
use crate::core::{Board, CellPos, SimpleRng};
use crate::types::{GameAction, Phase, PieceKind, Rotation, FALL_INTERVAL, LINE_SCORE, LOCK_SCORE};

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Pivot column.
    pub col: i8,
    /// Pivot row (0 = floor).
    pub row: i8,
}

impl ActivePiece {
    /// Absolute positions of the four cells at the current rotation.
    pub fn cells(&self) -> [CellPos; 4] {
        get_offsets(self.kind, self.rotation).map(|(dx, dy)| (self.col + dx, self.row + dy))
    }
}

/// Which axes the collision predicate checks.
///
/// Moves are applied speculatively and then validated, so the horizontal
/// and vertical rules need to be testable independently: a sideways step
/// must ignore the floor, and a gravity step must ignore the walls.
/// Frozen-cell overlap is checked in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionAxes {
    /// Walls only.
    Horizontal,
    /// Floor only.
    Vertical,
    /// Walls and floor.
    Both,
}

/// Complete simulation state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    piece: ActivePiece,
    rng: SimpleRng,
    score: u32,
    phase: Phase,
    fall_timer: f32,
    /// Which of the two boards the piece is drawn falling on.
    falling_on_left: bool,
}

impl GameState {
    /// Create a new session.
    ///
    /// # Panics
    ///
    /// Panics if either board dimension is not positive.
    pub fn new(width: i8, height: i8, seed: u32) -> Self {
        let board = Board::new(width, height);
        let mut rng = SimpleRng::new(seed);
        let piece = spawn_at(&board, &mut rng);
        Self {
            board,
            piece,
            rng,
            score: 0,
            phase: Phase::WaitingForStart,
            fall_timer: 0.0,
            falling_on_left: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> ActivePiece {
        self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn waiting_for_start(&self) -> bool {
        self.phase == Phase::WaitingForStart
    }

    pub fn falling_on_left(&self) -> bool {
        self.falling_on_left
    }

    /// Leave the waiting state and begin play. No-op in any other state.
    pub fn start_game(&mut self) {
        if self.phase == Phase::WaitingForStart {
            self.phase = Phase::Playing;
            log::debug!("session started");
        }
    }

    /// Reset all mutable session state in place.
    ///
    /// Board dimensions survive a restart; everything else returns to its
    /// initial value and the session waits for a fresh start.
    pub fn restart_game(&mut self) {
        self.board.clear();
        self.piece = spawn_at(&self.board, &mut self.rng);
        self.score = 0;
        self.fall_timer = 0.0;
        self.phase = Phase::WaitingForStart;
        log::debug!("session restarted");
    }

    /// Advance the gravity timer by `delta` seconds.
    ///
    /// Completed lines are cleared at the top of every tick, so clears are
    /// detected after any lock, not only after gravity steps. When the
    /// accumulated timer reaches the fall interval the piece takes one
    /// gravity step and the timer resets. No-op unless playing.
    pub fn tick(&mut self, delta: f32) {
        if self.phase != Phase::Playing {
            return;
        }
        self.clear_completed_lines();
        self.fall_timer += delta.max(0.0);
        if self.fall_timer >= FALL_INTERVAL {
            self.move_down();
            self.fall_timer = 0.0;
        }
    }

    /// Shift the piece one column left; rolled back if it would collide.
    pub fn move_left(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.piece.col -= 1;
        if self.collides(CollisionAxes::Horizontal) {
            self.piece.col += 1;
        }
    }

    /// Shift the piece one column right; rolled back if it would collide.
    pub fn move_right(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.piece.col += 1;
        if self.collides(CollisionAxes::Horizontal) {
            self.piece.col -= 1;
        }
    }

    /// Drop the piece one row.
    ///
    /// If the step collides it is rolled back and the piece locks instead:
    /// freeze the cells, award the lock score, spawn a replacement, and end
    /// the session if the fresh spawn collides. A blocked spawn is the sole
    /// game-over trigger.
    pub fn move_down(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.piece.row -= 1;
        if self.collides(CollisionAxes::Vertical) {
            self.piece.row += 1;
            self.lock_and_respawn();
        }
    }

    /// Hard drop: move straight to the resting row and lock.
    pub fn hard_drop(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        loop {
            self.piece.row -= 1;
            if self.collides(CollisionAxes::Vertical) {
                self.piece.row += 1;
                break;
            }
        }
        self.lock_and_respawn();
    }

    /// Advance the rotation state; rejected outright if the new state
    /// collides. There is no wall-kick search.
    pub fn rotate_piece(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        let previous = self.piece.rotation;
        self.piece.rotation = previous.next();
        if self.collides(CollisionAxes::Both) {
            self.piece.rotation = previous;
        }
    }

    /// Flip which board the piece falls on in the dual-board layout.
    pub fn toggle_falling_side(&mut self) {
        self.falling_on_left = !self.falling_on_left;
    }

    /// Change the board dimensions mid-session.
    ///
    /// Derived layout must be recomputed by the caller afterwards.
    pub fn resize_board(&mut self, width: i8, height: i8) {
        self.board.resize(width, height);
        log::info!("board resized to {width}x{height}");
    }

    /// Apply a discrete player command. Commands invalid in the current
    /// phase fall through as no-ops inside the individual operations.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate_piece(),
            GameAction::Start => self.start_game(),
            GameAction::Restart => self.restart_game(),
            GameAction::ToggleSide => self.toggle_falling_side(),
        }
    }

    /// Collision predicate for the active piece.
    ///
    /// Vertical mode checks the floor (`row < 0`) and ignores the walls;
    /// horizontal mode checks the walls and ignores the floor. Overlap with
    /// frozen cells always collides. There is no ceiling check: the spawn
    /// row sits at the top of the board and pieces extend above it.
    fn collides(&self, axes: CollisionAxes) -> bool {
        let check_floor = matches!(axes, CollisionAxes::Vertical | CollisionAxes::Both);
        let check_walls = matches!(axes, CollisionAxes::Horizontal | CollisionAxes::Both);

        for (col, row) in self.piece.cells() {
            if check_floor && row < 0 {
                return true;
            }
            if check_walls && (col < 0 || col >= self.board.width()) {
                return true;
            }
            if self.board.is_occupied((col, row)) {
                return true;
            }
        }
        false
    }

    fn lock_and_respawn(&mut self) {
        let kind = self.piece.kind;
        for pos in self.piece.cells() {
            self.board.freeze(pos, kind);
        }
        self.score += LOCK_SCORE;

        self.piece = spawn_at(&self.board, &mut self.rng);
        if self.collides(CollisionAxes::Both) {
            self.phase = Phase::GameOver;
            log::info!("spawn blocked, game over at score {}", self.score);
        }
    }

    fn clear_completed_lines(&mut self) {
        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            self.score += LINE_SCORE * cleared.len() as u32;
            log::debug!("cleared rows {cleared:?}, score {}", self.score);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT, 1)
    }
}

/// Fixed spawn rule: pivot at `(width / 2, height - 1)`, rotation reset,
/// kind drawn uniformly at random.
fn spawn_at(board: &Board, rng: &mut SimpleRng) -> ActivePiece {
    ActivePiece {
        kind: rng.next_kind(),
        rotation: Rotation::R0,
        col: board.width() / 2,
        row: board.height() - 1,
    }
}
