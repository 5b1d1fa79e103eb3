//! Read-only snapshots for the presentation layer.
//!
//! The renderer never touches `GameState` directly; it gets a plain-data
//! copy it can draw from. `snapshot_into` reuses the frozen-cell buffer so a
//! frame loop can avoid reallocating every frame.

use crate::core::{ActivePiece, CellPos, GameState};
use crate::types::{Phase, PieceKind, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub col: i8,
    pub row: i8,
}

impl From<ActivePiece> for PieceSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            col: value.col,
            row: value.row,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub width: i8,
    pub height: i8,
    pub piece: PieceSnapshot,
    pub frozen: Vec<(CellPos, PieceKind)>,
    pub score: u32,
    pub game_over: bool,
    pub waiting_for_start: bool,
    pub falling_on_left: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            piece: PieceSnapshot {
                kind: PieceKind::I,
                rotation: Rotation::R0,
                col: 0,
                row: 0,
            },
            frozen: Vec::new(),
            score: 0,
            game_over: false,
            waiting_for_start: true,
            falling_on_left: true,
        }
    }
}

impl GameState {
    /// Fill `out` with the current state, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board().width();
        out.height = self.board().height();
        out.piece = self.piece().into();
        out.frozen.clear();
        out.frozen.extend(self.board().iter());
        out.score = self.score();
        out.game_over = self.phase() == Phase::GameOver;
        out.waiting_for_start = self.phase() == Phase::WaitingForStart;
        out.falling_on_left = self.falling_on_left();
    }

    /// Convenience helper that allocates a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_mirrors_state() {
        let mut state = GameState::new(10, 20, 42);
        state.start_game();
        state.hard_drop();

        let snap = state.snapshot();
        assert_eq!(snap.width, 10);
        assert_eq!(snap.height, 20);
        assert_eq!(snap.score, state.score());
        assert_eq!(snap.frozen.len(), state.board().len());
        assert!(!snap.waiting_for_start);
        assert_eq!(snap.piece.col, state.piece().col);
    }

    #[test]
    fn snapshot_into_reuses_buffer() {
        let mut state = GameState::new(10, 20, 42);
        state.start_game();

        let mut snap = GameSnapshot::default();
        state.snapshot_into(&mut snap);
        assert!(snap.frozen.is_empty());

        state.hard_drop();
        state.snapshot_into(&mut snap);
        assert_eq!(snap.frozen.len(), 4);
    }
}
