//! Core types shared across the application.
//!
//! This module contains pure data types with no external dependencies.

/// Default board dimensions (columns x rows).
pub const BOARD_WIDTH: i8 = 10;
pub const BOARD_HEIGHT: i8 = 20;

/// Seconds between gravity steps.
pub const FALL_INTERVAL: f32 = 0.5;

/// Points awarded when a piece locks.
pub const LOCK_SCORE: u32 = 10;

/// Points awarded per cleared row.
pub const LINE_SCORE: u32 = 100;

/// Frame duration for the terminal loop (milliseconds).
pub const TICK_MS: u64 = 16;

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation states, advanced clockwise on each rotate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// `(state + 1) mod 4`
    pub fn next(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R1,
            Rotation::R1 => Rotation::R2,
            Rotation::R2 => Rotation::R3,
            Rotation::R3 => Rotation::R0,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R1 => 1,
            Rotation::R2 => 2,
            Rotation::R3 => 3,
        }
    }
}

/// Session phase state machine.
///
/// `WaitingForStart -> Playing -> GameOver`, with restart returning to
/// `WaitingForStart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    WaitingForStart,
    Playing,
    GameOver,
}

/// Discrete player commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    HardDrop,
    Rotate,
    Start,
    Restart,
    ToggleSide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_cycles_through_four_states() {
        let mut r = Rotation::R0;
        for expected in [1, 2, 3, 0] {
            r = r.next();
            assert_eq!(r.index(), expected);
        }
    }

    #[test]
    fn all_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in PieceKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
