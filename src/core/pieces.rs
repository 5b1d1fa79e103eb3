//! Tetromino shape tables.
//!
//! Each kind has exactly 4 rotation states, each a fixed list of 4 offsets
//! relative to the piece pivot. Offsets are precomputed constants rather than
//! derived by rotation math at runtime, so shapes are exact with no
//! floating-point error.
//!
//! Coordinates are (column, row) with row 0 at the board floor and rows
//! increasing upward.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece pivot.
pub type CellOffset = (i8, i8);

/// Shape of a piece: 4 cell offsets from the pivot.
pub type PieceShape = [CellOffset; 4];

/// Look up the shape for a piece kind at a rotation state.
pub fn get_offsets(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => i_shape(rotation),
        PieceKind::O => o_shape(rotation),
        PieceKind::T => t_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
    }
}

/// I piece: horizontal bar, vertical bar, repeating every two states.
fn i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 | Rotation::R2 => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        Rotation::R1 | Rotation::R3 => [(0, -1), (0, 0), (0, 1), (0, 2)],
    }
}

/// O piece: same square in every state.
fn o_shape(_rotation: Rotation) -> PieceShape {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

/// T piece.
fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        Rotation::R1 => [(0, -1), (0, 0), (1, 0), (0, 1)],
        Rotation::R2 => [(-1, 0), (0, 0), (1, 0), (0, -1)],
        Rotation::R3 => [(0, -1), (0, 0), (-1, 0), (0, 1)],
    }
}

/// S piece, repeating every two states.
fn s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 | Rotation::R2 => [(0, 0), (1, 0), (-1, 1), (0, 1)],
        Rotation::R1 | Rotation::R3 => [(0, 0), (0, 1), (1, -1), (1, 0)],
    }
}

/// Z piece, repeating every two states.
fn z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 | Rotation::R2 => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        Rotation::R1 | Rotation::R3 => [(1, -1), (1, 0), (0, 0), (0, 1)],
    }
}

/// J piece.
fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(-1, 0), (0, 0), (1, 0), (1, 1)],
        Rotation::R1 => [(0, -1), (0, 0), (0, 1), (1, -1)],
        Rotation::R2 => [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        Rotation::R3 => [(0, -1), (0, 0), (0, 1), (-1, 1)],
    }
}

/// L piece.
fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::R0 => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        Rotation::R1 => [(0, -1), (0, 0), (0, 1), (1, 1)],
        Rotation::R2 => [(1, -1), (-1, 0), (0, 0), (1, 0)],
        Rotation::R3 => [(0, -1), (0, 0), (0, 1), (-1, -1)],
    }
}
