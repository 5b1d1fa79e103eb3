//! Core module: pure game logic with no I/O dependencies.
//!
//! Contains the board simulation, piece shape tables, RNG, dual-board
//! layout math, and read-only snapshots for the presentation layer.

pub mod board;
pub mod game_state;
pub mod layout;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use board::{Board, CellPos};
pub use game_state::{ActivePiece, GameState};
pub use layout::DuelLayout;
pub use pieces::get_offsets;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PieceSnapshot};
