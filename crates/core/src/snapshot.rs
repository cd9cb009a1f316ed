//! Flat, copyable view of a session for renderers.
//!
//! The grid uses raw cell values so locked cells go through the
//! value-to-color lookup, while the moving pieces carry their own color.

use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

use crate::piece::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Piece,
    pub next: Piece,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// An empty-board snapshot around the given pieces.
    pub fn empty(current: Piece, next: Piece) -> Self {
        Self {
            board: [[EMPTY_CELL; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current,
            next,
            score: 0,
            high_score: 0,
            level: 1,
            game_over: false,
        }
    }
}
