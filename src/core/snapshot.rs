//! Read-only view of the game for rendering.

use crate::core::pieces::{Form, Piece};
use crate::types::{Color, Phase, BOARD_HEIGHT, BOARD_WIDTH};

/// Copy of a piece as the renderer needs it.
#[derive(Debug, Clone, Copy)]
pub struct PieceSnapshot {
    pub form: Form,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            form: piece.form,
            color: piece.color,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Everything the front-end draws in one frame. Settled cells are palette
/// indices (0 = empty); the falling piece is kept separate so the renderer
/// can draw it over the grid.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub high_score: i32,
    pub level: u32,
    pub lines_cleared: u32,
    pub phase: Phase,
    pub muted: bool,
}
