//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 20;

/// Horizontal spawn column for a freshly spawned piece (roughly centered).
pub const SPAWN_X: i32 = 3;

/// Ticks a held key must accumulate before its action fires again.
pub const HOLD_DELAY: u32 = 2;

/// Duration of one external tick in milliseconds.
pub const TICK_MS: u64 = 80;

/// Seconds the game-over screen stays up before the loop exits on its own.
pub const GAME_OVER_GRACE_SECS: u64 = 5;

/// Level/speed curve: one level per 600 points, capped at 10; the fall
/// timer must reach `BASE_SPEED - SPEED_STEP * level` ticks before the
/// piece falls one row on its own.
pub const MAX_LEVEL: u32 = 10;
pub const SCORE_PER_LEVEL: u32 = 600;
pub const BASE_SPEED: u32 = 22;
pub const SPEED_STEP: u32 = 2;

/// Points for clearing 0..=4 lines in a single landing.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// The 7 canonical tetromino shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    T,
    O,
    Z,
    S,
    L,
    J,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::T,
        Shape::O,
        Shape::Z,
        Shape::S,
        Shape::L,
        Shape::J,
    ];

    pub fn index(self) -> usize {
        match self {
            Shape::I => 0,
            Shape::T => 1,
            Shape::O => 2,
            Shape::Z => 3,
            Shape::S => 4,
            Shape::L => 5,
            Shape::J => 6,
        }
    }
}

/// Piece colors. Decorative only: a color is drawn independently of the
/// shape and carries no gameplay meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Blue,
        Color::Purple,
    ];

    /// Palette index stored in board cells (1..=7; 0 means empty).
    pub fn index(self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Orange => 2,
            Color::Yellow => 3,
            Color::Green => 4,
            Color::Cyan => 5,
            Color::Blue => 6,
            Color::Purple => 7,
        }
    }
}

/// Cell on the board (None = empty, Some = filled with a color)
pub type Cell = Option<Color>;

/// Play-state of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Play,
    Pause,
    GameOver,
}

/// User actions accepted by the engine. `held` on
/// [`apply_action`](crate::core::GameState::apply_action) marks a key that
/// is being held down rather than freshly pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    None,
    Start,
    Pause,
    Terminate,
    Left,
    Right,
    Down,
    Drop,
    Rotate,
    Mute,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_indices_cover_zero_to_six() {
        for (i, shape) in Shape::ALL.iter().enumerate() {
            assert_eq!(shape.index(), i);
        }
    }

    #[test]
    fn test_color_indices_are_one_to_seven() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index() as usize, i + 1);
        }
    }
}
