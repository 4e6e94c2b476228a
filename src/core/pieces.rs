//! Pieces module - canonical tetromino forms and the rotation transform
//!
//! Each shape carries a 4x4 occupancy matrix. Rotation is a pure function
//! over (form, shape): a clean 90 degree turn of the active NxN sub-block,
//! where N is 4 for the shapes whose bounding box spans the full matrix
//! (I and O) and 3 for everything else.

use crate::types::{Color, Shape, SPAWN_X};

/// 4x4 occupancy matrix, row-major: `form[y][x]`.
pub type Form = [[bool; 4]; 4];

const T: bool = true;
const F: bool = false;

/// Canonical (spawn) form for a shape.
pub fn canonical_form(shape: Shape) -> Form {
    match shape {
        Shape::I => [
            [F, F, F, F],
            [T, T, T, T],
            [F, F, F, F],
            [F, F, F, F],
        ],
        Shape::T => [
            [F, T, F, F],
            [T, T, T, F],
            [F, F, F, F],
            [F, F, F, F],
        ],
        Shape::O => [
            [F, F, F, F],
            [F, T, T, F],
            [F, T, T, F],
            [F, F, F, F],
        ],
        Shape::Z => [
            [T, T, F, F],
            [F, T, T, F],
            [F, F, F, F],
            [F, F, F, F],
        ],
        Shape::S => [
            [F, T, T, F],
            [T, T, F, F],
            [F, F, F, F],
            [F, F, F, F],
        ],
        Shape::L => [
            [T, F, F, F],
            [T, T, T, F],
            [F, F, F, F],
            [F, F, F, F],
        ],
        Shape::J => [
            [F, F, T, F],
            [T, T, T, F],
            [F, F, F, F],
            [F, F, F, F],
        ],
    }
}

/// Side length of the sub-block the rotation transform acts on.
fn rotation_span(shape: Shape) -> usize {
    match shape {
        Shape::I | Shape::O => 4,
        _ => 3,
    }
}

/// Rotate a form 90 degrees: `new[x][y] = old[n-1-y][x]` over the active
/// sub-block. O is a fixed point of the 4x4 transform, so rotating it is a
/// no-op through the same code path.
pub fn rotate(form: &Form, shape: Shape) -> Form {
    let n = rotation_span(shape);
    let mut rotated = [[false; 4]; 4];
    for y in 0..n {
        for x in 0..n {
            rotated[x][y] = form[n - 1 - y][x];
        }
    }
    rotated
}

/// Horizontal nudges tried, in order, when an in-place rotation collides.
pub const KICK_OFFSETS: [i32; 4] = [-1, 1, -2, 2];

/// A falling piece: occupancy matrix, shape, color, and the board offset of
/// the matrix's top-left corner. `y` may be negative before the piece has
/// been merged (partially above the visible board).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub form: Form,
    pub shape: Shape,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece in its canonical orientation at the spawn anchor.
    pub fn new(shape: Shape, color: Color) -> Self {
        Self {
            form: canonical_form(shape),
            shape,
            color,
            x: SPAWN_X,
            y: 0,
        }
    }

    /// Board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..4usize).flat_map(move |y| {
            (0..4usize).filter_map(move |x| {
                if self.form[y][x] {
                    Some((self.x + x as i32, self.y + y as i32))
                } else {
                    None
                }
            })
        })
    }
}
