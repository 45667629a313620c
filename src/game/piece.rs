use ratatui::style::Color;
use crate::constants::BOARD_WIDTH;
use crate::game::tetromino::PieceType;

pub type Shape = Vec<Vec<bool>>;

#[derive(Clone, PartialEq, Debug)]
pub struct Piece {
    pub piece_type: PieceType,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Piece {
    /// A fresh piece centered horizontally on the top row.
    pub fn spawn(piece_type: PieceType) -> Self {
        let shape = piece_type.shape();
        let width = shape_width(&shape) as i32;

        Self {
            piece_type,
            shape,
            x: BOARD_WIDTH as i32 / 2 - width / 2,
            y: 0,
            color: piece_type.color(),
        }
    }

    pub fn width(&self) -> usize {
        shape_width(&self.shape)
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut moved = self.clone();
        moved.x += dx;
        moved.y += dy;
        moved
    }

    pub fn rotated(&self) -> Self {
        let mut rotated = self.clone();
        rotated.shape = rotate(&self.shape);
        rotated
    }

    /// Absolute board coordinates `(x, y)` of every filled cell.
    pub fn get_blocks(&self) -> Vec<(i32, i32)> {
        let mut blocks = Vec::new();
        for (i, row) in self.shape.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell {
                    blocks.push((self.x + j as i32, self.y + i as i32));
                }
            }
        }
        blocks
    }
}

fn shape_width(shape: &Shape) -> usize {
    shape.first().map_or(0, Vec::len)
}

/// Rotates a shape 90° clockwise: output row `i` is input column `i` read bottom-up.
pub fn rotate(shape: &Shape) -> Shape {
    let rows = shape.len();
    let cols = shape_width(shape);
    (0..cols)
        .map(|i| (0..rows).map(|j| shape[rows - 1 - j][i]).collect())
        .collect()
}
