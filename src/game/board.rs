use ratatui::style::Color;
use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::piece::Piece;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Filled(Color),
}

pub type Board = [[Cell; BOARD_WIDTH]; BOARD_HEIGHT];

pub fn empty_board() -> Board {
    [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT]
}

/// Whether `piece` fits on `board`. Cells above the top row are allowed.
pub fn is_valid(piece: &Piece, board: &Board) -> bool {
    for (x, y) in piece.get_blocks() {
        if x < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
            return false;
        }
        if y >= 0 && board[y as usize][x as usize] != Cell::Empty {
            return false;
        }
    }
    true
}

/// Returns a copy of `board` with the piece's cells written in its color.
/// Cells above the top row are dropped.
pub fn merge(piece: &Piece, board: &Board) -> Board {
    let mut merged = *board;
    for (x, y) in piece.get_blocks() {
        if y >= 0 && y < BOARD_HEIGHT as i32 && x >= 0 && x < BOARD_WIDTH as i32 {
            merged[y as usize][x as usize] = Cell::Filled(piece.color);
        }
    }
    merged
}

pub fn is_row_full(row: &[Cell; BOARD_WIDTH]) -> bool {
    row.iter().all(|&cell| cell != Cell::Empty)
}

/// Removes every full row, compacting the rest downward.
/// Returns the new board and the number of rows removed.
pub fn clear_lines(board: &Board) -> (Board, u32) {
    let mut cleared = empty_board();
    let mut lines_cleared = 0;
    let mut write_row = BOARD_HEIGHT;

    // Start from bottom and work up, copying non-full rows down
    for read_row in (0..BOARD_HEIGHT).rev() {
        if is_row_full(&board[read_row]) {
            lines_cleared += 1;
        } else {
            write_row -= 1;
            cleared[write_row] = board[read_row];
        }
    }

    (cleared, lines_cleared)
}
