use crate::constants::WALL_KICK_OFFSETS;
use crate::game::board::{is_valid, Board};
use crate::game::piece::Piece;

/// Rotates `piece` clockwise, trying each horizontal kick in order.
/// Returns `None` when no offset yields a valid placement.
pub fn try_rotate(piece: &Piece, board: &Board) -> Option<Piece> {
    let rotated = piece.rotated();

    WALL_KICK_OFFSETS
        .iter()
        .map(|&kick_x| rotated.shifted(kick_x, 0))
        .find(|kicked| is_valid(kicked, board))
}
