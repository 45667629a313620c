use ratatui::style::Color;

/// The seven tetromino kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    I, O, T, S, Z, J, L
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::I, PieceType::O, PieceType::T,
        PieceType::S, PieceType::Z, PieceType::J, PieceType::L,
    ];

    /// Maps a draw in `0..7` to a kind. Out-of-range indices wrap.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn color(self) -> Color {
        match self {
            PieceType::I => Color::Cyan,
            PieceType::O => Color::Yellow,
            PieceType::T => Color::Magenta,
            PieceType::S => Color::Green,
            PieceType::Z => Color::Red,
            PieceType::J => Color::Blue,
            PieceType::L => Color::LightYellow,
        }
    }

    /// Spawn-orientation shape matrix.
    pub fn shape(self) -> Vec<Vec<bool>> {
        let rows: &[&[u8]] = match self {
            PieceType::I => &[
                &[0, 0, 0, 0],
                &[1, 1, 1, 1],
                &[0, 0, 0, 0],
                &[0, 0, 0, 0],
            ],
            PieceType::O => &[
                &[1, 1],
                &[1, 1],
            ],
            PieceType::T => &[
                &[0, 1, 0],
                &[1, 1, 1],
                &[0, 0, 0],
            ],
            PieceType::S => &[
                &[0, 1, 1],
                &[1, 1, 0],
                &[0, 0, 0],
            ],
            PieceType::Z => &[
                &[1, 1, 0],
                &[0, 1, 1],
                &[0, 0, 0],
            ],
            PieceType::J => &[
                &[1, 0, 0],
                &[1, 1, 1],
                &[0, 0, 0],
            ],
            PieceType::L => &[
                &[0, 0, 1],
                &[1, 1, 1],
                &[0, 0, 0],
            ],
        };
        rows.iter()
            .map(|row| row.iter().map(|&c| c == 1).collect())
            .collect()
    }
}
