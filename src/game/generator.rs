use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::game::tetromino::PieceType;

/// How the next piece is chosen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Randomizer {
    /// Every draw is independent and uniform over the seven kinds.
    #[default]
    Uniform,
    /// Shuffled bags of all seven kinds, refilled when exhausted.
    Bag,
}

#[derive(Debug)]
pub struct PieceGenerator {
    randomizer: Randomizer,
    rng: StdRng,
    piece_bag: Vec<PieceType>,
}

impl PieceGenerator {
    pub fn new(randomizer: Randomizer, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            randomizer,
            rng,
            piece_bag: Vec::new(),
        }
    }

    fn fill_bag(&mut self) {
        self.piece_bag = PieceType::ALL.to_vec();
        self.piece_bag.shuffle(&mut self.rng);
    }

    pub fn next_piece_type(&mut self) -> PieceType {
        match self.randomizer {
            Randomizer::Uniform => {
                PieceType::from_index(self.rng.gen_range(0..PieceType::ALL.len()))
            }
            Randomizer::Bag => loop {
                if let Some(kind) = self.piece_bag.pop() {
                    return kind;
                }
                self.fill_bag();
            },
        }
    }
}

impl Iterator for PieceGenerator {
    type Item = PieceType;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_piece_type())
    }
}
