pub mod board;
pub mod command;
pub mod event;
pub mod generator;
pub mod piece;
pub mod rotation;
pub mod scoring;
pub mod state;
pub mod tetromino;

pub use board::{Board, Cell};
pub use command::Command;
pub use event::GameEvent;
pub use generator::{PieceGenerator, Randomizer};
pub use piece::Piece;
pub use state::{Game, GameStatus};
pub use tetromino::PieceType;
