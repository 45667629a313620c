//! Falling-block puzzle engine.
//!
//! [`game::Game`] owns the whole simulation: board, falling piece, lookahead,
//! score/level/lines and the idle/playing/paused/gameover status. Every command
//! and every gravity tick updates it as one unit. [`scheduler::GameLoop`] pairs a
//! game with a [`scheduler::FrameScheduler`] that only runs while the game is
//! being played.

pub mod config;
pub mod constants;
pub mod game;
pub mod scheduler;

pub use config::GameConfig;
pub use game::{Command, Game, GameEvent, GameStatus};
pub use scheduler::{ClockScheduler, FrameScheduler, GameLoop, ManualScheduler};
