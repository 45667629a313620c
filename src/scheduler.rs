//! Frame scheduling for the gravity loop.
//!
//! A [`FrameScheduler`] hands out monotonic millisecond timestamps while it is
//! running. [`GameLoop`] keeps it running exactly while the game is being played,
//! so no frame can reach a paused, finished or idle game.

use std::collections::VecDeque;
use std::time::Instant;

use crate::game::{Command, Game, GameEvent, GameStatus};

pub trait FrameScheduler {
    fn start(&mut self);

    /// Stops the scheduler and discards any frame not yet delivered.
    fn cancel(&mut self);

    fn is_running(&self) -> bool;

    /// Timestamp of the next frame, or `None` while stopped.
    fn next_frame(&mut self) -> Option<u64>;
}

/// Frames stamped from a monotonic clock. The caller sets the cadence.
#[derive(Debug)]
pub struct ClockScheduler {
    origin: Instant,
    running: bool,
}

impl ClockScheduler {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            running: false,
        }
    }
}

impl Default for ClockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for ClockScheduler {
    fn start(&mut self) {
        self.running = true;
    }

    fn cancel(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn next_frame(&mut self) -> Option<u64> {
        self.running
            .then(|| self.origin.elapsed().as_millis() as u64)
    }
}

/// Frames queued by hand, for driving a game deterministically.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    running: bool,
    pending: VecDeque<u64>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_frame(&mut self, now: u64) {
        self.pending.push_back(now);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl FrameScheduler for ManualScheduler {
    fn start(&mut self) {
        self.running = true;
    }

    fn cancel(&mut self) {
        self.running = false;
        self.pending.clear();
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn next_frame(&mut self) -> Option<u64> {
        if !self.running {
            return None;
        }
        self.pending.pop_front()
    }
}

#[derive(Debug)]
pub struct GameLoop<S: FrameScheduler> {
    game: Game,
    scheduler: S,
}

impl<S: FrameScheduler> GameLoop<S> {
    pub fn new(game: Game, scheduler: S) -> Self {
        let mut game_loop = Self { game, scheduler };
        game_loop.sync_scheduler();
        game_loop
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.game.take_events()
    }

    pub fn dispatch(&mut self, command: Command) -> bool {
        let changed = self.game.handle(command);
        self.sync_scheduler();
        changed
    }

    /// Delivers one frame to the game if the scheduler has one.
    pub fn pump(&mut self) -> bool {
        let Some(now) = self.scheduler.next_frame() else {
            return false;
        };
        self.game.tick(now);
        self.sync_scheduler();
        true
    }

    fn sync_scheduler(&mut self) {
        let playing = self.game.status() == GameStatus::Playing;
        if playing && !self.scheduler.is_running() {
            self.scheduler.start();
        } else if !playing && self.scheduler.is_running() {
            self.scheduler.cancel();
        }
    }
}
