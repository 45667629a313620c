use std::time::Duration;

use crate::config::GameConfig;
use crate::constants::{HARD_DROP_POINTS_PER_CELL, SOFT_DROP_POINTS};
use crate::game::board::{clear_lines, empty_board, is_valid, merge, Board};
use crate::game::command::Command;
use crate::game::event::GameEvent;
use crate::game::generator::PieceGenerator;
use crate::game::piece::Piece;
use crate::game::rotation::try_rotate;
use crate::game::scoring::{drop_interval, level_for_lines, line_clear_reward};
use crate::game::tetromino::PieceType;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Idle,
    Playing,
    Paused,
    GameOver,
}

#[derive(Debug)]
pub struct Game {
    board: Board,
    current_piece: Option<Piece>,
    next_piece_type: PieceType,
    score: u32,
    lines: u32,
    level: u32,
    status: GameStatus,
    generator: PieceGenerator,
    last_drop: Option<u64>,  // Timestamp (ms) of the last gravity step
    last_frame: Option<u64>, // Timestamp (ms) of the latest tick
    paused_at: Option<u64>,  // Latest tick before a pause, until play resumes
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let mut generator = PieceGenerator::new(config.randomizer, config.seed);
        let next_piece_type = generator.next_piece_type();

        Self {
            board: empty_board(),
            current_piece: None,
            next_piece_type,
            score: 0,
            lines: 0,
            level: 1,
            status: GameStatus::Idle,
            generator,
            last_drop: None,
            last_frame: None,
            paused_at: None,
            events: Vec::new(),
        }
    }

    /// A game already in progress on `board` with `piece` falling.
    pub fn with_board(config: &GameConfig, board: Board, piece: Piece) -> Self {
        let mut game = Self::new(config);
        game.board = board;
        game.current_piece = Some(piece);
        game.status = GameStatus::Playing;
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current_piece.as_ref()
    }

    pub fn next_piece_type(&self) -> PieceType {
        self.next_piece_type
    }

    /// The lookahead piece as it will appear when spawned.
    pub fn next_piece(&self) -> Piece {
        Piece::spawn(self.next_piece_type)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn drop_interval(&self) -> Duration {
        drop_interval(self.level)
    }

    /// Drains the recorded events. The queue grows until drained.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Dispatches a command. Returns whether it changed anything.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::TogglePause => self.toggle_pause(),
            Command::MoveLeft => self.move_piece(-1, 0),
            Command::MoveRight => self.move_piece(1, 0),
            Command::SoftDrop => self.soft_drop(),
            Command::Rotate => self.rotate_piece(),
            Command::HardDrop => self.hard_drop(),
        }
    }

    pub fn start(&mut self) -> bool {
        if !matches!(self.status, GameStatus::Idle | GameStatus::GameOver) {
            return false;
        }

        self.board = empty_board();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.last_drop = None;
        self.last_frame = None;
        self.paused_at = None;
        self.next_piece_type = self.generator.next_piece_type();
        self.status = GameStatus::Playing;
        self.events.push(GameEvent::Started);
        self.spawn_piece();
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                self.paused_at = self.last_frame;
                self.events.push(GameEvent::Paused);
            }
            GameStatus::Paused => {
                self.status = GameStatus::Playing;
                self.events.push(GameEvent::Resumed);
            }
            _ => return false,
        }
        true
    }

    pub fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        if let Some(ref piece) = self.current_piece {
            let test_piece = piece.shifted(dx, dy);
            if is_valid(&test_piece, &self.board) {
                self.current_piece = Some(test_piece);
                return true;
            }
        }
        false
    }

    /// One manual step down, worth a point. Locks when blocked.
    pub fn soft_drop(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        if self.move_piece(0, 1) {
            self.score += SOFT_DROP_POINTS;
        } else {
            self.lock_piece();
        }
        true
    }

    pub fn rotate_piece(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        let rotated = self
            .current_piece
            .as_ref()
            .and_then(|piece| try_rotate(piece, &self.board));
        match rotated {
            Some(piece) => {
                self.current_piece = Some(piece);
                true
            }
            None => false,
        }
    }

    /// Drops to the resting row and locks in the same step.
    pub fn hard_drop(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        let Some(ghost) = self.ghost_piece() else {
            return false;
        };
        let distance = self
            .current_piece
            .as_ref()
            .map_or(0, |piece| ghost.y - piece.y);

        self.score += distance as u32 * HARD_DROP_POINTS_PER_CELL;
        self.current_piece = Some(ghost);
        self.lock_piece();
        true
    }

    /// Row the current piece would rest on if dropped now.
    pub fn ghost_y(&self) -> Option<i32> {
        self.ghost_piece().map(|ghost| ghost.y)
    }

    pub fn ghost_piece(&self) -> Option<Piece> {
        let current_piece = self.current_piece.as_ref()?;
        let mut ghost = current_piece.clone();

        // Drop the ghost piece as far down as possible
        while is_valid(&ghost.shifted(0, 1), &self.board) {
            ghost.y += 1;
        }
        Some(ghost)
    }

    /// Advances gravity to the monotonic timestamp `now` (milliseconds).
    pub fn tick(&mut self, now: u64) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.last_frame = Some(now);
        // Time spent paused does not count toward the next drop
        if let Some(paused_at) = self.paused_at.take() {
            if let Some(last_drop) = self.last_drop.as_mut() {
                *last_drop += now.saturating_sub(paused_at);
            }
        }
        let last_drop = *self.last_drop.get_or_insert(now);
        let interval = self.drop_interval().as_millis() as u64;

        if now.saturating_sub(last_drop) >= interval {
            self.last_drop = Some(now);
            if !self.move_piece(0, 1) {
                self.lock_piece();
            }
        }
    }

    /// Merges the current piece, clears rows, scores, and spawns the next piece.
    fn lock_piece(&mut self) {
        let Some(piece) = self.current_piece.take() else {
            return;
        };

        let (board, cleared) = clear_lines(&merge(&piece, &self.board));
        self.board = board;
        self.events.push(GameEvent::PieceLocked);
        self.update_lines(cleared);

        self.spawn_piece();
        // Measured from the latest frame, at most one frame before the lock
        self.last_drop = self.last_frame;
    }

    fn update_lines(&mut self, cleared: u32) {
        if cleared == 0 {
            return;
        }

        self.score += line_clear_reward(cleared, self.level);
        self.lines += cleared;
        self.events.push(GameEvent::LinesCleared(cleared));

        let level = level_for_lines(self.lines);
        if level > self.level {
            self.level = level;
            self.events.push(GameEvent::LevelUp(level));
        }
    }

    fn spawn_piece(&mut self) {
        let piece = Piece::spawn(self.next_piece_type);
        self.next_piece_type = self.generator.next_piece_type();

        if is_valid(&piece, &self.board) {
            self.current_piece = Some(piece);
        } else {
            self.current_piece = None;
            self.status = GameStatus::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
        }
    }
}
