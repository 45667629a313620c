/// Notifications recorded by the engine and drained by observers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    PieceLocked,
    LinesCleared(u32),
    LevelUp(u32),
    GameOver { score: u32 },
}
