/// Player commands, independent of any key binding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Command {
    Start,
    TogglePause,
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
}
