pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Gravity (in milliseconds)
pub const BASE_DROP_INTERVAL: u64 = 1000; // Interval at level 1
pub const DROP_INTERVAL_STEP: u64 = 100;  // Removed per level gained
pub const MIN_DROP_INTERVAL: u64 = 100;

// Frontend frame period (in milliseconds)
pub const FRAME_PERIOD: u64 = 16;

pub const LINES_PER_LEVEL: u32 = 10;

// Reward per lock event, indexed by cleared rows (0..=4), multiplied by level
pub const LINE_CLEAR_REWARDS: [u32; 5] = [0, 100, 300, 500, 800];
pub const SOFT_DROP_POINTS: u32 = 1;
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

// Horizontal offsets tried after a rotation, in order
pub const WALL_KICK_OFFSETS: [i32; 5] = [0, -1, 1, -2, 2];
