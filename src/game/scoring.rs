//! Score, level and gravity rules.

use std::time::Duration;

use crate::constants::{
    BASE_DROP_INTERVAL, DROP_INTERVAL_STEP, LINES_PER_LEVEL, LINE_CLEAR_REWARDS,
    MIN_DROP_INTERVAL,
};

/// Points for clearing `lines` rows in a single lock at `level`.
pub fn line_clear_reward(lines: u32, level: u32) -> u32 {
    LINE_CLEAR_REWARDS
        .get(lines as usize)
        .map_or(0, |&base| base * level)
}

/// Level for a running total of cleared lines. Starts at 1.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval at `level`, never below the floor.
pub fn drop_interval(level: u32) -> Duration {
    let reduction = u64::from(level.saturating_sub(1)) * DROP_INTERVAL_STEP;
    let ms = BASE_DROP_INTERVAL
        .saturating_sub(reduction)
        .max(MIN_DROP_INTERVAL);
    Duration::from_millis(ms)
}
