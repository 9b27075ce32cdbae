//! Application-wide gameplay constants.
//! Durations are expressed in milliseconds unless noted otherwise.

/// Symbol palette boards draw from. A level uses the first `pair_count`
/// entries, each duplicated once.
pub const SYMBOLS: [&str; 8] = ["🍎", "🍌", "🍇", "🍉", "🍒", "🥝", "🍍", "🥥"];

/// Pairs per level, played in this order.
pub const LEVEL_PAIRS: [usize; 3] = [2, 4, 6];

/// How long a mismatched pair stays face-up before flipping back (ms).
pub const MISMATCH_DELAY_MS: u32 = 700;

/// Pause between clearing a level and dealing the next board (ms).
pub const LEVEL_ADVANCE_DELAY_MS: u32 = 1200;

/// Period of the elapsed-time ticker (ms).
pub const TIMER_TICK_MS: u32 = 100;
