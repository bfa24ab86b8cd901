//! Core game constants

/// Time units in one normal-speed turn; durations are stored in these units.
pub const BASELINE_DELAY: i32 = 10;

/// Highest piety a god can grant
pub const MAX_PIETY: i32 = 200;

/// Experience level cap
pub const MAX_EXP_LEVEL: i32 = 27;

/// Base movement cost of a normal-speed creature
pub const NORMAL_MOVE_COST: i32 = 10;

/// Default number of messages kept in the history
pub const DEFAULT_MSG_HISTORY: usize = 100;

/// Turns left on a transformation when the "almost over" warning fires
pub const TRANSFORM_WARN_TURNS: i32 = 6;
