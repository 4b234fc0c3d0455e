/// Lives at the start of a session.
pub const MAX_HEARTS: u8 = 5;
/// Seconds on the clock at the start of every round.
pub const ROUND_SECONDS: u16 = 120;
/// Key under which the high score is persisted.
pub const HIGH_SCORE_KEY: &str = "ipv4-game-highscore";

/// Smallest prefix length the game will ever offer.
pub const MIN_PREFIX: u8 = 1;
/// Largest prefix length (a single host).
pub const MAX_PREFIX: u8 = 32;

/// Period of the prefix counter animation, in milliseconds.
pub const COUNTER_STEP_MS: u64 = 100;
/// Period of the round timer, in milliseconds.
pub const TICK_MS: u64 = 1000;
