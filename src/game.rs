use crate::{
    address::{classify, generate_random_address, minimum_prefix_for},
    common::Classification,
    config::{HIGH_SCORE_KEY, MAX_HEARTS, MAX_PREFIX, ROUND_SECONDS},
    counter::SubnetCounter,
    store::ScoreStore,
};
use core::net::Ipv4Addr;
use core::ops::RangeInclusive;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::ToString};

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum Phase {
    /// Waiting for the player to stop the prefix counter.
    Selection,
    /// The address is special-use; the player names its category.
    SpecialAddress,
    /// The address is ordinary; the player computes its boundaries.
    Calculation,
    /// Out of hearts. Only [`Session::restart`] leaves this phase.
    GameOver,
}

/// Read-only snapshot of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SessionState {
    pub current_address: Option<Ipv4Addr>,
    pub subnet_mask: u8,
    pub hearts: u8,
    pub round: u32,
    pub time_remaining: u16,
    pub high_score: u32,
    pub phase: Phase,
    pub special_address_info: Option<Classification>,
}

/// What a single timer tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is over; the clock is stopped.
    Stopped,
    /// Time left in the round after this tick.
    Running(u16),
    /// The clock ran out: one heart lost and the round was skipped.
    TimedOut,
    /// The clock ran out and took the last heart.
    GameOver,
}

/// Owns all mutable game state and its transition rules.
pub struct Session {
    rng: SmallRng,
    store: Box<dyn ScoreStore>,
    current_address: Option<Ipv4Addr>,
    subnet_mask: u8,
    hearts: u8,
    round: u32,
    time_remaining: u16,
    high_score: u32,
    phase: Phase,
    special_address_info: Option<Classification>,
}

impl Session {
    /// Fresh session with default counters and no address drawn yet.
    pub fn new(rng: SmallRng, store: Box<dyn ScoreStore>) -> Self {
        Self {
            rng,
            store,
            current_address: None,
            subnet_mask: 0,
            hearts: MAX_HEARTS,
            round: 1,
            time_remaining: ROUND_SECONDS,
            high_score: 0,
            phase: Phase::Selection,
            special_address_info: None,
        }
    }

    /// Session with a reproducible address sequence.
    pub fn with_seed(seed: u64, store: Box<dyn ScoreStore>) -> Self {
        Self::new(SmallRng::seed_from_u64(seed), store)
    }

    /// Load the saved high score and draw the first address.
    pub fn begin(&mut self) {
        self.load_high_score();
        self.start_round();
    }

    pub fn current_address(&self) -> Option<Ipv4Addr> {
        self.current_address
    }

    pub fn subnet_mask(&self) -> u8 {
        self.subnet_mask
    }

    pub fn hearts(&self) -> u8 {
        self.hearts
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Round reached when the session ended, shown on the game-over screen.
    pub fn rounds_completed(&self) -> u32 {
        self.round
    }

    pub fn time_remaining(&self) -> u16 {
        self.time_remaining
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn special_address_info(&self) -> Option<&Classification> {
        self.special_address_info.as_ref()
    }

    /// Prefix lengths that may be offered for the current address.
    pub fn allowed_prefixes(&self) -> RangeInclusive<u8> {
        let lower = self
            .current_address
            .map(minimum_prefix_for)
            .unwrap_or(crate::config::MIN_PREFIX);
        lower..=MAX_PREFIX
    }

    /// Counter bounded to [`allowed_prefixes`](Self::allowed_prefixes).
    pub fn counter(&self) -> SubnetCounter {
        SubnetCounter::new(*self.allowed_prefixes().start())
    }

    /// Snapshot of every observable field.
    pub fn state(&self) -> SessionState {
        SessionState {
            current_address: self.current_address,
            subnet_mask: self.subnet_mask,
            hearts: self.hearts,
            round: self.round,
            time_remaining: self.time_remaining,
            high_score: self.high_score,
            phase: self.phase,
            special_address_info: self.special_address_info,
        }
    }

    /// Draw and classify a new address and wait for a prefix.
    ///
    /// Ignored once the game is over.
    pub fn start_round(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        let addr = generate_random_address(&mut self.rng);
        self.current_address = Some(addr);
        self.special_address_info = classify(addr);
        self.subnet_mask = 0;
        self.phase = Phase::Selection;
        log::debug!(
            "round {}: {} ({:?})",
            self.round,
            addr,
            self.special_address_info.map(|c| c.category)
        );
    }

    /// Lock in a prefix and route to the special-address or calculation phase.
    ///
    /// Ignored outside [`Phase::Selection`], before an address exists, and for
    /// a prefix of 0. Keeping `prefix` within
    /// [`allowed_prefixes`](Self::allowed_prefixes) is up to the caller.
    pub fn select_subnet_mask(&mut self, prefix: u8) {
        if self.phase != Phase::Selection || self.current_address.is_none() || prefix == 0 {
            return;
        }
        self.subnet_mask = prefix;
        self.phase = if self.special_address_info.is_some() {
            Phase::SpecialAddress
        } else {
            Phase::Calculation
        };
        log::debug!("selected /{} -> {:?}", prefix, self.phase);
    }

    /// Feed a graded answer into the session.
    ///
    /// A correct answer advances to the next round. A wrong one costs a heart
    /// and leaves the round in place. Ignored once the game is over.
    pub fn register_outcome(&mut self, correct: bool) {
        if self.phase == Phase::GameOver {
            return;
        }
        if correct {
            self.next_round();
        } else {
            self.lose_heart();
        }
    }

    /// Advance the round clock by one second.
    ///
    /// Running out of time costs a heart and, if any remain, also skips to the
    /// next round.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == Phase::GameOver {
            return TickOutcome::Stopped;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return TickOutcome::Running(self.time_remaining);
        }
        log::debug!("round {} timed out", self.round);
        self.lose_heart();
        if self.hearts > 0 {
            self.next_round();
            TickOutcome::TimedOut
        } else {
            TickOutcome::GameOver
        }
    }

    /// Reset everything but the high score and start over.
    pub fn restart(&mut self) {
        self.current_address = None;
        self.subnet_mask = 0;
        self.hearts = MAX_HEARTS;
        self.round = 1;
        self.time_remaining = ROUND_SECONDS;
        self.phase = Phase::Selection;
        self.special_address_info = None;
        self.start_round();
    }

    /// Replace the in-memory high score with the stored one, if readable.
    pub fn load_high_score(&mut self) {
        match self.store.get(HIGH_SCORE_KEY) {
            Ok(Some(saved)) => match saved.trim().parse::<u32>() {
                Ok(score) => self.high_score = score,
                Err(_) => log::warn!("ignoring unreadable high score {:?}", saved),
            },
            Ok(None) => {}
            Err(e) => log::warn!("failed to load high score: {}", e),
        }
    }

    /// Persist the in-memory high score. Failures are logged and dropped.
    pub fn save_high_score(&mut self) {
        let value = self.high_score.to_string();
        if let Err(e) = self.store.set(HIGH_SCORE_KEY, &value) {
            log::warn!("failed to save high score: {}", e);
        }
    }

    fn next_round(&mut self) {
        self.round += 1;
        self.time_remaining = ROUND_SECONDS;
        self.subnet_mask = 0;
        self.phase = Phase::Selection;
        self.start_round();
    }

    fn lose_heart(&mut self) {
        self.hearts = self.hearts.saturating_sub(1);
        if self.hearts == 0 {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        self.phase = Phase::GameOver;
        if self.round > self.high_score {
            self.high_score = self.round;
            log::info!("new high score: {}", self.high_score);
            self.save_high_score();
        }
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
