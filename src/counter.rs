//! Cycling prefix counter the player stops to pick a mask.

use crate::config::{MAX_PREFIX, MIN_PREFIX};

/// Counter stepping through `lower..=32` and wrapping back to `lower`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetCounter {
    lower: u8,
    current: u8,
}

impl SubnetCounter {
    /// Counter starting at `lower`, clamped into `MIN_PREFIX..=MAX_PREFIX`.
    pub fn new(lower: u8) -> Self {
        let lower = lower.clamp(MIN_PREFIX, MAX_PREFIX);
        Self {
            lower,
            current: lower,
        }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    /// Step once and return the new value.
    pub fn advance(&mut self) -> u8 {
        self.current = if self.current >= MAX_PREFIX {
            self.lower
        } else {
            self.current + 1
        };
        self.current
    }
}
