//! Commonly used types and utilities for ease of import.

pub use crate::{
    classify, compute_boundaries, generate_random_address, is_syntactically_valid,
    minimum_prefix_for, Category, Classification, Phase, PlayerSelection, Session,
    SessionState, SubnetBoundaries,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliGame, FileStore};
