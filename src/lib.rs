#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod address;
mod common;
mod config;
mod counter;
mod game;
mod grade;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod ranges;
mod store;
mod subnet;

pub use address::*;
pub use common::*;
pub use config::*;
pub use counter::*;
pub use game::*;
pub use grade::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ranges::*;
pub use store::*;
pub use subnet::*;
