#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
mod player;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, resolve_level, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use ui::*;
