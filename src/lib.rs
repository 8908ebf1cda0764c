#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
mod interface;
#[cfg(feature = "std")]
mod logging;
mod messages;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod players;
pub mod prelude;
pub mod query;
mod render;
mod ship;
pub mod turn;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use interface::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use messages::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use players::*;
pub use query::{query, try_query, Column, Fetch};
pub use render::*;
pub use ship::*;
pub use turn::{fire, render_system, resolve, scan_for_survivors, strike, Resolution, Scan, Shot, Turn};
