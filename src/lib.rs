#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::{Mode, TargetingEngine};
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::{neighbors, Board};
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use ship::{positions_for, Orientation, Positions, Ship, ShipType};
