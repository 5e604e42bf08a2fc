#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cell_set;
mod combatant;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod console;
mod coordinate;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod render;
mod ship;

pub use board::*;
pub use cell_set::{CellSet, CellSetError, Cells};
pub use combatant::*;
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use fleet::FleetPlacer;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{env_level, init_logging, LOG_ENV};
pub use ship::*;
