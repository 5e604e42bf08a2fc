//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, Combatant, Coordinate, FleetPlacer, HumanCombatant, MatchController,
    MatchState, Orientation, ScriptedCombatant, Ship, ShotOutcome, Side, TurnError,
};

#[cfg(feature = "std")]
pub use crate::console::{greet, ConsoleInput};
#[cfg(feature = "std")]
pub use crate::init_logging;
