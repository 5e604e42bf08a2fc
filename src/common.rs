//! Common types for sea battle: shot outcomes and the error taxonomy.

use crate::cell_set::CellSetError;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck water.
    Miss,
    /// Shot destroyed the last live cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter moves again after this outcome.
    pub fn grants_repeat(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Shot coordinate lies outside the grid.
    OutOfBounds,
    /// Shot coordinate was already targeted.
    AlreadyTargeted,
    /// Ship leaves the grid, overlaps or touches another ship.
    PlacementConflict,
    /// Fleet generation ran out of attempts; the board must be regenerated.
    PlacementExhausted { attempts: usize },
    /// Grid size does not fit the busy set.
    CellSet(CellSetError),
}

impl From<CellSetError> for BoardError {
    fn from(err: CellSetError) -> Self {
        BoardError::CellSet(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Shot lands outside the board"),
            BoardError::AlreadyTargeted => write!(f, "This cell has already been targeted"),
            BoardError::PlacementConflict => {
                write!(f, "Ship leaves the board or touches another ship")
            }
            BoardError::PlacementExhausted { attempts } => {
                write!(f, "Unable to place the fleet after {} attempts", attempts)
            }
            BoardError::CellSet(e) => write!(f, "Cell set error: {}", e),
        }
    }
}

/// Errors that end a move without a resolved shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// The human's input stream ended.
    InputClosed,
    /// Too many consecutive targets were rejected in one move.
    Stalled { attempts: usize },
}

impl core::fmt::Display for TurnError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TurnError::InputClosed => write!(f, "Input closed before a target was chosen"),
            TurnError::Stalled { attempts } => {
                write!(f, "No valid target found after {} attempts", attempts)
            }
        }
    }
}

/// Errors returned when validating a `MatchConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BoardSize { size: usize, min: usize, max: usize },
    ScriptedSpan { span: usize, board_size: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::BoardSize { size, min, max } => {
                write!(f, "Board size {} must be between {} and {}", size, min, max)
            }
            ConfigError::ScriptedSpan { span, board_size } => write!(
                f,
                "Scripted target span {} must be between 1 and the board size {}",
                span, board_size
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for TurnError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
