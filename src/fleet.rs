//! Random placement of the standard fleet.

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{DEFAULT_BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Builds boards holding the standard fleet.
///
/// Each ship is retried at random positions until it fits. There is no
/// backtracking: when the attempt budget for the whole fleet runs out the
/// board is thrown away and generation starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetPlacer {
    size: usize,
    max_attempts: usize,
}

impl Default for FleetPlacer {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl FleetPlacer {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Override the attempt budget for one fleet.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// A random ship of `length` anywhere on the board; it may not fit.
    pub fn random_ship<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> Ship {
        let n = self.size as i32;
        let nose = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Ship::new(nose, length, orientation)
    }

    /// Place a ship of `length` on `board`, spending from `attempts`.
    pub fn place_one<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
        length: usize,
        attempts: &mut usize,
    ) -> Result<(), BoardError> {
        loop {
            *attempts += 1;
            if *attempts > self.max_attempts {
                return Err(BoardError::PlacementExhausted {
                    attempts: self.max_attempts,
                });
            }
            match board.add_ship(self.random_ship(rng, length)) {
                Ok(()) => return Ok(()),
                Err(BoardError::PlacementConflict) => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Place every ship in `lengths` onto `board`, then seal it for play.
    pub fn fill<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        board: &mut Board,
        lengths: &[usize],
    ) -> Result<(), BoardError> {
        let mut attempts = 0;
        for &length in lengths {
            self.place_one(rng, board, length, &mut attempts)?;
        }
        board.reset_busy();
        Ok(())
    }

    /// One attempt at a complete board.
    ///
    /// Returns `PlacementExhausted` instead of a partially placed fleet.
    pub fn try_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        let mut board = Board::with_size(self.size)?;
        self.fill(rng, &mut board, &FLEET)?;
        Ok(board)
    }

    /// Generate boards until one holds the full fleet.
    pub fn random_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        let mut restarts = 0usize;
        loop {
            match self.try_board(rng) {
                Ok(board) => {
                    log::debug!("fleet placed after {} restart(s)", restarts);
                    return Ok(board);
                }
                Err(BoardError::PlacementExhausted { attempts }) => {
                    restarts += 1;
                    log::debug!("fleet placement exhausted {} attempts, restarting", attempts);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
