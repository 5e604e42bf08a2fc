//! Game board: cell states, the busy set, placed ships and shot resolution.

use alloc::vec;
use alloc::vec::Vec;

use crate::cell_set::CellSet;
use crate::common::{BoardError, ShotOutcome};
use crate::config::DEFAULT_BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// Busy set of a board; boards up to 11×11 fit in one word.
pub type BusySet = CellSet<u128>;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Water around a destroyed ship, revealed to the shooter.
    Buffer,
}

/// An N×N board holding one fleet.
///
/// The busy set serves two phases. While ships are being placed it holds
/// ship cells and their one-cell padding so that no two ships touch. Once
/// the fleet is complete it is cleared with [`Board::reset_busy`] and from
/// then on holds every targeted cell, so a cell can be shot at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    busy: BusySet,
    ships: Vec<Ship>,
    destroyed: usize,
    hidden: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board of the default size.
    pub fn new() -> Self {
        Self::build(DEFAULT_BOARD_SIZE, BusySet::new(DEFAULT_BOARD_SIZE))
    }

    /// Create an empty `size×size` board.
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        let busy = BusySet::try_new(size)?;
        Ok(Self::build(size, busy))
    }

    fn build(size: usize, busy: BusySet) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
            busy,
            ships: Vec::new(),
            destroyed: 0,
            hidden: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships placed on this board.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships destroyed so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Returns `true` when every placed ship is destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// Whether ship cells are drawn as water.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// True iff `at` lies outside `[0, N)` on either axis.
    pub fn is_out(&self, at: Coordinate) -> bool {
        let n = self.size as i32;
        !(0..n).contains(&at.row) || !(0..n).contains(&at.col)
    }

    /// State of the cell at `at`, `None` when off the board.
    pub fn cell(&self, at: Coordinate) -> Option<Cell> {
        self.index(at).map(|i| self.cells[i])
    }

    pub fn is_busy(&self, at: Coordinate) -> bool {
        self.busy.contains(at)
    }

    /// The busy set itself.
    pub fn busy(&self) -> &BusySet {
        &self.busy
    }

    /// Place `ship`, reserving its cells and their neighbours.
    ///
    /// Fails with `PlacementConflict`, leaving the board untouched, if the
    /// ship has no cells or any cell is off the board, busy or not open water.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.length() == 0
            || ship
                .dots()
                .any(|d| self.busy.contains(d) || self.cell(d) != Some(Cell::Empty))
        {
            return Err(BoardError::PlacementConflict);
        }
        for d in ship.dots() {
            self.set_cell(d, Cell::Ship);
            self.busy.insert(d);
        }
        self.ships.push(ship);
        self.contour(&ship, false);
        Ok(())
    }

    /// Mark the 3×3 neighbourhood of every cell of `ship` as busy.
    ///
    /// With `reveal` only untouched water is reserved, and it is drawn as
    /// [`Cell::Buffer`]; a neighbouring ship keeps its cells targetable.
    fn contour(&mut self, ship: &Ship, reveal: bool) {
        for d in ship.dots() {
            for cur in d.neighbourhood() {
                if self.is_out(cur) {
                    continue;
                }
                if !reveal {
                    self.busy.insert(cur);
                } else if self.cell(cur) == Some(Cell::Empty) && self.busy.insert(cur) {
                    self.set_cell(cur, Cell::Buffer);
                }
            }
        }
    }

    /// Fire at `at` and report what it struck.
    pub fn shot(&mut self, at: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.is_out(at) {
            return Err(BoardError::OutOfBounds);
        }
        if self.busy.contains(at) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.busy.insert(at);

        let Some(idx) = self.ships.iter().position(|s| s.shoot(at)) else {
            self.set_cell(at, Cell::Miss);
            log::debug!("shot at {} missed", at);
            return Ok(ShotOutcome::Miss);
        };

        self.set_cell(at, Cell::Hit);
        if !self.ships[idx].take_hit() {
            log::debug!("shot at {} hit", at);
            return Ok(ShotOutcome::Hit);
        }

        self.destroyed += 1;
        let ship = self.ships[idx];
        self.contour(&ship, true);
        log::debug!(
            "shot at {} sank a {}-cell ship ({}/{} destroyed)",
            at,
            ship.length(),
            self.destroyed,
            self.ships.len()
        );
        Ok(ShotOutcome::Sunk)
    }

    /// Forget placement reservations so play starts with nothing targeted.
    pub fn reset_busy(&mut self) {
        self.busy.clear();
    }

    #[inline]
    fn index(&self, at: Coordinate) -> Option<usize> {
        if self.is_out(at) {
            None
        } else {
            Some(at.row as usize * self.size + at.col as usize)
        }
    }

    fn set_cell(&mut self, at: Coordinate, cell: Cell) {
        if let Some(i) = self.index(at) {
            self.cells[i] = cell;
        }
    }
}
