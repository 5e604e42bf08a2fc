//! Ships: a straight run of cells extending from a nose coordinate.

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the column axis.
    Horizontal,
    /// Extends along the row axis.
    Vertical,
}

impl Orientation {
    /// Step applied per cell, as (row, col).
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship anchored at its nose, with remaining health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    nose: Coordinate,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Create an undamaged ship of `length` cells starting at `nose`.
    pub fn new(nose: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            length,
            nose,
            orientation,
            health: length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn nose(&self) -> Coordinate {
        self.nose
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Occupied cells, walked from the nose along the orientation.
    pub fn dots(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let nose = self.nose;
        (0..self.length as i32).map(move |i| nose.offset(dr * i, dc * i))
    }

    /// Whether `shot` lands on one of this ship's cells.
    pub fn shoot(&self, shot: Coordinate) -> bool {
        self.dots().any(|d| d == shot)
    }

    /// Register one hit; returns `true` if this destroyed the ship.
    pub fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }
}
