//! A fixed-capacity set of board cells packed into an unsigned integer.
//!
//! The set is `no_std` friendly and never allocates. Cells of an `n×n`
//! board are stored row-major in the word `T`, so `n * n` must not exceed
//! the bit width of `T`. The board uses it as its busy set.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coordinate::Coordinate;

/// Errors returned by cell set operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellSetError {
    /// Requested board size n*n exceeds the capacity of `T`.
    SizeTooLarge { n: usize, capacity: usize },
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSetError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: n*n={} exceeds capacity={}", n * n, capacity)
            }
        }
    }
}

/// Set of cells of an `n×n` board stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    n: usize,
}

impl<T> CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits available in `T`.
    pub fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Empty set for an `n×n` board without the capacity check.
    #[inline]
    pub fn new(n: usize) -> Self {
        debug_assert!(n * n <= Self::capacity());
        CellSet { bits: T::zero(), n }
    }

    /// Empty set for an `n×n` board; fails when the board does not fit in `T`.
    pub fn try_new(n: usize) -> Result<Self, CellSetError> {
        let capacity = Self::capacity();
        if n * n > capacity {
            Err(CellSetError::SizeTooLarge { n, capacity })
        } else {
            Ok(CellSet { bits: T::zero(), n })
        }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `at` is in the set. Cells off the board are never members.
    pub fn contains(&self, at: Coordinate) -> bool {
        match self.index(at) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `at`; returns `false` if it was already present or lies off the board.
    pub fn insert(&mut self, at: Coordinate) -> bool {
        match self.index(at) {
            Some(idx) => {
                let bit = T::one() << idx;
                let fresh = (self.bits & bit).is_zero();
                self.bits = self.bits | bit;
                fresh
            }
            None => false,
        }
    }

    /// Removes every cell.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Iterator over the cells in the set, row-major.
    pub fn iter(&self) -> Cells<'_, T> {
        Cells { set: self, idx: 0 }
    }

    #[inline]
    fn index(&self, at: Coordinate) -> Option<usize> {
        let n = self.n as i32;
        if at.row < 0 || at.col < 0 || at.row >= n || at.col >= n {
            None
        } else {
            Some(at.row as usize * self.n + at.col as usize)
        }
    }
}

impl<T> fmt::Debug for CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}x{}>:", self.n, self.n)?;
        for r in 0..self.n {
            for c in 0..self.n {
                let idx = r * self.n + c;
                let bit = if ((self.bits >> idx) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the cells of a `CellSet`.
#[derive(Clone, Copy)]
pub struct Cells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    set: &'a CellSet<T>,
    idx: usize,
}

impl<'a, T> Iterator for Cells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.set.n;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if ((self.set.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx / n) as i32, (idx % n) as i32));
            }
        }
        None
    }
}
