//! A fixed-size cell mask using const generics.
//!
//! The mask is `no_std` friendly and avoids heap allocations. An `N×N` grid
//! is packed into an unsigned integer `T`, row-major, and addressed by
//! [`Position`]. Coordinates outside `0..N` are rejected rather than wrapped.

use core::ops::{BitAnd, BitOr};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;
use crate::position::Position;

/// Mask covering the whole fleet board.
pub type Grid = CellMask<u128, { BOARD_SIZE as usize }>;

/// Errors returned by cell mask operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellMaskError {
    /// Requested grid size N*N exceeds the capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column lies outside `[0..N)`.
    OutOfBounds { row: i32, column: i32 },
}

impl fmt::Display for CellMaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellMaskError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            CellMaskError::OutOfBounds { row, column } => {
                write!(f, "OutOfBounds: row={}, column={}", row, column)
            }
        }
    }
}

/// A fixed-size N×N set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellMask<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn full() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Empty mask, without a capacity check.
    #[inline]
    pub fn new() -> Self {
        CellMask { bits: T::zero() }
    }

    /// Fallible constructor: `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, CellMaskError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(CellMaskError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Whether `(row, column)` lies on the grid.
    #[inline]
    pub fn contains(row: i32, column: i32) -> bool {
        row >= 0 && column >= 0 && (row as usize) < N && (column as usize) < N
    }

    #[inline]
    fn index(pos: &Position) -> Result<usize, CellMaskError> {
        let (row, column) = (pos.row(), pos.column());
        if Self::contains(row, column) {
            Ok(row as usize * N + column as usize)
        } else {
            Err(CellMaskError::OutOfBounds { row, column })
        }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn get(&self, pos: &Position) -> Result<bool, CellMaskError> {
        let idx = Self::index(pos)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    pub fn set(&mut self, pos: &Position) -> Result<(), CellMaskError> {
        let idx = Self::index(pos)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Build a mask from cells; fails on the first off-grid cell.
    pub fn from_positions<'a, I>(iter: I) -> Result<Self, CellMaskError>
    where
        I: IntoIterator<Item = &'a Position>,
    {
        let mut mask = Self::new();
        for pos in iter {
            mask.set(pos)?;
        }
        Ok(mask)
    }

    /// Set cells in row-major order.
    pub fn iter_cells(&self) -> Cells<'_, T, N> {
        Cells { mask: self, idx: 0 }
    }

    /// Grow the mask by one cell in all 8 directions, clipped to the grid.
    pub fn dilate(&self) -> Self {
        let mut grown = *self;
        for pos in self.iter_cells() {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    // Off-grid neighbours are simply dropped.
                    if let Some(next) = pos.offset(dr, dc) {
                        let _ = grown.set(&next);
                    }
                }
            }
        }
        grown
    }

    #[inline]
    fn from_raw(raw: T) -> Self {
        CellMask {
            bits: raw & Self::full(),
        }
    }
}

impl<T, const N: usize> Default for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = ((self.bits >> (r * N + c)) & T::one()) != T::zero();
                write!(f, "{} ", if bit { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a mask.
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    mask: &'a CellMask<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.mask.bits >> idx) & T::one()) != T::zero() {
                return Some(Position::new((idx / N) as i32, (idx % N) as i32));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const N: usize> BitOr for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(self.bits | rhs.bits)
    }
}
