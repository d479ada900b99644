// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Dense two-dimensional maps
//!
//! Every product of the carving pipeline is the same shape: a dense,
//! row-major rectangle of some small copyable value.  The pixel buffer
//! is a rectangle of RGBA quads, the luminance and energy maps are
//! rectangles of floats, the cumulative cost table is another.  One
//! container serves them all, so the index arithmetic exists in
//! exactly one place.

use crate::error::CarveError;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of `P`, stored row-major.
/// Addressed exclusively by `(x, y)` tuples; how those become flat
/// offsets is this type's private business.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// A new map with every cell at the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Adopt an already-populated row-major vector.  The length has to
    /// agree with the dimensions; anything else is a caller bug worth
    /// reporting rather than quietly misaddressing.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Result<Self, CarveError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(CarveError::SizeMismatch {
                expected: usize::MAX,
                actual: cells.len(),
            })?;
        if cells.len() != expected {
            return Err(CarveError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Columns in the map.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rows in the map.
    pub fn height(&self) -> u32 {
        self.height
    }

    // The number one rule of this game: keep the index math in a
    // singular location and never, ever mess with it.
    fn index_of(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "({}, {}) lies outside a {}x{} map",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// One full row as a slice.
    pub fn row(&self, y: u32) -> &[P] {
        assert!(y < self.height, "row {} outside height {}", y, self.height);
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    /// One full row, mutably.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        assert!(y < self.height, "row {} outside height {}", y, self.height);
        let start = (y as usize) * (self.width as usize);
        &mut self.cells[start..start + self.width as usize]
    }

    /// Every cell, row-major, borrowed.
    pub fn cells(&self) -> &[P] {
        &self.cells
    }

    /// Surrender the backing vector, row-major.
    pub fn into_vec(self) -> Vec<P> {
        self.cells
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.index_of(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.index_of(x, y);
        &mut self.cells[index]
    }
}
