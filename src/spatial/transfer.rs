//! Bulk export and import of grid contents as coordinate-value triples
//!
//! `populate(get_contents(false))` reproduces a grid exactly, and
//! `populate(get_contents(true))` onto a freshly reset grid restores only the
//! non-default cells. Resizing is built on the same pair.

use std::iter::FusedIterator;

use log::trace;

use crate::spatial::bounds::Coordinate;
use crate::spatial::cell::Cell;
use crate::spatial::grid::Grid;

impl<T: PartialEq> Grid<T> {
    /// Enumerate cells as `(x, y, value)` in row-major order
    ///
    /// `x` ascends in the outer loop and `y` in the inner one. With
    /// `exclude_default` set, cells equal to the default value are skipped.
    pub const fn get_contents(&self, exclude_default: bool) -> Contents<'_, T> {
        Contents {
            grid: self,
            next: 0,
            exclude_default,
        }
    }
}

impl<T: PartialEq + Clone> Grid<T> {
    /// Owned snapshot of [`Grid::get_contents`]
    pub fn export(&self, exclude_default: bool) -> Vec<(usize, usize, T)> {
        self.get_contents(exclude_default)
            .map(|(x, y, value)| (x, y, value.clone()))
            .collect()
    }
}

impl<T: Clone> Grid<T> {
    /// Write `(x, y, value)` triples into the grid
    ///
    /// Entries with invalid coordinates are skipped. `Cell::NilValue` writes
    /// the default value; `Cell::Outside` and `Cell::NotValid` carry nothing
    /// to store and are skipped. Returns the number of cells written.
    pub fn populate<N, V, I>(&mut self, entries: I) -> usize
    where
        N: Coordinate,
        V: Into<Cell<T>>,
        I: IntoIterator<Item = (N, N, V)>,
    {
        let bounds = self.bounds();
        let mut written = 0;

        for (x, y, value) in entries {
            let Some((x, y)) = bounds.resolve(x, y) else {
                trace!("populate: skipping entry outside {bounds:?}");
                continue;
            };

            let value = match value.into() {
                Cell::Value(value) => value,
                Cell::NilValue => self.default.clone(),
                Cell::Outside | Cell::NotValid => {
                    trace!("populate: skipping sentinel entry at ({x}, {y})");
                    continue;
                }
            };

            if let Some(cell) = self.cells.get_mut((x, y)) {
                *cell = value;
                written += 1;
            }
        }

        written
    }
}

/// Every cell as `(x, y, value)` in row-major order
#[derive(Debug)]
pub struct Contents<'a, T> {
    grid: &'a Grid<T>,
    /// Row-major index of the next cell to inspect
    next: usize,
    exclude_default: bool,
}

impl<T> Clone for Contents<'_, T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            next: self.next,
            exclude_default: self.exclude_default,
        }
    }
}

impl<'a, T: PartialEq> Iterator for Contents<'a, T> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;
        let bounds = grid.bounds();

        while let Some((x, y)) = bounds.position_of(self.next) {
            self.next += 1;
            let Some(value) = grid.cells.get((x, y)) else {
                continue;
            };
            if self.exclude_default && *value == grid.default {
                continue;
            }
            return Some((x, y, value));
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.cell_count().saturating_sub(self.next);
        if self.exclude_default {
            (0, Some(remaining))
        } else {
            (remaining, Some(remaining))
        }
    }
}

impl<T: PartialEq> FusedIterator for Contents<'_, T> {}
