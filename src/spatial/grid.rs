//! Dense grid storage with single and batch cell access
//!
//! Cells live in an `Array2` of shape `(width, height)` indexed `(x, y)`, so
//! the array's standard layout is the grid's row-major order (`x` outer,
//! `y` inner). The array always holds exactly one value per valid
//! coordinate; only `resize` replaces it.

use std::iter::FusedIterator;

use log::warn;
use ndarray::Array2;

use crate::configuration::{FALLBACK_HEIGHT, FALLBACK_WIDTH};
use crate::error::Result;
use crate::spatial::bounds::{Bounds, Coordinate, to_dimension, to_shape};
use crate::spatial::cell::Cell;

/// Two-dimensional container of payload values with a shared default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    /// Payload per cell, indexed `(x, y)`
    pub(crate) cells: Array2<T>,

    /// Value given to new and reset cells
    pub(crate) default: T,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `default`
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimension` if either dimension is zero or
    /// the store for `width * height` cells cannot be addressed
    pub fn new(width: usize, height: usize, default: T) -> Result<Self> {
        let width = to_dimension("width", width)?;
        let height = to_dimension("height", height)?;
        let (width, height) = to_shape::<T>(width, height)?;
        Ok(Self::filled(width, height, default))
    }

    /// Create a grid, replacing malformed dimensions with the 4x4 fallback
    ///
    /// Negative, zero and floating-point dimensions are coerced
    /// independently, so `create(-2, 6, v)` yields a 4x6 grid. A shape too
    /// large to address falls back to 4x4. Use [`Grid::new`] to reject
    /// them instead.
    pub fn create<N: Coordinate>(width: N, height: N, default: T) -> Self {
        let width = to_dimension("width", width).unwrap_or_else(|error| {
            warn!("{error}; falling back to width {FALLBACK_WIDTH}");
            FALLBACK_WIDTH
        });
        let height = to_dimension("height", height).unwrap_or_else(|error| {
            warn!("{error}; falling back to height {FALLBACK_HEIGHT}");
            FALLBACK_HEIGHT
        });
        let (width, height) = to_shape::<T>(width, height).unwrap_or_else(|error| {
            warn!("{error}; falling back to {FALLBACK_WIDTH}x{FALLBACK_HEIGHT}");
            (FALLBACK_WIDTH, FALLBACK_HEIGHT)
        });
        Self::filled(width, height, default)
    }

    pub(crate) fn filled(width: usize, height: usize, default: T) -> Self {
        Self {
            cells: Array2::from_elem((width, height), default.clone()),
            default,
        }
    }

    /// Overwrite a cell; invalid coordinates are ignored
    pub fn set_cell<N: Coordinate>(&mut self, x: N, y: N, value: T) {
        if let Some(cell) = self.get_cell_mut(x, y) {
            *cell = value;
        }
    }

    /// Restore a cell to the default value; invalid coordinates are ignored
    pub fn reset_cell<N: Coordinate>(&mut self, x: N, y: N) {
        let default = self.default.clone();
        self.set_cell(x, y, default);
    }

    /// Restore every cell to the default value
    pub fn reset_all(&mut self) {
        self.cells.fill(self.default.clone());
    }
}

impl<T> Grid<T> {
    /// Extent along the vertical (`x`) axis
    pub fn width(&self) -> usize {
        self.cells.nrows()
    }

    /// Extent along the horizontal (`y`) axis
    pub fn height(&self) -> usize {
        self.cells.ncols()
    }

    /// Current dimensions as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Current bounds
    pub fn bounds(&self) -> Bounds {
        let (width, height) = self.cells.dim();
        Bounds::new(width, height)
    }

    /// Number of cells, always `width * height`
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Value given to new and reset cells
    pub const fn default_value(&self) -> &T {
        &self.default
    }

    /// Check if integer coordinates address a cell
    ///
    /// Negative values, coordinates past the edge and any floating-point
    /// input (including whole values such as `3.0`) report `false`.
    pub fn is_valid<N: Coordinate>(&self, x: N, y: N) -> bool {
        self.bounds().is_valid(x, y)
    }

    /// Get a cell's value, or `None` for invalid coordinates
    pub fn get_cell<N: Coordinate>(&self, x: N, y: N) -> Option<&T> {
        let (x, y) = self.bounds().resolve(x, y)?;
        self.cells.get((x, y))
    }

    /// Mutable access to a cell, or `None` for invalid coordinates
    pub fn get_cell_mut<N: Coordinate>(&mut self, x: N, y: N) -> Option<&mut T> {
        let (x, y) = self.bounds().resolve(x, y)?;
        self.cells.get_mut((x, y))
    }

    /// Get a cell's value, reporting invalid coordinates as `NotValid`
    pub fn probe<N: Coordinate>(&self, x: N, y: N) -> Cell<&T> {
        self.get_cell(x, y).map_or(Cell::NotValid, Cell::Value)
    }

    /// Lazily look up the values at a list of coordinates
    ///
    /// Invalid coordinates are skipped and the remaining values keep the
    /// order of the input. The iterator can be cloned to restart it when
    /// the coordinate source can.
    pub fn get_cells<N, I>(&self, coordinates: I) -> Cells<'_, T, I::IntoIter>
    where
        N: Coordinate,
        I: IntoIterator<Item = (N, N)>,
    {
        Cells {
            grid: self,
            coordinates: coordinates.into_iter(),
        }
    }
}

impl<T: PartialEq> Grid<T> {
    /// Check if a valid cell currently holds the default value
    ///
    /// Invalid coordinates report `false`.
    pub fn is_default<N: Coordinate>(&self, x: N, y: N) -> bool {
        self.get_cell(x, y)
            .is_some_and(|value| *value == self.default)
    }
}

impl<T: Default + Clone> Default for Grid<T> {
    /// The 4x4 fallback grid filled with `T::default()`
    fn default() -> Self {
        Self::filled(FALLBACK_WIDTH, FALLBACK_HEIGHT, T::default())
    }
}

/// Values at a caller-supplied list of coordinates, skipping invalid ones
#[derive(Debug)]
pub struct Cells<'a, T, I> {
    grid: &'a Grid<T>,
    coordinates: I,
}

impl<T, I: Clone> Clone for Cells<'_, T, I> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            coordinates: self.coordinates.clone(),
        }
    }
}

impl<'a, T, N, I> Iterator for Cells<'a, T, I>
where
    N: Coordinate,
    I: Iterator<Item = (N, N)>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;
        self.coordinates
            .by_ref()
            .find_map(|(x, y)| grid.get_cell(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.coordinates.size_hint().1)
    }
}

impl<T, N, I> FusedIterator for Cells<'_, T, I>
where
    N: Coordinate,
    I: FusedIterator<Item = (N, N)>,
{
}
