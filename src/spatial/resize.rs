//! Reshaping a grid while preserving the cells that still fit
//!
//! Resizing exports every cell, reallocates the store at the new shape
//! filled with the default value, then re-imports the export. Cells whose
//! coordinates no longer fit are dropped; newly added cells hold the
//! default. The cost is `O(width * height)` for both the old and new shape.

use log::debug;
use ndarray::Array2;

use crate::error::Result;
use crate::spatial::bounds::{Coordinate, to_dimension, to_shape};
use crate::spatial::grid::Grid;

impl<T: Clone + PartialEq> Grid<T> {
    /// Change the grid dimensions, keeping overlapping cells
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimension` if either dimension is not a
    /// positive integer, or if the new shape cannot be addressed; the grid
    /// is left unchanged in that case
    pub fn resize<N: Coordinate>(&mut self, new_width: N, new_height: N) -> Result<()> {
        let width = to_dimension("width", new_width)?;
        let height = to_dimension("height", new_height)?;
        let (width, height) = to_shape::<T>(width, height)?;

        let previous = self.dimensions();
        let contents = self.export(false);

        self.cells = Array2::from_elem((width, height), self.default.clone());
        let kept = self.populate(contents);

        debug!(
            "resized grid from {}x{} to {width}x{height}, {kept} cells kept",
            previous.0, previous.1
        );

        Ok(())
    }
}
