//! Single-neighbour lookups and full 8-neighbourhood scans

use std::iter::FusedIterator;

use crate::configuration::NEIGHBOR_COUNT;
use crate::spatial::bounds::Coordinate;
use crate::spatial::cell::Cell;
use crate::spatial::direction::{Direction, IntoDirection};
use crate::spatial::grid::Grid;

/// One neighbourhood entry: coordinates (absent when off-grid) and content
pub type Neighbor<'a, T> = (Option<usize>, Option<usize>, Cell<&'a T>);

impl<T> Grid<T> {
    /// Get the value of the cell one step from `(x, y)` in `direction`
    ///
    /// Returns `None` if the origin or target is off the grid, or if the
    /// direction is not recognised.
    pub fn get_neighbor<N: Coordinate>(
        &self,
        x: N,
        y: N,
        direction: impl IntoDirection,
    ) -> Option<&T> {
        self.neighbor_cell(x, y, direction).into_value()
    }

    /// Like [`Grid::get_neighbor`], but says why no value was found
    ///
    /// `NotValid` means the origin or direction was unusable, `Outside`
    /// means the target fell off the grid.
    pub fn neighbor_cell<N: Coordinate>(
        &self,
        x: N,
        y: N,
        direction: impl IntoDirection,
    ) -> Cell<&T> {
        let bounds = self.bounds();
        let (Some(origin), Some(direction)) = (bounds.resolve(x, y), direction.into_direction())
        else {
            return Cell::NotValid;
        };

        bounds
            .step(origin, direction.vector())
            .and_then(|target| self.cells.get(target))
            .map_or(Cell::Outside, Cell::Value)
    }

    /// Scan the eight cells surrounding `(x, y)`
    ///
    /// Yields exactly eight entries for a valid origin and none otherwise.
    /// Off-grid slots are reported as `(None, None, Cell::Outside)` rather
    /// than skipped, so entry `i` always corresponds to
    /// `Direction::NEIGHBORS[i]`.
    pub fn get_neighbors<N: Coordinate>(&self, x: N, y: N) -> Neighbors<'_, T> {
        let origin = self.bounds().resolve(x, y);
        Neighbors {
            grid: self,
            origin,
            next: if origin.is_some() { 0 } else { NEIGHBOR_COUNT },
        }
    }
}

/// The 8-neighbourhood of a cell in scan order
#[derive(Debug)]
pub struct Neighbors<'a, T> {
    grid: &'a Grid<T>,
    origin: Option<(usize, usize)>,
    next: usize,
}

impl<T> Clone for Neighbors<'_, T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            origin: self.origin,
            next: self.next,
        }
    }
}

impl<'a, T> Iterator for Neighbors<'a, T> {
    type Item = Neighbor<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let origin = self.origin?;
        let direction = *Direction::NEIGHBORS.get(self.next)?;
        self.next += 1;

        let grid = self.grid;
        let entry = grid
            .bounds()
            .step(origin, direction.vector())
            .and_then(|(x, y)| grid.cells.get((x, y)).map(|value| (x, y, value)))
            .map_or((None, None, Cell::Outside), |(x, y, value)| {
                (Some(x), Some(y), Cell::Value(value))
            });

        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NEIGHBOR_COUNT.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Neighbors<'_, T> {}

impl<T> FusedIterator for Neighbors<'_, T> {}
