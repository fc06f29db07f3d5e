//! Straight-line walks from an origin cell to the grid edge

use std::iter::FusedIterator;

use crate::spatial::bounds::Coordinate;
use crate::spatial::direction::{Direction, IntoDirection, Offset};
use crate::spatial::grid::Grid;

impl<T> Grid<T> {
    /// Walk from `(x, y)` in `direction` until leaving the grid
    ///
    /// The origin is never yielded. Each step adds the direction's offset to
    /// the previous position and the walk stops at the first off-grid
    /// position. An invalid origin, an unrecognised direction or `Center`
    /// (which would never leave the grid) all produce an empty walk.
    pub fn traverse<N: Coordinate>(
        &self,
        x: N,
        y: N,
        direction: impl IntoDirection,
    ) -> Traversal<'_, T> {
        let step = direction
            .into_direction()
            .map(Direction::vector)
            .filter(|offset| !offset.is_zero());

        let position = step.and_then(|_| self.bounds().resolve(x, y));

        Traversal {
            grid: self,
            position,
            step: step.unwrap_or_default(),
        }
    }
}

/// Cells visited by a straight-line walk, in walk order
#[derive(Debug)]
pub struct Traversal<'a, T> {
    grid: &'a Grid<T>,
    /// Last position reached, `None` once the walk has left the grid
    position: Option<(usize, usize)>,
    step: Offset,
}

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            position: self.position,
            step: self.step,
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = (usize, usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;
        let next = self
            .position
            .and_then(|position| grid.bounds().step(position, self.step));
        self.position = next;

        let (x, y) = next?;
        grid.cells.get((x, y)).map(|value| (x, y, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some((x, y)) = self.position else {
            return (0, Some(0));
        };
        let bounds = self.grid.bounds();
        let steps_along = |coordinate: usize, delta: i32, extent: usize| match delta {
            d if d > 0 => Some(extent.saturating_sub(coordinate + 1)),
            d if d < 0 => Some(coordinate),
            _ => None,
        };
        let remaining = match (
            steps_along(x, self.step.dx, bounds.width),
            steps_along(y, self.step.dy, bounds.height),
        ) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}
