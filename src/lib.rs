//! Payload-agnostic two-dimensional grid for games and simulations
//!
//! A [`Grid`] is a dense `width` by `height` rectangle of values with a
//! shared default. `x` addresses the vertical axis and `y` the horizontal
//! one, with `(0, 0)` at the top-left. Beyond single-cell access the grid
//! answers neighbour queries, walks straight lines to its edge, exports and
//! imports its contents as `(x, y, value)` triples, and resizes while
//! keeping the cells that still fit.
//!
//! Queries fail soft: invalid coordinates and unrecognised directions yield
//! `None`, an empty iterator, or a no-op. Off-grid neighbours and other
//! special results are reported through [`Cell`] so they never collide
//! with payload values.
//!
//! ```
//! use cellgrid::{Direction, Grid};
//!
//! let mut grid = Grid::create(8, 8, " ");
//! grid.populate([(4, 4, "O"), (4, 5, "X"), (5, 4, "X"), (5, 5, "O")]);
//!
//! let diagonal: Vec<_> = grid
//!     .traverse(3, 3, Direction::BottomRight)
//!     .map(|(_, _, value)| *value)
//!     .collect();
//! assert_eq!(diagonal, ["O", "O", " ", " "]);
//! ```

#![forbid(unsafe_code)]

/// Grid constants and construction defaults
pub mod configuration;
/// Error types for strict construction, resizing and parsing
pub mod error;
/// Grid storage, directions and spatial queries
pub mod spatial;

pub use error::{GridError, Result};
pub use spatial::{
    Bounds, Cell, Cells, Contents, Coordinate, Direction, Grid, IntoDirection, Neighbor, Neighbors,
    Offset, Traversal, get_vector,
};
