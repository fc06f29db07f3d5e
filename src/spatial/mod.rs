//! Spatial data structures and grid queries
//!
//! This module contains the grid engine:
//! - Coordinate validation and sentinel-aware cell results
//! - Named directions and their offsets
//! - Cell storage, neighbour scans and line traversal
//! - Bulk transfer and resizing

/// Coordinate and dimension validation
pub mod bounds;
/// Payload values tagged apart from sentinel markers
pub mod cell;
/// Named directions and coordinate offsets
pub mod direction;
/// Dense cell storage and single/batch access
pub mod grid;
/// Neighbour lookups and 8-neighbourhood scans
pub mod neighbors;
/// Dimension changes with content preservation
pub mod resize;
/// Bulk export and import of cell contents
pub mod transfer;
/// Straight-line walks to the grid edge
pub mod traversal;

pub use bounds::{Bounds, Coordinate};
pub use cell::Cell;
pub use direction::{Direction, IntoDirection, Offset, get_vector};
pub use grid::{Cells, Grid};
pub use neighbors::{Neighbor, Neighbors};
pub use transfer::Contents;
pub use traversal::Traversal;
