//! Coordinate validation for dense rectangular grids
//!
//! Every read or write against a grid resolves its coordinates here first.
//! Callers may hand in any integer primitive; only non-negative values that
//! land inside the rectangle resolve to a cell. Floating-point input is
//! accepted by the signatures but never names a cell.

use std::fmt;

use num_traits::ToPrimitive;

use crate::error::{Result, invalid_dimension};
use crate::spatial::direction::Offset;

/// Numeric input usable as a grid coordinate or dimension
pub trait Coordinate: Copy + fmt::Display {
    /// The index this value names, if it is a non-negative integer that
    /// fits in `usize`
    fn to_index(self) -> Option<usize>;
}

macro_rules! integer_coordinate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coordinate for $ty {
                fn to_index(self) -> Option<usize> {
                    self.to_usize()
                }
            }
        )*
    };
}

integer_coordinate! {
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
}

macro_rules! float_coordinate {
    ($($ty:ty),* $(,)?) => {
        $(
            // Floats never resolve, even when whole-valued
            impl Coordinate for $ty {
                fn to_index(self) -> Option<usize> {
                    None
                }
            }
        )*
    };
}

float_coordinate! { f32, f64 }

/// Convert a numeric coordinate to an index
///
/// Returns `None` for negative integers and for any floating-point value.
pub fn to_index<N: Coordinate>(value: N) -> Option<usize> {
    value.to_index()
}

/// Validate a requested grid dimension
///
/// # Errors
///
/// Returns `GridError::InvalidDimension` if the value is not a non-negative
/// integer or is zero
pub fn to_dimension<N: Coordinate>(parameter: &'static str, value: N) -> Result<usize> {
    let Some(dimension) = value.to_index() else {
        return Err(invalid_dimension(
            parameter,
            &value,
            &"must be a non-negative integer",
        ));
    };

    if dimension == 0 {
        return Err(invalid_dimension(parameter, &value, &"must be positive"));
    }

    Ok(dimension)
}

/// Check that a `width` by `height` store of `T` is addressable
///
/// # Errors
///
/// Returns `GridError::InvalidDimension` for the `shape` parameter if the
/// store would need more than `isize::MAX` bytes
pub fn to_shape<T>(width: usize, height: usize) -> Result<(usize, usize)> {
    let bytes = width
        .checked_mul(height)
        .and_then(|cells| cells.checked_mul(size_of::<T>().max(1)));

    match bytes {
        Some(bytes) if isize::try_from(bytes).is_ok() => Ok((width, height)),
        _ => Err(invalid_dimension(
            "shape",
            &format!("{width}x{height}"),
            &"cell storage exceeds the address space",
        )),
    }
}

/// Extent of a grid, `x` in `[0, width)` and `y` in `[0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Extent along the vertical (`x`) axis
    pub width: usize,
    /// Extent along the horizontal (`y`) axis
    pub height: usize,
}

impl Bounds {
    /// Create bounds for a `width` by `height` grid
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check if an index pair lies inside the bounds
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Resolve numeric coordinates to an in-bounds index pair
    pub fn resolve<N: Coordinate>(&self, x: N, y: N) -> Option<(usize, usize)> {
        let position = (to_index(x)?, to_index(y)?);
        self.contains(position.0, position.1).then_some(position)
    }

    /// Check if numeric coordinates address a cell
    pub fn is_valid<N: Coordinate>(&self, x: N, y: N) -> bool {
        self.resolve(x, y).is_some()
    }

    /// Move one step from `position` by `offset`
    ///
    /// Returns `None` when the step leaves the grid on any side.
    pub fn step(&self, position: (usize, usize), offset: Offset) -> Option<(usize, usize)> {
        let x = position.0.checked_add_signed(offset.dx as isize)?;
        let y = position.1.checked_add_signed(offset.dy as isize)?;
        self.contains(x, y).then_some((x, y))
    }

    /// Total number of addressable cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Map a row-major linear index back to its coordinates
    pub const fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        if self.height == 0 || index >= self.cell_count() {
            return None;
        }
        Some((index / self.height, index % self.height))
    }
}
