//! Named directions over the 3x3 neighbourhood and their coordinate offsets
//!
//! `x` runs down the grid and `y` runs across it, so "top" is `dx = -1` and
//! "left" is `dy = -1`. Offsets are always drawn from `{-1, 0, 1}`.

use std::fmt;
use std::str::FromStr;

use crate::configuration::{DIRECTION_COUNT, NEIGHBOR_COUNT};
use crate::error::{GridError, unknown_direction};

/// Relative step between two cells
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Step along the vertical (`x`) axis
    pub dx: i32,
    /// Step along the horizontal (`y`) axis
    pub dy: i32,
}

impl Offset {
    /// Create an offset
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Check if the offset leaves a position unchanged
    pub const fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl From<(i32, i32)> for Offset {
    fn from((dx, dy): (i32, i32)) -> Self {
        Self { dx, dy }
    }
}

/// One of the nine positions in a 3x3 neighbourhood, relative to its center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up and to the left, `(-1, -1)`
    TopLeft,
    /// Up, `(-1, 0)`
    Top,
    /// Up and to the right, `(-1, 1)`
    TopRight,
    /// Left, `(0, -1)`
    Left,
    /// No movement, `(0, 0)`
    Center,
    /// Right, `(0, 1)`
    Right,
    /// Down and to the left, `(1, -1)`
    BottomLeft,
    /// Down, `(1, 0)`
    Bottom,
    /// Down and to the right, `(1, 1)`
    BottomRight,
}

impl Direction {
    /// All directions from top-left to bottom-right
    pub const ALL: [Self; DIRECTION_COUNT] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// The eight non-center directions in neighbour scan order
    ///
    /// `dx` is the outer loop and `dy` the inner one, both ascending.
    pub const NEIGHBORS: [Self; NEIGHBOR_COUNT] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// Coordinate offset for this direction
    pub const fn vector(self) -> Offset {
        match self {
            Self::TopLeft => Offset::new(-1, -1),
            Self::Top => Offset::new(-1, 0),
            Self::TopRight => Offset::new(-1, 1),
            Self::Left => Offset::new(0, -1),
            Self::Center => Offset::new(0, 0),
            Self::Right => Offset::new(0, 1),
            Self::BottomLeft => Offset::new(1, -1),
            Self::Bottom => Offset::new(1, 0),
            Self::BottomRight => Offset::new(1, 1),
        }
    }

    /// Find the direction whose vector equals `offset`
    pub const fn from_offset(offset: Offset) -> Option<Self> {
        match (offset.dx, offset.dy) {
            (-1, -1) => Some(Self::TopLeft),
            (-1, 0) => Some(Self::Top),
            (-1, 1) => Some(Self::TopRight),
            (0, -1) => Some(Self::Left),
            (0, 0) => Some(Self::Center),
            (0, 1) => Some(Self::Right),
            (1, -1) => Some(Self::BottomLeft),
            (1, 0) => Some(Self::Bottom),
            (1, 1) => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Direction pointing the other way
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::Top => Self::Bottom,
            Self::TopRight => Self::BottomLeft,
            Self::Left => Self::Right,
            Self::Center => Self::Center,
            Self::Right => Self::Left,
            Self::BottomLeft => Self::TopRight,
            Self::Bottom => Self::Top,
            Self::BottomRight => Self::TopLeft,
        }
    }

    /// Canonical name, as accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "TopLeft",
            Self::Top => "Top",
            Self::TopRight => "TopRight",
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
            Self::BottomLeft => "BottomLeft",
            Self::Bottom => "Bottom",
            Self::BottomRight => "BottomRight",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    /// Parse `TopLeft`, `top_left`, `top-left` or `TOP_LEFT` style names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect();

        Self::ALL
            .into_iter()
            .find(|direction| direction.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| unknown_direction(&s))
    }
}

/// Anything a grid query can interpret as a direction
///
/// Values that do not name one of the nine directions resolve to `None`,
/// which queries treat as "cannot compute" rather than as `Center`.
pub trait IntoDirection {
    /// Resolve to a direction, if recognised
    fn into_direction(self) -> Option<Direction>;
}

impl IntoDirection for Direction {
    fn into_direction(self) -> Option<Direction> {
        Some(self)
    }
}

impl IntoDirection for Offset {
    fn into_direction(self) -> Option<Direction> {
        Direction::from_offset(self)
    }
}

impl IntoDirection for (i32, i32) {
    fn into_direction(self) -> Option<Direction> {
        Direction::from_offset(self.into())
    }
}

impl IntoDirection for &str {
    fn into_direction(self) -> Option<Direction> {
        self.parse().ok()
    }
}

impl IntoDirection for &String {
    fn into_direction(self) -> Option<Direction> {
        self.as_str().into_direction()
    }
}

impl IntoDirection for String {
    fn into_direction(self) -> Option<Direction> {
        self.as_str().into_direction()
    }
}

impl<D: IntoDirection> IntoDirection for Option<D> {
    fn into_direction(self) -> Option<Direction> {
        self.and_then(IntoDirection::into_direction)
    }
}

/// Look up the offset for a direction
///
/// Returns `None` for unrecognised directions.
pub fn get_vector(direction: impl IntoDirection) -> Option<Offset> {
    direction.into_direction().map(Direction::vector)
}
