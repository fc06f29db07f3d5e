//! Query results that distinguish payload values from grid sentinels
//!
//! Payloads may be numbers, strings or anything else, so sentinels are
//! variants rather than reserved payload values and can never collide.

/// A payload value or one of the grid's sentinel markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell<T> {
    /// A stored payload value
    Value(T),
    /// The queried neighbour lies off the grid
    Outside,
    /// The query itself could not be answered (invalid origin or direction)
    NotValid,
    /// Explicit "no value"; `populate` writes the default for it
    NilValue,
}

impl<T> Cell<T> {
    /// Check if this holds a payload value
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Check if this is the `Outside` sentinel
    pub const fn is_outside(&self) -> bool {
        matches!(self, Self::Outside)
    }

    /// Check if this is the `NotValid` sentinel
    pub const fn is_not_valid(&self) -> bool {
        matches!(self, Self::NotValid)
    }

    /// Check if this is the `NilValue` sentinel
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::NilValue)
    }

    /// Borrow the payload, keeping sentinels as they are
    pub const fn as_ref(&self) -> Cell<&T> {
        match self {
            Self::Value(value) => Cell::Value(value),
            Self::Outside => Cell::Outside,
            Self::NotValid => Cell::NotValid,
            Self::NilValue => Cell::NilValue,
        }
    }

    /// Transform the payload, keeping sentinels as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Cell<U> {
        match self {
            Self::Value(value) => Cell::Value(f(value)),
            Self::Outside => Cell::Outside,
            Self::NotValid => Cell::NotValid,
            Self::NilValue => Cell::NilValue,
        }
    }

    /// Extract the payload, discarding sentinels
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the payload, if any
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Clone> Cell<&T> {
    /// Clone the borrowed payload into an owned cell
    pub fn cloned(self) -> Cell<T> {
        self.map(Clone::clone)
    }
}

impl<T> From<T> for Cell<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Option<T>> for Cell<T> {
    /// `None` becomes `NilValue`
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NilValue, Self::Value)
    }
}
