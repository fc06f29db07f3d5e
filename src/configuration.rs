//! Grid constants and construction defaults

// Lenient construction replaces malformed dimensions with these
/// Width used when a requested width is malformed
pub const FALLBACK_WIDTH: usize = 4;
/// Height used when a requested height is malformed
pub const FALLBACK_HEIGHT: usize = 4;

/// Number of cells surrounding an interior cell
pub const NEIGHBOR_COUNT: usize = 8;

/// Number of named directions, including center
pub const DIRECTION_COUNT: usize = 9;
