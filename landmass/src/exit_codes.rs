//! Stable exit codes for landmass CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid arguments, config or data, or any other error.
pub const INVALID: i32 = 1;
/// A population density could not be computed (missing value or zero area).
pub const DENSITY_UNDEFINED: i32 = 2;
