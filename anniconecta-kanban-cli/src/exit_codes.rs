//! Process exit codes

pub const EXIT_SUCCESS: i32 = 0;
/// Seed, script or configuration could not be loaded
pub const EXIT_ERROR: i32 = 1;
/// Replay finished but some steps failed
pub const EXIT_WARNING: i32 = 2;
