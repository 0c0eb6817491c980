//! Stable exit codes for ci CLI commands.

/// Command succeeded. An unparseable disk listing still exits `OK`: the raw
/// content is reported and the run ends without raising.
pub const OK: i32 = 0;
/// Command failed (missing required environment, I/O error).
pub const INVALID: i32 = 1;
