//! Stable exit codes for vstgen CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Usage error, invalid effect name, missing/duplicate effect directory, or
/// any I/O or parse failure.
pub const INVALID: i32 = 1;
