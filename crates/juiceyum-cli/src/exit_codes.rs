//! Standard exit codes for CLI operations
//!
//! Per-app failures during batch operations never change the exit code;
//! only configuration-level failures terminate the process non-zero.

#![allow(dead_code)]

/// Success - operation completed without errors
pub const SUCCESS: i32 = 0;

/// General error - unspecified failure
pub const ERROR: i32 = 1;

/// Configuration error - persisted state unreadable or unwritable
pub const CONFIG_ERROR: i32 = 2;

/// Usage error - invalid arguments or options (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;
