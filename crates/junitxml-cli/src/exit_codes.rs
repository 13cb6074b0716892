//! Process exit codes. These are part of the CLI contract.

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_REPORT_HAS_FAILURES: i32 = 1; // Only with --fail-on-failures
pub const EXIT_CONFIG_ERROR: i32 = 2; // Bad config, unreadable or malformed input
