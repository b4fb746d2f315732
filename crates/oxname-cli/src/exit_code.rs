//! Exit codes for the CLI.
//!
//! These follow common Unix conventions and provide meaningful
//! status information for scripting and automation.

/// Successful execution
pub const SUCCESS: u8 = 0;

/// General/unspecified error (config file unreadable, output failure)
pub const GENERAL_ERROR: u8 = 1;

/// Command-line usage error (bad arguments, malformed edit operation).
/// Returned when clap rejects the command line.
pub const USAGE_ERROR: u8 = 2;

/// A name operation rejected its input (bad delimiter, index out of range)
pub const INVALID_ARGUMENT: u8 = 3;

/// A name operation broke its own postcondition or invariant
pub const INTERNAL_ERROR: u8 = 4;
