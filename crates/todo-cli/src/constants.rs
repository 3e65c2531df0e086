//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (item, config).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Log filter used when neither `TODO_LOG` nor `--verbose` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "TODO_LOG";

pub const LIST_HINT: &str = "Hint: Run `todo list` to find item IDs.";

/// Logged when a change lands in the memory store of a one-shot process.
pub const VOLATILE_STORE_WARNING: &str =
    "memory store in use; this change is discarded when the command exits";
