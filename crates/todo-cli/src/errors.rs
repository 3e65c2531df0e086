//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; everything else goes through
//! `anyhow` and exits with 1.

use std::fmt;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Item not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Resolve the process exit code for a top-level error.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(core_err) = err.downcast_ref::<todo_core::TodoError>() {
        if core_err.is_input_error() {
            return exit_codes::INVALID_INPUT;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found: anyhow::Error = CliError::not_found("Todo not found", "hint").into();
        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);

        let invalid: anyhow::Error =
            todo_core::TodoError::InvalidInput("Title must not be empty".into()).into();
        assert_eq!(exit_code_for(&invalid), exit_codes::INVALID_INPUT);

        let other = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&other), 1);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Todo not found", "Hint: run list");
        assert_eq!(err.to_string(), "Todo not found\nHint: run list");
    }
}
