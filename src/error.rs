//! Application error type.
//!
//! The interpretation core never fails; everything that can go wrong lives in the
//! outer layers (config, local files, the extraction service, the terminal). Each
//! failure carries the process exit code `main` should return.

/// Exit code for usage, configuration and local file problems.
pub const EXIT_USAGE: u8 = 2;
/// Exit code for extraction service and terminal failures.
pub const EXIT_REMOTE: u8 = 4;

#[derive(Clone, PartialEq, Eq)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Shorthand for an [`EXIT_USAGE`] error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, message)
    }

    /// Shorthand for an [`EXIT_REMOTE`] error.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::new(EXIT_REMOTE, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthands_pick_exit_codes() {
        assert_eq!(AppError::usage("bad flag").exit_code(), EXIT_USAGE);
        assert_eq!(AppError::remote("timeout").exit_code(), EXIT_REMOTE);
        assert_eq!(AppError::remote("timeout").to_string(), "timeout");
    }
}
