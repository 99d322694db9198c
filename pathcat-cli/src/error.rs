//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use pathcat::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// The input could not be decoded.
    Decode(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., validation failed) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., a config file failed validation)
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    /// - 8: Input could not be decoded
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Library(lib_err) => match lib_err {
                LibError::Io(_) => 5,
                _ => 6,
            },
            CliError::Config(_) => 7,
            CliError::Decode(_) => 8,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Decode(e) => write!(
                f,
                "{e} (try --encoding with the listing's actual encoding)"
            ),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) | CliError::Decode(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Decode { .. } => CliError::Decode(e),
            LibError::Configuration(_)
            | LibError::Validation { .. }
            | LibError::UnknownEncoding { .. } => CliError::Config(e.to_string()),
            _ => CliError::Library(e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(
            CliError::Io(io::Error::new(io::ErrorKind::NotFound, "gone")).exit_code(),
            5
        );
        assert_eq!(CliError::Config("x".into()).exit_code(), 7);
    }

    #[test]
    fn test_library_error_mapping() {
        let decode = CliError::from(LibError::Decode {
            encoding: "UTF-8".into(),
        });
        assert_eq!(decode.exit_code(), 8);
        assert!(decode.to_string().contains("--encoding"));

        let label = CliError::from(LibError::UnknownEncoding {
            label: "utf-9".into(),
        });
        assert_eq!(label.exit_code(), 7);

        let io = CliError::from(LibError::Io(io::Error::new(io::ErrorKind::NotFound, "gone")));
        assert_eq!(io.exit_code(), 5);

        let export = CliError::from(LibError::Export {
            format: "csv".into(),
            reason: "broken".into(),
        });
        assert_eq!(export.exit_code(), 6);
    }
}
