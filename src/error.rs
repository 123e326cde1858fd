//! Error types for pager-sim.

use std::process::ExitCode;
use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a run.
///
/// The simulators themselves never fail; every variant here is raised by the
/// driver before or after the simulation proper.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a workload or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The workload ended before all expected integers were read.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    /// A token could not be read as a non-negative integer.
    #[error("invalid token {token:?} at position {position}")]
    InvalidToken { token: String, position: usize },

    /// The workload asks for zero physical frames.
    #[error("number of frames must be at least 1")]
    NoFrames,

    /// A sweep or generator range that contains nothing.
    #[error("invalid range: {0}")]
    InvalidRange(String),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Io(_) => ExitCode::from(7),
            Error::UnexpectedEof { .. } | Error::InvalidToken { .. } => ExitCode::from(4),
            Error::NoFrames | Error::InvalidRange(_) => ExitCode::from(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidToken {
            token: "x1".to_string(),
            position: 3,
        };
        assert_eq!(format!("{}", err), "invalid token \"x1\" at position 3");

        let err = Error::NoFrames;
        assert_eq!(format!("{}", err), "number of frames must be at least 1");

        let err = Error::UnexpectedEof {
            expected: "request 2 of 5".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "unexpected end of input, expected request 2 of 5"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "input.txt");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }
}
