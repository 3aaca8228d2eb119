//! Error handling for the text sorter

use std::io;
use thiserror::Error;

/// Errors raised around the ordering core: loading text, parsing
/// configuration and writing results. Comparisons themselves never fail.
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Is a directory: {file}")]
    IsDirectory { file: String },

    #[error("Invalid strategy specification: {spec}")]
    InvalidStrategySpec { spec: String },

    #[error("Conflicting options: {message}")]
    ConflictingOptions { message: String },

    #[error("{file}:{position}: disorder")]
    NotSorted { file: String, position: usize },

    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

impl SortError {
    /// Returns the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::PermissionDenied { .. }
            | SortError::FileNotFound { .. }
            | SortError::IsDirectory { .. }
            | SortError::Utf8Error(_)
            | SortError::Io(_) => crate::SORT_FAILURE,

            _ => crate::EXIT_FAILURE,
        }
    }

    pub fn permission_denied(file: &str) -> Self {
        SortError::PermissionDenied {
            file: file.to_string(),
        }
    }

    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    pub fn is_directory(file: &str) -> Self {
        SortError::IsDirectory {
            file: file.to_string(),
        }
    }

    pub fn invalid_strategy_spec(spec: &str) -> Self {
        SortError::InvalidStrategySpec {
            spec: spec.to_string(),
        }
    }

    pub fn conflicting_options(message: &str) -> Self {
        SortError::ConflictingOptions {
            message: message.to_string(),
        }
    }

    /// `position` is the 1-based unit number within `file`
    pub fn not_sorted(file: &str, position: usize) -> Self {
        SortError::NotSorted {
            file: file.to_string(),
            position,
        }
    }

    pub fn parse_error(message: &str) -> Self {
        SortError::ParseError {
            message: message.to_string(),
        }
    }
}

/// Result type for sorter operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for attaching a file name to I/O failures
pub trait SortContext<T> {
    fn with_context<F>(self, f: F) -> SortResult<T>
    where
        F: FnOnce() -> String;

    fn with_file_context(self, filename: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_context<F>(self, f: F) -> SortResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|io_err| {
            SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", f(), io_err),
            ))
        })
    }

    fn with_file_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(filename),
            io::ErrorKind::NotFound => SortError::file_not_found(filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
