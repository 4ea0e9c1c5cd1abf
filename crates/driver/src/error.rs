use core::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// An argument of the line is not valid JSON.
    Json { line: usize, error: serde_json::Error },
    UnknownOperation { line: usize, name: String },
    /// The operation got the wrong number of arguments.
    Arity {
        line: usize,
        operation: &'static str,
        expected: &'static str,
        found: usize,
    },
    /// A key argument is neither an integer nor a string.
    InvalidKey { line: usize, key: String },
    /// The operation cannot be applied to the collection.
    Collection { line: usize, error: collections::Error },
}

impl Error {
    /// Returns the 1-based script line the error occurred at if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::Json { line, .. }
            | Self::UnknownOperation { line, .. }
            | Self::Arity { line, .. }
            | Self::InvalidKey { line, .. }
            | Self::Collection { line, .. } => Some(*line),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "i/o error: {}", error),
            Self::Json { line, error } => {
                write!(f, "line {}: invalid argument: {}", line, error)
            }
            Self::UnknownOperation { line, name } => {
                write!(f, "line {}: unknown operation `{}`", line, name)
            }
            Self::Arity {
                line,
                operation,
                expected,
                found,
            } => {
                write!(
                    f,
                    "line {}: `{}` expects {} but found {} argument(s)",
                    line, operation, expected, found
                )
            }
            Self::InvalidKey { line, key } => {
                write!(
                    f,
                    "line {}: keys must be integers or strings but found {}",
                    line, key
                )
            }
            Self::Collection { line, error } => write!(f, "line {}: {}", line, error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::Json { error, .. } => Some(error),
            Self::Collection { error, .. } => Some(error),
            _ => None,
        }
    }
}

