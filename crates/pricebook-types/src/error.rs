use std::fmt;

/// Result type for pricebook-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Price input could not be parsed as an integer
    InvalidPrice(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPrice(raw) => write!(f, "Invalid price: '{}' is not a number", raw),
        }
    }
}

impl std::error::Error for Error {}
