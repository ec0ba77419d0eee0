use std::fmt;

/// Result type for pricebook-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Persistence layer error
    Store(pricebook_store::Error),

    /// Price input could not be parsed as an integer
    InvalidPrice(String),

    /// Update or delete invoked with no item selected
    MissingSelection,

    /// No item with the requested id exists
    UnknownItem(u64),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::InvalidPrice(raw) => write!(f, "Invalid price: '{}' is not a number", raw),
            Error::MissingSelection => write!(f, "No item is selected for editing"),
            Error::UnknownItem(id) => write!(f, "No item with id {}", id),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::InvalidPrice(_)
            | Error::MissingSelection
            | Error::UnknownItem(_)
            | Error::Config(_) => None,
        }
    }
}

impl From<pricebook_store::Error> for Error {
    fn from(err: pricebook_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<pricebook_types::Error> for Error {
    fn from(err: pricebook_types::Error) -> Self {
        match err {
            pricebook_types::Error::InvalidPrice(raw) => Error::InvalidPrice(raw),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Store(pricebook_store::Error::Io(err))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
