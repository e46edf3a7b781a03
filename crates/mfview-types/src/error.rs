use std::fmt;

/// Result type for mfview-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared by every layer that builds a newform view
#[derive(Debug)]
pub enum Error {
    /// Label string does not have the `level.weight.orbit.orbit` shape
    InvalidLabel(String),

    /// Label is well-formed but absent from the store
    NotFound(String),

    /// Store contents violate an invariant (e.g. a gap in eigenvalue indices)
    DataIntegrity(String),

    /// CM-only accessor called on a form without complex multiplication
    NotCm(String),

    /// Requested numeric value cannot be computed from the available data
    Unavailable(String),

    /// Backing store failed
    Store(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLabel(label) => write!(f, "Invalid newform label {}", label),
            Error::NotFound(what) => write!(f, "{} not found", what),
            Error::DataIntegrity(msg) => write!(f, "Data integrity error: {}", msg),
            Error::NotCm(label) => write!(f, "Newform {} is not CM", label),
            Error::Unavailable(msg) => write!(f, "Not available: {}", msg),
            Error::Store(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
