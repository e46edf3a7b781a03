use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the newform store
#[derive(Debug)]
pub enum Error {
    /// SQLite rejected a statement
    Database(rusqlite::Error),

    /// A vector column or the import bundle is not valid JSON for its record
    Json(serde_json::Error),

    /// The bundle or database file could not be read
    Io(std::io::Error),

    /// Rows that are well-formed SQL but not a valid newform record
    Query(String),
}

impl Error {
    /// A column or table the current schema expects is missing from the file
    pub fn is_stale_schema(&self) -> bool {
        match self {
            Error::Database(err) => {
                let msg = err.to_string();
                msg.contains("no such column") || msg.contains("no such table")
            }
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) if self.is_stale_schema() => write!(
                f,
                "Store was written by another mfview version ({}). Re-run `mfview import` to rebuild it.",
                err
            ),
            Error::Database(err) => write!(f, "Database error: {}", err),
            Error::Json(err) => write!(f, "Malformed record JSON: {}", err),
            Error::Io(err) => write!(f, "Cannot read store input: {}", err),
            Error::Query(msg) => write!(f, "Invalid record: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Query(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

// The engine only sees the store through `NewformStore`, which speaks `mfview_types::Error`.
impl From<Error> for mfview_types::Error {
    fn from(err: Error) -> Self {
        mfview_types::Error::Store(err.to_string())
    }
}
