use std::fmt;

/// Result type for mfview-algebra operations
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric failures. Exact arithmetic never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Polynomial has no nonzero coefficient
    ZeroPolynomial,

    /// Root iteration did not settle for a polynomial of this degree
    NoConvergence { degree: usize },

    /// Character label or argument shares a factor with the modulus
    NotCoprime { modulus: u64, value: u64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroPolynomial => write!(f, "zero polynomial has no roots"),
            Error::NoConvergence { degree } => {
                write!(f, "root finding did not converge (degree {})", degree)
            }
            Error::NotCoprime { modulus, value } => {
                write!(f, "{} is not coprime to modulus {}", value, modulus)
            }
        }
    }
}

impl std::error::Error for Error {}
