//! Display-side algebra for newform pages.
//!
//! Only what the presenter needs: sparse polynomials over Q in named variables,
//! truncated power series over them, LaTeX rendering that follows the usual
//! computer-algebra conventions (descending degrevlex terms, `\beta_{1}` style
//! variable names, `O(q^{n})` remainders), and a few numeric routines
//! (complex roots, primes, Dirichlet character values).

pub mod character;
pub mod error;
pub mod latex;
pub mod numeric;
pub mod polynomial;
pub mod power_series;
pub mod primes;

pub use character::{CharacterValue, conrey_character_value};
pub use error::{Error, Result};
pub use latex::{latex_rational, latex_variable_name};
pub use numeric::{complex_roots, format_complex, format_real};
pub use polynomial::Polynomial;
pub use power_series::PowerSeries;
pub use primes::{PrimeRange, is_prime, prime_range};

pub use num_bigint::BigInt;
pub use num_complex::Complex64;
pub use num_rational::BigRational;
