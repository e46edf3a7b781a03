pub mod domain;
pub mod error;
pub mod store;
mod util;

pub use domain::*;
pub use error::{Error, Result};
pub use store::NewformStore;
pub use util::*;
