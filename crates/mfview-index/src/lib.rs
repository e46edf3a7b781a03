// SQLite store for the three tables a newform page reads:
// mf_newforms (by label), mf_newspaces (by space label), mf_hecke_nf (by orbit code, ordered by n)

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::{HeckeRecord, ImportBundle, ImportSummary, NewspaceRecord};
pub use schema::SCHEMA_VERSION;
