//! Testing infrastructure for mfview integration tests.
//!
//! - `fixtures`: a small bundle of real newforms (plus deliberately broken ones)
//!   and helpers to load it into a store or onto disk
//! - `assertions`: checks shared by the engine and CLI test suites

pub mod assertions;
pub mod fixtures;

pub use fixtures::{sample_bundle, seeded_database, write_sample_bundle};
