// mfview command line front end
//
// Handlers open the store, build a WebNewform through mfview-engine, and hand the
// result to a presenter. Presenters produce serializable view models; the console
// renderer prints them as JSON or through a text view.

mod args;
mod commands;
pub mod config;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ViewModeArgs};
pub use commands::run;
