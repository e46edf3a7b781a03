//! # Presentation Layer
//!
//! Console output follows a one-way flow:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! * `view_models/`: serializable data, no formatting logic. `--format json` dumps these as is.
//! * `presenters/`: build view models from engine objects and decide which tips to show.
//! * `views/`: `fmt::Display` layouts; `ViewMode` controls how much is printed.
//! * `renderers/`: pick JSON or text and print the badge and tips around the content.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, ViewMode,
};
