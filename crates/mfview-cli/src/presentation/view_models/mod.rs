pub mod common;
pub mod embed;
pub mod import;
pub mod labels;
pub mod newform;
pub mod result;

pub use common::{CreateView, Guidance, StatusBadge, StatusLevel, ViewMode};
pub use embed::{EmbedRowViewModel, EmbedTableViewModel};
pub use import::ImportResultViewModel;
pub use labels::LabelListViewModel;
pub use newform::{NewformViewModel, QexpViewModel};
pub use result::CommandResultViewModel;
