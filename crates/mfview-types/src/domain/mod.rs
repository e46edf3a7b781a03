mod dim_grid;
mod label;
mod records;

pub use dim_grid::{DimGrid, DimRow, Part, Space};
pub use label::{NewformLabel, is_valid_label};
pub use records::{EigenvalueRow, NewformRow, SpaceCharacters};
