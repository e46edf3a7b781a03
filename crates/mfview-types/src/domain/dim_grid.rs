use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Index};

use super::records::NewformRow;

/// Row of a [`DimGrid`]: the whole space and its Eisenstein / cuspidal parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Space {
    /// All modular forms
    M,
    /// Cusp forms
    S,
    /// Eisenstein series
    E,
}

impl Space {
    pub const ALL: [Space; 3] = [Space::M, Space::S, Space::E];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "M" => Some(Space::M),
            "S" => Some(Space::S),
            "E" => Some(Space::E),
            _ => None,
        }
    }
}

/// Column of a [`DimGrid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    All,
    New,
    Old,
}

impl Part {
    pub const ALL: [Part; 3] = [Part::All, Part::New, Part::Old];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "all" => Some(Part::All),
            "new" => Some(Part::New),
            "old" => Some(Part::Old),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimRow {
    pub all: u64,
    pub new: u64,
    pub old: u64,
}

impl DimRow {
    fn split(all: u64, new: u64) -> Self {
        Self {
            all,
            new,
            old: all.saturating_sub(new),
        }
    }
}

impl Index<Part> for DimRow {
    type Output = u64;

    fn index(&self, part: Part) -> &u64 {
        match part {
            Part::All => &self.all,
            Part::New => &self.new,
            Part::Old => &self.old,
        }
    }
}

impl Add for DimRow {
    type Output = DimRow;

    fn add(self, other: DimRow) -> DimRow {
        DimRow {
            all: self.all + other.all,
            new: self.new + other.new,
            old: self.old + other.old,
        }
    }
}

/// Dimensions of a space split into all/new/old, for M, S and E.
///
/// Grids from several spaces are combined with [`DimGrid::combine`] (or `+`);
/// [`DimGrid::zero`] is the identity, so `grids.into_iter().sum()` folds from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimGrid {
    #[serde(rename = "M")]
    pub m: DimRow,
    #[serde(rename = "S")]
    pub s: DimRow,
    #[serde(rename = "E")]
    pub e: DimRow,
}

impl DimGrid {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build the grid from the five dimension columns of a newform row.
    ///
    /// The new part of M is the cuspidal newform dimension plus the Eisenstein new dimension.
    pub fn from_row(row: &NewformRow) -> Self {
        Self::from_dims(
            row.mf_dim,
            row.dim,
            row.eis_new_dim,
            row.cusp_dim,
            row.eis_dim,
        )
    }

    pub fn from_dims(mf_dim: u64, dim: u64, eis_new_dim: u64, cusp_dim: u64, eis_dim: u64) -> Self {
        Self {
            m: DimRow::split(mf_dim, dim + eis_new_dim),
            s: DimRow::split(cusp_dim, dim),
            e: DimRow::split(eis_dim, eis_new_dim),
        }
    }

    pub fn combine(&self, other: &DimGrid) -> DimGrid {
        *self + *other
    }

    /// String-keyed lookup, e.g. `grid.get("S", "new")`
    pub fn get(&self, space: &str, part: &str) -> Option<u64> {
        Some(self[Space::parse(space)?][Part::parse(part)?])
    }
}

impl Index<Space> for DimGrid {
    type Output = DimRow;

    fn index(&self, space: Space) -> &DimRow {
        match space {
            Space::M => &self.m,
            Space::S => &self.s,
            Space::E => &self.e,
        }
    }
}

impl Add for DimGrid {
    type Output = DimGrid;

    fn add(self, other: DimGrid) -> DimGrid {
        DimGrid {
            m: self.m + other.m,
            s: self.s + other.s,
            e: self.e + other.e,
        }
    }
}

impl AddAssign for DimGrid {
    fn add_assign(&mut self, other: DimGrid) {
        *self = *self + other;
    }
}

impl Sum for DimGrid {
    fn sum<I: Iterator<Item = DimGrid>>(iter: I) -> Self {
        iter.fold(DimGrid::zero(), Add::add)
    }
}

impl<'a> Sum<&'a DimGrid> for DimGrid {
    fn sum<I: Iterator<Item = &'a DimGrid>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DimGrid {
        // S_12(1): mf_dim 2, cusp 1, eis 1
        DimGrid::from_dims(2, 1, 1, 1, 1)
    }

    fn other() -> DimGrid {
        DimGrid::from_dims(9, 2, 1, 6, 3)
    }

    #[test]
    fn test_rows_split_consistently() {
        for grid in [sample(), other()] {
            for space in Space::ALL {
                let row = grid[space];
                assert_eq!(row.all, row.new + row.old, "{:?}", space);
            }
        }
    }

    #[test]
    fn test_from_dims_layout() {
        let grid = other();
        assert_eq!(grid[Space::M], DimRow { all: 9, new: 3, old: 6 });
        assert_eq!(grid[Space::S], DimRow { all: 6, new: 2, old: 4 });
        assert_eq!(grid[Space::E], DimRow { all: 3, new: 1, old: 2 });
        assert_eq!(
            grid[Space::S][Part::New] + grid[Space::E][Part::New],
            grid[Space::M][Part::New]
        );
    }

    #[test]
    fn test_string_keys() {
        let grid = other();
        assert_eq!(grid.get("S", "all"), Some(6));
        assert_eq!(grid.get("E", "old"), Some(2));
        assert_eq!(grid.get("X", "all"), None);
        assert_eq!(grid.get("M", "cusp"), None);
    }

    #[test]
    fn test_zero_is_identity() {
        assert_eq!(sample().combine(&DimGrid::zero()), sample());
        assert_eq!(DimGrid::zero().combine(&sample()), sample());
    }

    #[test]
    fn test_combine_commutes_and_associates() {
        let (a, b, c) = (sample(), other(), DimGrid::from_dims(4, 0, 2, 2, 2));
        assert_eq!(a.combine(&b), b.combine(&a));
        assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
    }

    #[test]
    fn test_sum_folds_from_zero() {
        let empty: Vec<DimGrid> = Vec::new();
        assert_eq!(empty.iter().sum::<DimGrid>(), DimGrid::zero());

        let total: DimGrid = vec![sample(), other()].into_iter().sum();
        assert_eq!(total[Space::M].all, 11);
        assert_eq!(total[Space::S].new, 3);
    }

    #[test]
    fn test_serializes_with_space_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["S"]["all"], 1);
        assert_eq!(json["M"]["new"], 2);
    }
}
