use mfview_types::{EigenvalueRow, NewformRow, SpaceCharacters};
use serde::{Deserialize, Serialize};

/// Row of `mf_newspaces`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewspaceRecord {
    /// Space label, e.g. `7.3.b`
    pub label: String,
    #[serde(flatten)]
    pub characters: SpaceCharacters,
}

/// Row of `mf_hecke_nf`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeckeRecord {
    pub hecke_orbit_code: i64,
    #[serde(flatten)]
    pub row: EigenvalueRow,
}

/// JSON document accepted by [`crate::Database::import_bundle`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportBundle {
    #[serde(default)]
    pub newspaces: Vec<NewspaceRecord>,
    #[serde(default)]
    pub newforms: Vec<NewformRow>,
    #[serde(default)]
    pub hecke_nf: Vec<HeckeRecord>,
}

/// Row counts written by one import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub newspaces: usize,
    pub newforms: usize,
    pub hecke_nf: usize,
}
