use serde::{Deserialize, Serialize};

/// Newform row as stored in the `mf_newforms` table.
///
/// Every column the presenter reads is named here; optional columns stay `Option`
/// so missing data is handled at the call site rather than discovered at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewformRow {
    pub label: String,
    pub space_label: String,
    pub level: u32,
    pub weight: u32,
    /// 1-based index of the character orbit within the level
    pub char_orbit: u32,
    pub hecke_orbit_code: i64,
    pub dim: u64,
    pub mf_dim: u64,
    pub cusp_dim: u64,
    pub eis_dim: u64,
    pub eis_new_dim: u64,
    #[serde(default)]
    pub nf_label: Option<String>,
    /// Defining polynomial of the coefficient field, constant term first
    #[serde(default)]
    pub field_poly: Option<Vec<i64>>,
    /// Numerators of the Hecke ring basis as polynomials in nu, constant term first
    #[serde(default)]
    pub hecke_ring_numerators: Option<Vec<Vec<i64>>>,
    #[serde(default)]
    pub hecke_ring_denominators: Option<Vec<i64>>,
    /// Conrey indices of the inner twists
    #[serde(default)]
    pub inner_twist: Vec<u32>,
    #[serde(default, alias = "is_CM")]
    pub is_cm: bool,
    /// CM discriminant, 0 when the form has no CM
    #[serde(default)]
    pub cm_disc: i64,
}

/// Character data of a newspace: the Conrey labels of its character orbit
/// and the degree of the cyclotomic field the character values generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceCharacters {
    pub conrey_labels: Vec<u32>,
    pub cyc_degree: u32,
}

/// One row of `mf_hecke_nf`: the n-th coefficient of a Hecke orbit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EigenvalueRow {
    pub n: u32,
    /// Exact a_n in the Hecke ring basis; absent when only the trace was stored
    #[serde(default)]
    pub an: Option<Vec<i64>>,
    #[serde(default)]
    pub trace: Option<i64>,
}

impl EigenvalueRow {
    /// True when the row carries a full (non-empty) eigenvalue vector
    pub fn is_exact(&self) -> bool {
        self.an.as_ref().is_some_and(|an| !an.is_empty())
    }
}
