use crate::{EigenvalueRow, NewformLabel, NewformRow, Result, SpaceCharacters};

/// Read-only view of the three tables a newform page is built from.
///
/// Lookups return `Ok(None)` for absent keys; `Err` is reserved for store failures.
pub trait NewformStore {
    /// Row of `mf_newforms` keyed by newform label
    fn newform(&self, label: &NewformLabel) -> Result<Option<NewformRow>>;

    /// `conrey_labels` and `cyc_degree` of the `mf_newspaces` row keyed by space label
    fn space_characters(&self, space_label: &str) -> Result<Option<SpaceCharacters>>;

    /// Rows of `mf_hecke_nf` for an orbit, sorted by `n`
    fn hecke_eigenvalues(&self, hecke_orbit_code: i64) -> Result<Vec<EigenvalueRow>>;
}

impl<S: NewformStore + ?Sized> NewformStore for &S {
    fn newform(&self, label: &NewformLabel) -> Result<Option<NewformRow>> {
        (**self).newform(label)
    }

    fn space_characters(&self, space_label: &str) -> Result<Option<SpaceCharacters>> {
        (**self).space_characters(space_label)
    }

    fn hecke_eigenvalues(&self, hecke_orbit_code: i64) -> Result<Vec<EigenvalueRow>> {
        (**self).hecke_eigenvalues(hecke_orbit_code)
    }
}
