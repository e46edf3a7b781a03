use mfview_types::{
    DimGrid, EigenvalueRow, Error, NewformLabel, NewformRow, NewformStore, Result,
    SpaceCharacters, orbit_letter,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::links::CharacterLinker;

/// One `(name, value)` line of the properties box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// Breadcrumb or related-object link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InnerTwist {
    /// Conrey index of the twisting character
    pub index: u32,
    pub link: String,
}

/// A newform page: the stored row plus every attribute derived from it.
///
/// Built once per request by [`WebNewform::by_label`] or [`WebNewform::new`]
/// and read-only afterwards.
#[derive(Debug, Clone)]
pub struct WebNewform {
    pub(crate) row: NewformRow,
    pub(crate) dim_grid: DimGrid,
    pub(crate) characters: SpaceCharacters,
    /// `qexp[0]` is the zero vector, `qexp[n]` the exact a_n
    pub(crate) qexp: Vec<Vec<i64>>,
    pub(crate) qexp_prec: usize,
    pub(crate) has_exact_qexp: bool,
    char_conrey: u32,
    char_conrey_str: String,
    char_conrey_link: String,
    inner_twist: Vec<InnerTwist>,
    char_orbit_label: String,
    properties: Vec<Property>,
    title: String,
    bread: Vec<PageLink>,
    friends: Vec<PageLink>,
}

impl WebNewform {
    /// Validate `label`, fetch its row and build the page.
    pub fn by_label<S, L>(store: &S, label: &str, links: &L) -> Result<Self>
    where
        S: NewformStore + ?Sized,
        L: CharacterLinker + ?Sized,
    {
        let label = NewformLabel::parse(label).inspect_err(|e| warn!("{}", e))?;
        debug!(label = %label, "looking up newform");

        let Some(row) = store.newform(&label)? else {
            warn!(label = %label, "newform not found");
            return Err(Error::NotFound(format!("Newform {}", label)));
        };

        Self::new(store, row, None, links)
    }

    /// Build the page for an already fetched row.
    ///
    /// `space` is the parent space's character data when the caller has it;
    /// otherwise it is looked up by `row.space_label`.
    pub fn new<S, L>(
        store: &S,
        row: NewformRow,
        space: Option<SpaceCharacters>,
        links: &L,
    ) -> Result<Self>
    where
        S: NewformStore + ?Sized,
        L: CharacterLinker + ?Sized,
    {
        let dim_grid = DimGrid::from_row(&row);

        let characters = match space {
            Some(characters) => characters,
            None => {
                debug!(space = %row.space_label, "fetching space characters");
                store.space_characters(&row.space_label)?.ok_or_else(|| {
                    warn!(space = %row.space_label, "newspace not found");
                    Error::NotFound(format!("Newspace {}", row.space_label))
                })?
            }
        };

        let eigenvalues = store.hecke_eigenvalues(row.hecke_orbit_code)?;
        debug!(
            label = %row.label,
            rows = eigenvalues.len(),
            "fetched hecke eigenvalues"
        );
        let (qexp, has_exact_qexp) = exact_qexp(&eigenvalues, row.dim as usize)
            .inspect_err(|e| warn!(label = %row.label, "{}", e))?;
        let qexp_prec = qexp.len() - 1;

        let char_conrey = *characters.conrey_labels.first().ok_or_else(|| {
            Error::DataIntegrity(format!("space {} has no Conrey labels", row.space_label))
        })?;
        let char_conrey_str = format!(r"\chi_{{{}}}({},\cdot)", row.level, char_conrey);
        let char_conrey_link = links.url_character("Dirichlet", row.level, char_conrey);

        let inner_twist = row
            .inner_twist
            .iter()
            .map(|&index| InnerTwist {
                index,
                link: links.url_character("Dirichlet", row.level, index),
            })
            .collect();

        let letters = orbit_letter(row.char_orbit).ok_or_else(|| {
            Error::DataIntegrity(format!("character orbit index 0 for {}", row.label))
        })?;
        let char_orbit_label = format!(r"\({}\).{}", row.level, letters);

        let mut properties = vec![
            Property::new("Label", row.label.clone()),
            Property::new("Weight", row.weight.to_string()),
            Property::new("Character Orbit", row.char_orbit.to_string()),
            Property::new("Representative Character", format!(r"\({}\)", char_conrey_str)),
            Property::new("Dimension", row.dim.to_string()),
        ];
        if row.is_cm {
            properties.push(Property::new("CM", "True"));
        }

        let title = format!("Newform {}", row.label);
        debug!(label = %row.label, exact = has_exact_qexp, qexp_prec, "newform ready");

        Ok(Self {
            row,
            dim_grid,
            characters,
            qexp,
            qexp_prec,
            has_exact_qexp,
            char_conrey,
            char_conrey_str,
            char_conrey_link,
            inner_twist,
            char_orbit_label,
            properties,
            title,
            bread: Vec::new(),
            friends: Vec::new(),
        })
    }

    pub fn label(&self) -> &str {
        &self.row.label
    }

    pub fn row(&self) -> &NewformRow {
        &self.row
    }

    pub fn level(&self) -> u32 {
        self.row.level
    }

    pub fn weight(&self) -> u32 {
        self.row.weight
    }

    pub fn dim(&self) -> u64 {
        self.row.dim
    }

    pub fn dim_grid(&self) -> &DimGrid {
        &self.dim_grid
    }

    pub fn characters(&self) -> &SpaceCharacters {
        &self.characters
    }

    pub fn qexp(&self) -> &[Vec<i64>] {
        &self.qexp
    }

    pub fn qexp_prec(&self) -> usize {
        self.qexp_prec
    }

    pub fn has_exact_qexp(&self) -> bool {
        self.has_exact_qexp
    }

    pub fn char_conrey(&self) -> u32 {
        self.char_conrey
    }

    pub fn char_conrey_str(&self) -> &str {
        &self.char_conrey_str
    }

    pub fn char_conrey_link(&self) -> &str {
        &self.char_conrey_link
    }

    pub fn inner_twist(&self) -> &[InnerTwist] {
        &self.inner_twist
    }

    pub fn char_orbit_label(&self) -> &str {
        &self.char_orbit_label
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bread(&self) -> &[PageLink] {
        &self.bread
    }

    pub fn friends(&self) -> &[PageLink] {
        &self.friends
    }
}

/// Exact coefficient vectors `[0, a_1, a_2, ...]` and whether every row was exact.
///
/// Rows must be numbered `1, 2, 3, ...` with no gaps. Reading stops at the
/// first trace-only row.
fn exact_qexp(rows: &[EigenvalueRow], dim: usize) -> Result<(Vec<Vec<i64>>, bool)> {
    let mut qexp = vec![vec![0; dim]];
    if rows.is_empty() {
        return Ok((qexp, false));
    }

    for (i, row) in rows.iter().enumerate() {
        if row.n as usize != i + 1 {
            return Err(Error::DataIntegrity(format!(
                "missing eigenvalue a_{} (found a_{})",
                i + 1,
                row.n
            )));
        }
        match &row.an {
            Some(an) if row.is_exact() => qexp.push(an.clone()),
            _ => return Ok((qexp, false)),
        }
    }

    Ok((qexp, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(n: u32, an: &[i64]) -> EigenvalueRow {
        EigenvalueRow {
            n,
            an: Some(an.to_vec()),
            trace: None,
        }
    }

    fn trace_only(n: u32) -> EigenvalueRow {
        EigenvalueRow {
            n,
            an: None,
            trace: Some(0),
        }
    }

    #[test]
    fn test_contiguous_rows_are_exact() {
        let rows = [exact(1, &[1]), exact(2, &[-24]), exact(3, &[252])];
        let (qexp, is_exact) = exact_qexp(&rows, 1).unwrap();
        assert!(is_exact);
        assert_eq!(qexp, vec![vec![0], vec![1], vec![-24], vec![252]]);
    }

    #[test]
    fn test_gap_is_rejected() {
        let rows = [exact(1, &[1]), exact(2, &[-24]), exact(4, &[-1472])];
        let err = exact_qexp(&rows, 1).unwrap_err();
        assert!(matches!(err, Error::DataIntegrity(_)));
        assert!(err.to_string().contains("missing eigenvalue"));
    }

    #[test]
    fn test_trace_row_stops_exact_prefix() {
        let rows = [exact(1, &[1, 0]), trace_only(2), exact(3, &[0, 1])];
        let (qexp, is_exact) = exact_qexp(&rows, 2).unwrap();
        assert!(!is_exact);
        assert_eq!(qexp.len(), 2);
    }

    #[test]
    fn test_empty_vector_counts_as_trace_only() {
        let rows = [exact(1, &[1]), exact(2, &[])];
        let (_, is_exact) = exact_qexp(&rows, 1).unwrap();
        assert!(!is_exact);
    }

    #[test]
    fn test_no_rows_is_not_exact() {
        let (qexp, is_exact) = exact_qexp(&[], 2).unwrap();
        assert!(!is_exact);
        assert_eq!(qexp, vec![vec![0, 0]]);
    }
}
