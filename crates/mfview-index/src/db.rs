use mfview_types::{EigenvalueRow, NewformLabel, NewformRow, NewformStore, SpaceCharacters};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

use crate::queries::{hecke, newform, newspace};
use crate::records::{HeckeRecord, ImportBundle, ImportSummary, NewspaceRecord};
use crate::{Error, Result, schema};

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        debug!(path = %db_path.display(), "opening newform store");
        let conn = Connection::open(db_path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        schema::init_schema(&self.conn)
    }

    // Newspace operations

    pub fn insert_or_update_newspace(&self, space: &NewspaceRecord) -> Result<()> {
        newspace::insert_or_update(&self.conn, space)
    }

    pub fn get_space_characters(&self, label: &str) -> Result<Option<SpaceCharacters>> {
        newspace::get_characters(&self.conn, label)
    }

    // Newform operations

    pub fn insert_or_update_newform(&self, form: &NewformRow) -> Result<()> {
        newform::insert_or_update(&self.conn, form)
    }

    pub fn get_newform(&self, label: &str) -> Result<Option<NewformRow>> {
        newform::get(&self.conn, label)
    }

    pub fn list_labels(&self, level: Option<u32>, limit: usize) -> Result<Vec<String>> {
        newform::list_labels(&self.conn, level, limit)
    }

    pub fn count_newforms(&self) -> Result<usize> {
        newform::count(&self.conn)
    }

    // Hecke eigenvalue operations

    pub fn insert_or_update_hecke(&self, record: &HeckeRecord) -> Result<()> {
        hecke::insert_or_update(&self.conn, record)
    }

    pub fn get_hecke_rows(&self, hecke_orbit_code: i64) -> Result<Vec<EigenvalueRow>> {
        hecke::list_for_orbit(&self.conn, hecke_orbit_code)
    }

    // Import

    /// Write every row of the bundle in one transaction
    pub fn import_bundle(&mut self, bundle: &ImportBundle) -> Result<ImportSummary> {
        let tx = self.conn.transaction()?;

        for space in &bundle.newspaces {
            newspace::insert_or_update(&tx, space)?;
        }
        for form in &bundle.newforms {
            if !mfview_types::is_valid_label(&form.label) {
                return Err(Error::Query(format!("invalid newform label {}", form.label)));
            }
            newform::insert_or_update(&tx, form)?;
        }
        for record in &bundle.hecke_nf {
            hecke::insert_or_update(&tx, record)?;
        }

        tx.commit()?;

        let summary = ImportSummary {
            newspaces: bundle.newspaces.len(),
            newforms: bundle.newforms.len(),
            hecke_nf: bundle.hecke_nf.len(),
        };
        debug!(?summary, "import committed");
        Ok(summary)
    }

    /// Parse a JSON bundle from disk and import it
    pub fn import_file(&mut self, path: &Path) -> Result<ImportSummary> {
        let content = std::fs::read_to_string(path)?;
        let bundle: ImportBundle = serde_json::from_str(&content)?;
        self.import_bundle(&bundle)
    }
}

impl NewformStore for Database {
    fn newform(&self, label: &NewformLabel) -> mfview_types::Result<Option<NewformRow>> {
        Ok(self.get_newform(label.as_str())?)
    }

    fn space_characters(&self, space_label: &str) -> mfview_types::Result<Option<SpaceCharacters>> {
        Ok(self.get_space_characters(space_label)?)
    }

    fn hecke_eigenvalues(&self, hecke_orbit_code: i64) -> mfview_types::Result<Vec<EigenvalueRow>> {
        Ok(self.get_hecke_rows(hecke_orbit_code)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta() -> NewformRow {
        NewformRow {
            label: "1.12.a.a".to_string(),
            space_label: "1.12.a".to_string(),
            level: 1,
            weight: 12,
            char_orbit: 1,
            hecke_orbit_code: 4503599627370497,
            dim: 1,
            mf_dim: 2,
            cusp_dim: 1,
            eis_dim: 1,
            eis_new_dim: 1,
            nf_label: Some("1.1.1.1".to_string()),
            field_poly: Some(vec![0, 1]),
            hecke_ring_numerators: Some(vec![vec![1]]),
            hecke_ring_denominators: Some(vec![1]),
            inner_twist: vec![],
            is_cm: false,
            cm_disc: 0,
        }
    }

    #[test]
    fn test_schema_initialization() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.count_newforms().unwrap(), 0);
        assert!(db.get_hecke_rows(1).unwrap().is_empty());
    }

    #[test]
    fn test_newform_round_trips_optional_columns() {
        let db = Database::open_in_memory().unwrap();
        db.insert_or_update_newform(&delta()).unwrap();

        let retrieved = db.get_newform("1.12.a.a").unwrap().unwrap();
        assert_eq!(retrieved, delta());
        assert!(db.get_newform("1.12.a.b").unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_columns() {
        let db = Database::open_in_memory().unwrap();
        db.insert_or_update_newform(&delta()).unwrap();

        let mut changed = delta();
        changed.nf_label = None;
        changed.field_poly = None;
        db.insert_or_update_newform(&changed).unwrap();

        let retrieved = db.get_newform("1.12.a.a").unwrap().unwrap();
        assert_eq!(retrieved.nf_label, None);
        assert_eq!(retrieved.field_poly, None);
        assert_eq!(db.count_newforms().unwrap(), 1);
    }

    #[test]
    fn test_hecke_rows_sorted_by_n() {
        let db = Database::open_in_memory().unwrap();
        for n in [3u32, 1, 2] {
            db.insert_or_update_hecke(&HeckeRecord {
                hecke_orbit_code: 7,
                row: EigenvalueRow {
                    n,
                    an: if n == 3 { None } else { Some(vec![i64::from(n)]) },
                    trace: Some(i64::from(n)),
                },
            })
            .unwrap();
        }

        let rows = db.get_hecke_rows(7).unwrap();
        let ns: Vec<u32> = rows.iter().map(|r| r.n).collect();
        assert_eq!(ns, vec![1, 2, 3]);
        assert_eq!(rows[2].an, None);
        assert!(db.get_hecke_rows(8).unwrap().is_empty());
    }

    #[test]
    fn test_space_characters() {
        let db = Database::open_in_memory().unwrap();
        db.insert_or_update_newspace(&NewspaceRecord {
            label: "7.3.b".to_string(),
            characters: SpaceCharacters {
                conrey_labels: vec![6],
                cyc_degree: 1,
            },
        })
        .unwrap();

        let chars = db.get_space_characters("7.3.b").unwrap().unwrap();
        assert_eq!(chars.conrey_labels, vec![6]);
        assert!(db.get_space_characters("7.3.a").unwrap().is_none());
    }

    #[test]
    fn test_import_rejects_invalid_label_atomically() {
        let mut db = Database::open_in_memory().unwrap();
        let mut bad = delta();
        bad.label = "1.12.a".to_string();
        let bundle = ImportBundle {
            newspaces: vec![],
            newforms: vec![delta(), bad],
            hecke_nf: vec![],
        };

        assert!(matches!(db.import_bundle(&bundle), Err(Error::Query(_))));
        assert_eq!(db.count_newforms().unwrap(), 0);
    }

    #[test]
    fn test_list_labels() {
        let mut db = Database::open_in_memory().unwrap();
        let mut other = delta();
        other.label = "1.16.a.a".to_string();
        other.weight = 16;
        other.hecke_orbit_code = 1;
        db.import_bundle(&ImportBundle {
            newforms: vec![other, delta()],
            ..Default::default()
        })
        .unwrap();

        assert_eq!(db.list_labels(None, 10).unwrap(), vec!["1.12.a.a", "1.16.a.a"]);
        assert_eq!(db.list_labels(Some(1), 1).unwrap(), vec!["1.12.a.a"]);
        assert!(db.list_labels(Some(2), 10).unwrap().is_empty());
    }
}
