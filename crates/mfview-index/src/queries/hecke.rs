use mfview_types::EigenvalueRow;
use rusqlite::{Connection, params};

use super::{optional_json_column, to_json};
use crate::{Result, records::HeckeRecord};

pub fn insert_or_update(conn: &Connection, record: &HeckeRecord) -> Result<()> {
    let an = record.row.an.as_ref().map(to_json).transpose()?;

    conn.execute(
        r#"
        INSERT INTO mf_hecke_nf (hecke_orbit_code, n, an, trace)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(hecke_orbit_code, n) DO UPDATE SET
            an = ?3,
            trace = ?4
        "#,
        params![record.hecke_orbit_code, record.row.n, an, record.row.trace],
    )?;

    Ok(())
}

/// Eigenvalue rows of one orbit in increasing `n`
pub fn list_for_orbit(conn: &Connection, hecke_orbit_code: i64) -> Result<Vec<EigenvalueRow>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT n, an, trace
        FROM mf_hecke_nf
        WHERE hecke_orbit_code = ?1
        ORDER BY n ASC
        "#,
    )?;

    let rows = stmt
        .query_map([hecke_orbit_code], |row| {
            Ok(EigenvalueRow {
                n: row.get(0)?,
                an: optional_json_column(row, 1)?,
                trace: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(rows)
}
