use mfview_types::NewformRow;
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{json_column, optional_json_column, to_json};
use crate::Result;

const COLUMNS: &str = r#"
    label, space_label, level, weight, char_orbit, hecke_orbit_code,
    dim, mf_dim, cusp_dim, eis_dim, eis_new_dim,
    nf_label, field_poly, hecke_ring_numerators, hecke_ring_denominators,
    inner_twist, is_cm, cm_disc
"#;

fn dimension(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    let value: i64 = row.get(idx)?;
    u64::try_from(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Integer, Box::new(e))
    })
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<NewformRow> {
    Ok(NewformRow {
        label: row.get(0)?,
        space_label: row.get(1)?,
        level: row.get(2)?,
        weight: row.get(3)?,
        char_orbit: row.get(4)?,
        hecke_orbit_code: row.get(5)?,
        dim: dimension(row, 6)?,
        mf_dim: dimension(row, 7)?,
        cusp_dim: dimension(row, 8)?,
        eis_dim: dimension(row, 9)?,
        eis_new_dim: dimension(row, 10)?,
        nf_label: row.get(11)?,
        field_poly: optional_json_column(row, 12)?,
        hecke_ring_numerators: optional_json_column(row, 13)?,
        hecke_ring_denominators: optional_json_column(row, 14)?,
        inner_twist: json_column(row, 15)?,
        is_cm: row.get(16)?,
        cm_disc: row.get(17)?,
    })
}

pub fn insert_or_update(conn: &Connection, form: &NewformRow) -> Result<()> {
    let field_poly = form.field_poly.as_ref().map(to_json).transpose()?;
    let numerators = form.hecke_ring_numerators.as_ref().map(to_json).transpose()?;
    let denominators = form
        .hecke_ring_denominators
        .as_ref()
        .map(to_json)
        .transpose()?;

    conn.execute(
        r#"
        INSERT INTO mf_newforms (label, space_label, level, weight, char_orbit, hecke_orbit_code,
                                 dim, mf_dim, cusp_dim, eis_dim, eis_new_dim,
                                 nf_label, field_poly, hecke_ring_numerators, hecke_ring_denominators,
                                 inner_twist, is_cm, cm_disc)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
        ON CONFLICT(label) DO UPDATE SET
            space_label = ?2,
            level = ?3,
            weight = ?4,
            char_orbit = ?5,
            hecke_orbit_code = ?6,
            dim = ?7,
            mf_dim = ?8,
            cusp_dim = ?9,
            eis_dim = ?10,
            eis_new_dim = ?11,
            nf_label = ?12,
            field_poly = ?13,
            hecke_ring_numerators = ?14,
            hecke_ring_denominators = ?15,
            inner_twist = ?16,
            is_cm = ?17,
            cm_disc = ?18
        "#,
        params![
            &form.label,
            &form.space_label,
            form.level,
            form.weight,
            form.char_orbit,
            form.hecke_orbit_code,
            form.dim as i64,
            form.mf_dim as i64,
            form.cusp_dim as i64,
            form.eis_dim as i64,
            form.eis_new_dim as i64,
            &form.nf_label,
            field_poly,
            numerators,
            denominators,
            to_json(&form.inner_twist)?,
            form.is_cm,
            form.cm_disc
        ],
    )?;

    Ok(())
}

pub fn get(conn: &Connection, label: &str) -> Result<Option<NewformRow>> {
    let sql = format!("SELECT {} FROM mf_newforms WHERE label = ?1", COLUMNS);
    let result = conn.query_row(&sql, [label], from_row).optional()?;
    Ok(result)
}

/// Labels ordered by level, weight, then label; optionally restricted to one level
pub fn list_labels(conn: &Connection, level: Option<u32>, limit: usize) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT label
        FROM mf_newforms
        WHERE ?1 IS NULL OR level = ?1
        ORDER BY level ASC, weight ASC, label ASC
        LIMIT ?2
        "#,
    )?;

    let labels = stmt
        .query_map(params![level, limit as i64], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, rusqlite::Error>>()?;

    Ok(labels)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM mf_newforms", [], |row| row.get(0))?;
    Ok(count as usize)
}
