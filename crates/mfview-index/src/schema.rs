use rusqlite::Connection;

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 3;

// NOTE: vector-valued columns (field_poly, hecke_ring_*, inner_twist,
// conrey_labels, an) are stored as JSON text. The store is rebuilt from import
// bundles, so a version mismatch drops everything instead of migrating.

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != SCHEMA_VERSION {
        drop_all_tables(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS mf_newspaces (
            label TEXT PRIMARY KEY,
            conrey_labels TEXT NOT NULL,
            cyc_degree INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS mf_newforms (
            label TEXT PRIMARY KEY,
            space_label TEXT NOT NULL,
            level INTEGER NOT NULL,
            weight INTEGER NOT NULL,
            char_orbit INTEGER NOT NULL,
            hecke_orbit_code INTEGER NOT NULL UNIQUE,
            dim INTEGER NOT NULL,
            mf_dim INTEGER NOT NULL,
            cusp_dim INTEGER NOT NULL,
            eis_dim INTEGER NOT NULL,
            eis_new_dim INTEGER NOT NULL,
            nf_label TEXT,
            field_poly TEXT,
            hecke_ring_numerators TEXT,
            hecke_ring_denominators TEXT,
            inner_twist TEXT NOT NULL DEFAULT '[]',
            is_cm BOOLEAN NOT NULL DEFAULT 0,
            cm_disc INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS mf_hecke_nf (
            hecke_orbit_code INTEGER NOT NULL,
            n INTEGER NOT NULL,
            an TEXT,
            trace INTEGER,
            PRIMARY KEY (hecke_orbit_code, n)
        );

        CREATE INDEX IF NOT EXISTS idx_newforms_space ON mf_newforms(space_label);
        CREATE INDEX IF NOT EXISTS idx_newforms_level ON mf_newforms(level, weight);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS mf_hecke_nf;
        DROP TABLE IF EXISTS mf_newforms;
        DROP TABLE IF EXISTS mf_newspaces;
        "#,
    )?;
    Ok(())
}
