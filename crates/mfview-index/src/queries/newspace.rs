use mfview_types::SpaceCharacters;
use rusqlite::{Connection, OptionalExtension, params};

use super::{json_column, to_json};
use crate::{Result, records::NewspaceRecord};

pub fn insert_or_update(conn: &Connection, space: &NewspaceRecord) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO mf_newspaces (label, conrey_labels, cyc_degree)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(label) DO UPDATE SET
            conrey_labels = ?2,
            cyc_degree = ?3
        "#,
        params![
            &space.label,
            to_json(&space.characters.conrey_labels)?,
            space.characters.cyc_degree
        ],
    )?;

    Ok(())
}

pub fn get_characters(conn: &Connection, label: &str) -> Result<Option<SpaceCharacters>> {
    let result = conn
        .query_row(
            r#"
        SELECT conrey_labels, cyc_degree
        FROM mf_newspaces
        WHERE label = ?1
        "#,
            [label],
            |row| {
                Ok(SpaceCharacters {
                    conrey_labels: json_column(row, 0)?,
                    cyc_degree: row.get(1)?,
                })
            },
        )
        .optional()?;

    Ok(result)
}
