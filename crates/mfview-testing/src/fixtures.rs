//! Sample newform data.
//!
//! The bundle holds three complete forms and two broken ones:
//! - `1.12.a.a` (the discriminant form, rational coefficients)
//! - `23.2.a.a` (coefficient field Q(sqrt 5), two-dimensional Hecke ring)
//! - `7.3.b.a` (CM by Q(sqrt -7), odd quadratic character)
//! - `11.2.a.a` stores exact a_n only up to n = 2, then traces
//! - `5.4.a.a` is missing its a_3 row

use anyhow::Result;
use mfview_index::{Database, HeckeRecord, ImportBundle, NewspaceRecord};
use mfview_types::{EigenvalueRow, NewformRow, SpaceCharacters};
use std::path::{Path, PathBuf};

pub const DELTA: &str = "1.12.a.a";
pub const QUADRATIC: &str = "23.2.a.a";
pub const CM: &str = "7.3.b.a";
pub const TRACE_ONLY: &str = "11.2.a.a";
pub const GAPPED: &str = "5.4.a.a";

/// Ramanujan tau(1..=12)
pub const TAU: [i64; 12] = [
    1, -24, 252, -1472, 4830, -6048, -16744, 84480, -113643, -115920, 534612, -370944,
];

#[allow(clippy::too_many_arguments)]
fn newform(
    label: &str,
    char_orbit: u32,
    hecke_orbit_code: i64,
    dims: [u64; 5],
    nf_label: Option<&str>,
    field_poly: Option<Vec<i64>>,
    inner_twist: Vec<u32>,
    cm_disc: i64,
) -> NewformRow {
    let parts: Vec<&str> = label.split('.').collect();
    let [dim, mf_dim, cusp_dim, eis_dim, eis_new_dim] = dims;
    let degree = field_poly.as_ref().map_or(1, |p| p.len().saturating_sub(1).max(1));

    NewformRow {
        label: label.to_string(),
        space_label: parts[..3].join("."),
        level: parts[0].parse().expect("numeric level"),
        weight: parts[1].parse().expect("numeric weight"),
        char_orbit,
        hecke_orbit_code,
        dim,
        mf_dim,
        cusp_dim,
        eis_dim,
        eis_new_dim,
        nf_label: nf_label.map(str::to_string),
        field_poly,
        hecke_ring_numerators: Some(
            (0..degree)
                .map(|i| {
                    let mut power = vec![0; i + 1];
                    power[i] = 1;
                    power
                })
                .collect(),
        ),
        hecke_ring_denominators: Some(vec![1; degree]),
        inner_twist,
        is_cm: cm_disc != 0,
        cm_disc,
    }
}

fn space(label: &str, conrey_labels: Vec<u32>) -> NewspaceRecord {
    NewspaceRecord {
        label: label.to_string(),
        characters: SpaceCharacters {
            conrey_labels,
            cyc_degree: 1,
        },
    }
}

fn exact_rows(code: i64, an: &[Vec<i64>]) -> Vec<HeckeRecord> {
    an.iter()
        .enumerate()
        .map(|(i, v)| HeckeRecord {
            hecke_orbit_code: code,
            row: EigenvalueRow {
                n: i as u32 + 1,
                an: Some(v.clone()),
                trace: Some(v[0] * v.len() as i64),
            },
        })
        .collect()
}

pub fn sample_bundle() -> ImportBundle {
    let mut hecke_nf = Vec::new();

    hecke_nf.extend(exact_rows(
        1,
        &TAU.iter().map(|&t| vec![t]).collect::<Vec<_>>(),
    ));

    // a_n = x + y*beta with beta^2 = beta + 1
    hecke_nf.extend(exact_rows(
        2,
        &[
            vec![1, 0],
            vec![0, 1],
            vec![1, -2],
            vec![-1, -1],
            vec![-1, 2],
            vec![-2, -1],
            vec![-2, 2],
            vec![1, -2],
            vec![2, -2],
            vec![-2, 1],
        ],
    ));

    hecke_nf.extend(exact_rows(
        3,
        &[
            vec![1],
            vec![-3],
            vec![0],
            vec![5],
            vec![0],
            vec![0],
            vec![-7],
            vec![-3],
            vec![9],
        ],
    ));

    hecke_nf.extend(exact_rows(4, &[vec![1], vec![-2]]));
    hecke_nf.push(HeckeRecord {
        hecke_orbit_code: 4,
        row: EigenvalueRow {
            n: 3,
            an: None,
            trace: Some(-1),
        },
    });

    hecke_nf.extend(
        exact_rows(5, &[vec![1], vec![4], vec![0], vec![-8]])
            .into_iter()
            .filter(|r| r.row.n != 3),
    );

    ImportBundle {
        newspaces: vec![
            space("1.12.a", vec![1]),
            space("23.2.a", vec![1]),
            space("7.3.b", vec![6]),
            space("11.2.a", vec![1]),
            space("5.4.a", vec![1]),
        ],
        newforms: vec![
            newform(DELTA, 1, 1, [1, 2, 1, 1, 1], Some("1.1.1.1"), Some(vec![0, 1]), vec![], 0),
            newform(
                QUADRATIC,
                1,
                2,
                [2, 3, 2, 1, 1],
                Some("2.2.5.1"),
                Some(vec![-1, -1, 1]),
                vec![],
                0,
            ),
            newform(CM, 2, 3, [1, 3, 1, 2, 2], Some("1.1.1.1"), Some(vec![0, 1]), vec![6], -7),
            newform(TRACE_ONLY, 1, 4, [1, 3, 1, 2, 1], None, None, vec![], 0),
            newform(GAPPED, 1, 5, [1, 3, 1, 2, 2], Some("1.1.1.1"), None, vec![], 0),
        ],
        hecke_nf,
    }
}

/// In-memory store loaded with [`sample_bundle`]
pub fn seeded_database() -> Result<Database> {
    let mut db = Database::open_in_memory()?;
    db.import_bundle(&sample_bundle())?;
    Ok(db)
}

/// Serialize [`sample_bundle`] to `dir/bundle.json`
pub fn write_sample_bundle(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("bundle.json");
    std::fs::write(&path, serde_json::to_string_pretty(&sample_bundle())?)?;
    Ok(path)
}
