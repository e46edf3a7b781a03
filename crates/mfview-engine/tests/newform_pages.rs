use mfview_engine::{
    EmbedFormat, Error, LmfdbLinks, NOT_AVAILABLE, NOT_IN_LMFDB, QexpFormat, WebNewform,
};
use mfview_index::Database;
use mfview_testing::assertions::{assert_grid_balanced, assert_math_delimiters_balanced};
use mfview_testing::fixtures::{CM, DELTA, GAPPED, QUADRATIC, TRACE_ONLY};
use mfview_testing::seeded_database;
use mfview_types::{
    EigenvalueRow, NewformLabel, NewformRow, NewformStore, Result, SpaceCharacters,
};

fn load(db: &Database, label: &str) -> WebNewform {
    WebNewform::by_label(db, label, &LmfdbLinks::default())
        .unwrap_or_else(|e| panic!("Failed to build {}: {}", label, e))
}

/// Store holding a single row, for shapes the seeded database does not cover
struct SingleForm {
    row: NewformRow,
    eigenvalues: Vec<EigenvalueRow>,
}

impl NewformStore for SingleForm {
    fn newform(&self, label: &NewformLabel) -> Result<Option<NewformRow>> {
        Ok((label.as_str() == self.row.label).then(|| self.row.clone()))
    }

    fn space_characters(&self, _space_label: &str) -> Result<Option<SpaceCharacters>> {
        Ok(None)
    }

    fn hecke_eigenvalues(&self, _hecke_orbit_code: i64) -> Result<Vec<EigenvalueRow>> {
        Ok(self.eigenvalues.clone())
    }
}

fn bare_row() -> NewformRow {
    NewformRow {
        label: "3.6.a.a".to_string(),
        space_label: "3.6.a".to_string(),
        level: 3,
        weight: 6,
        char_orbit: 1,
        hecke_orbit_code: 99,
        dim: 1,
        mf_dim: 3,
        cusp_dim: 1,
        eis_dim: 2,
        eis_new_dim: 2,
        nf_label: None,
        field_poly: None,
        hecke_ring_numerators: None,
        hecke_ring_denominators: None,
        inner_twist: vec![],
        is_cm: false,
        cm_disc: 0,
    }
}

#[test]
fn test_delta_page_attributes() {
    let db = seeded_database().unwrap();
    let form = load(&db, DELTA);

    assert_eq!(form.title(), "Newform 1.12.a.a");
    assert!(form.bread().is_empty());
    assert!(form.friends().is_empty());
    assert!(form.has_exact_qexp());
    assert_eq!(form.qexp_prec(), 12);
    assert_eq!(form.char_conrey(), 1);
    assert_eq!(form.char_conrey_str(), r"\chi_{1}(1,\cdot)");
    assert_eq!(form.char_conrey_link(), "/Character/Dirichlet/1/1");
    assert_eq!(form.char_orbit_label(), r"\(1\).a");
    assert_grid_balanced(form.dim_grid());
    assert_eq!(form.dim_grid().get("S", "new"), Some(1));
    assert_eq!(form.dim_grid().get("M", "all"), Some(2));

    let names: Vec<&str> = form.properties().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["Label", "Weight", "Character Orbit", "Representative Character", "Dimension"]
    );
}

#[test]
fn test_delta_q_expansion() {
    let db = seeded_database().unwrap();
    let form = load(&db, DELTA);

    assert_eq!(
        form.q_expansion(QexpFormat::Short, 3),
        r"\( q \) - \( 24 q^{2} \) + \( O(q^{3}) \)"
    );

    let default_prec = form.q_expansion(QexpFormat::Oneline, 10);
    assert!(default_prec.ends_with(r"- \( 113643 q^{9} \) + \( O(q^{10}) \)"));
    assert_math_delimiters_balanced(&default_prec);

    let all = form.q_expansion(QexpFormat::All, 3);
    assert!(all.ends_with(r"+ \( 534612 q^{11} \) + \( O(q^{12}) \)"));
}

#[test]
fn test_quadratic_field_q_expansion() {
    let db = seeded_database().unwrap();
    let form = load(&db, QUADRATIC);

    assert_eq!(
        form.q_expansion(QexpFormat::Oneline, 4),
        r"\(q\)\(+\beta_{1} q^{2}\)\(+\left(-2 \beta_{1} + 1\right) q^{3}\)\(+O(q^{4})\)"
    );
    assert_eq!(form.defining_polynomial().as_deref(), Some(r"\( x^{2} - x - 1 \)"));
    assert_eq!(form.order_basis(), r"\(\beta_{0} = 1\), \(\beta_{1} = \nu\)");
    assert_math_delimiters_balanced(&form.q_expansion(QexpFormat::All, 0));
}

#[test]
fn test_field_display_variants() {
    let db = seeded_database().unwrap();
    let links = LmfdbLinks::default();

    let delta = load(&db, DELTA);
    assert_eq!(
        delta.field_display(&links),
        r#"<a title="1.1.1.1 [nf.field.data]" knowl="nf.field.data" kwargs="label=1.1.1.1">\(\Q\)</a>"#
    );

    let quadratic = load(&db, QUADRATIC);
    assert_eq!(
        quadratic.field_display(&links),
        r#"\(\Q(\nu)\) = <a title="2.2.5.1 [nf.field.data]" knowl="nf.field.data" kwargs="label=2.2.5.1">\(\Q(\sqrt{5})\)</a>"#
    );

    let unlabeled = load(&db, TRACE_ONLY);
    assert_eq!(unlabeled.field_display(&links), r"\(\Q(\nu)\)");
    assert_eq!(unlabeled.field_knowl(&links), NOT_IN_LMFDB);
    assert_ne!(unlabeled.field_display(&links), delta.field_display(&links));
}

#[test]
fn test_cm_form() {
    let db = seeded_database().unwrap();
    let links = LmfdbLinks::new("https://www.lmfdb.org");
    let form = WebNewform::by_label(&db, CM, &links).unwrap();

    assert_eq!(form.char_conrey(), 6);
    assert_eq!(form.char_conrey_str(), r"\chi_{7}(6,\cdot)");
    assert_eq!(form.char_orbit_label(), r"\(7\).b");
    assert_eq!(form.inner_twist().len(), 1);
    assert_eq!(form.inner_twist()[0].index, 6);
    assert_eq!(
        form.inner_twist()[0].link,
        "https://www.lmfdb.org/Character/Dirichlet/7/6"
    );

    let last = form.properties().last().unwrap();
    assert_eq!((last.name.as_str(), last.value.as_str()), ("CM", "True"));

    assert_eq!(
        form.cm_field_knowl(&links).unwrap(),
        r#"<a title="2.0.7.1 [nf.field.data]" knowl="nf.field.data" kwargs="label=2.0.7.1">\(\Q(\sqrt{-7})\)</a>"#
    );
}

#[test]
fn test_cm_properties_table() {
    let db = seeded_database().unwrap();
    let form = load(&db, CM);

    let table = form
        .properties()
        .iter()
        .map(|p| format!("{}: {}", p.name, p.value))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(table, @r"
    Label: 7.3.b.a
    Weight: 3
    Character Orbit: 2
    Representative Character: \(\chi_{7}(6,\cdot)\)
    Dimension: 1
    CM: True
    ");
}

#[test]
fn test_cm_knowl_requires_cm() {
    let db = seeded_database().unwrap();
    let form = load(&db, DELTA);

    let err = form.cm_field_knowl(&LmfdbLinks::default()).unwrap_err();
    assert!(matches!(err, Error::NotCm(ref label) if label == DELTA));
    assert!(form.properties().iter().all(|p| p.name != "CM"));
}

#[test]
fn test_trace_only_form() {
    let db = seeded_database().unwrap();
    let form = load(&db, TRACE_ONLY);

    assert!(!form.has_exact_qexp());
    assert_eq!(form.q_expansion(QexpFormat::All, 10), "q + O(q^{2})");
    assert_eq!(form.defining_polynomial(), None);
    assert!(matches!(
        form.embedding(1, Some(2), 6, EmbedFormat::Embed),
        Err(Error::Unavailable(_))
    ));
}

#[test]
fn test_eigenvalue_gap_is_data_error() {
    let db = seeded_database().unwrap();
    let err = WebNewform::by_label(&db, GAPPED, &LmfdbLinks::default()).unwrap_err();
    assert!(matches!(err, Error::DataIntegrity(_)), "got {:?}", err);
    assert!(err.to_string().contains("missing eigenvalue"));
}

#[test]
fn test_label_errors() {
    let db = seeded_database().unwrap();
    let links = LmfdbLinks::default();

    for bad in ["1.12.a", "abc", "1.12.A.a"] {
        let err = WebNewform::by_label(&db, bad, &links).unwrap_err();
        assert!(matches!(err, Error::InvalidLabel(_)), "{}: {:?}", bad, err);
    }

    let err = WebNewform::by_label(&db, "1.12.a.b", &links).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_missing_space_is_not_found() {
    let store = SingleForm {
        row: bare_row(),
        eigenvalues: vec![],
    };
    let err = WebNewform::by_label(&store, "3.6.a.a", &LmfdbLinks::default()).unwrap_err();
    assert!(matches!(err, Error::NotFound(ref what) if what.contains("3.6.a")));
}

#[test]
fn test_supplied_space_skips_lookup() {
    let store = SingleForm {
        row: bare_row(),
        eigenvalues: vec![
            EigenvalueRow { n: 1, an: Some(vec![1]), trace: Some(1) },
            EigenvalueRow { n: 2, an: Some(vec![-6]), trace: Some(-6) },
            EigenvalueRow { n: 3, an: Some(vec![9]), trace: Some(9) },
        ],
    };
    let space = SpaceCharacters {
        conrey_labels: vec![1],
        cyc_degree: 1,
    };

    let form =
        WebNewform::new(&store, bare_row(), Some(space), &LmfdbLinks::default()).unwrap();
    assert!(form.has_exact_qexp());
    assert_eq!(form.qexp_prec(), 3);
    assert_eq!(form.order_basis(), NOT_AVAILABLE);
    assert_eq!(
        form.q_expansion(QexpFormat::Oneline, 10),
        r"\( q \) - \( 6 q^{2} \) + \( O(q^{3}) \)"
    );
}

#[test]
fn test_empty_conrey_labels_rejected() {
    let store = SingleForm {
        row: bare_row(),
        eigenvalues: vec![],
    };
    let space = SpaceCharacters {
        conrey_labels: vec![],
        cyc_degree: 1,
    };
    let err = WebNewform::new(&store, bare_row(), Some(space), &LmfdbLinks::default())
        .unwrap_err();
    assert!(matches!(err, Error::DataIntegrity(_)));
}
