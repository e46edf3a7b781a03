mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_import_reports_counts() {
    let fixture = TestFixture::new();
    let bundle = fixture.bundle().to_string_lossy().to_string();
    let result = fixture.json(&["import", &bundle]).unwrap();

    assert_eq!(result["content"]["newforms"], 5);
    assert_eq!(result["content"]["newspaces"], 5);
    assert_eq!(result["badge"]["level"], "success");
    assert!(fixture.data_dir().join("mfview.db").exists());
}

#[test]
fn test_import_is_idempotent() {
    let fixture = TestFixture::imported();
    fixture.import().unwrap();

    let result = fixture.json(&["labels"]).unwrap();
    assert_eq!(result["content"]["total"], 5);
}

#[test]
fn test_import_rejects_bad_bundle() {
    let fixture = TestFixture::new();
    let bad = fixture.data_dir().join("bad.json");
    std::fs::write(&bad, "{\"newforms\": [{\"label\": 3}]}").unwrap();

    fixture
        .command()
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to import"));
}

#[test]
fn test_labels_sorted_by_level() {
    let fixture = TestFixture::imported();
    let result = fixture.json(&["labels"]).unwrap();

    let labels: Vec<&str> = result["content"]["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l.as_str().unwrap())
        .collect();
    assert_eq!(labels, ["1.12.a.a", "5.4.a.a", "7.3.b.a", "11.2.a.a", "23.2.a.a"]);

    let filtered = fixture.json(&["labels", "--level", "7"]).unwrap();
    assert_eq!(filtered["content"]["labels"][0], "7.3.b.a");
    assert_eq!(filtered["content"]["labels"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_qexp_plain_output() {
    let fixture = TestFixture::imported();

    let output = fixture
        .command()
        .args(["qexp", "1.12.a.a", "--prec", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\\( q \\) - \\( 24 q^{2} \\) + \\( O(q^{3}) \\)\n"
    );
}

#[test]
fn test_qexp_uses_config_default() {
    let fixture = TestFixture::imported();
    fixture.write_config("qexp_prec_max = 4\n").unwrap();

    let result = fixture.json(&["qexp", "23.2.a.a"]).unwrap();
    assert_eq!(result["content"]["prec_max"], 4);
    assert_eq!(
        result["content"]["qexp"],
        r"\(q\)\(+\beta_{1} q^{2}\)\(+\left(-2 \beta_{1} + 1\right) q^{3}\)\(+O(q^{4})\)"
    );
}

#[test]
fn test_embed_satake_rows_are_primes() {
    let fixture = TestFixture::imported();
    let result = fixture
        .json(&["embed", "1.12.a.a", "--kind", "satake_angle", "--from", "2", "--to", "12"])
        .unwrap();

    let ns: Vec<u64> = result["content"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["n"].as_u64().unwrap())
        .collect();
    assert_eq!(ns, [2, 3, 5, 7, 11]);
    assert!(result["content"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r.get("value").is_some()));
}

#[test]
fn test_embed_uses_float_prec() {
    let fixture = TestFixture::imported();
    fixture.write_config("float_prec = 3\n").unwrap();

    let result = fixture
        .json(&["embed", "23.2.a.a", "-m", "2", "--from", "2", "--to", "4"])
        .unwrap();
    assert_eq!(result["content"]["root"], "1.618");
    assert_eq!(result["content"]["rows"][0]["value"], "1.618");
    assert_eq!(result["content"]["rows"][1]["value"], "-2.236");
}

#[test]
fn test_embed_rows_past_stored_range_report_errors() {
    let fixture = TestFixture::imported();
    let result = fixture
        .json(&["embed", "1.12.a.a", "--from", "12", "--to", "14"])
        .unwrap();

    let rows = result["content"]["rows"].as_array().unwrap();
    assert!(rows[0].get("value").is_some());
    assert!(rows[1]["error"].as_str().unwrap().contains("a_13"));
    assert_eq!(result["badge"]["level"], "info");
}

#[test]
fn test_embed_rejects_bad_embedding_number() {
    let fixture = TestFixture::imported();

    fixture
        .command()
        .args(["embed", "23.2.a.a", "-m", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 embedding(s)"));
}

#[test]
fn test_no_command_shows_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("mfview import <bundle.json>"));
}
