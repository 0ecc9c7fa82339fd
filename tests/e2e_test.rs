/// End-to-end tests driving the real binary. No test here enables
/// --fetch, so no network access is required.
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_ANALYZER_RESULT: &str = r#"
analyzer:
  result:
    packages:
      - id: "PyPI::requests:2.31.0"
        purl: "pkg:pypi/requests@2.31.0"
        declared_licenses: []
        declared_licenses_processed:
          spdx_expression: ""
      - id: "PyPI::urllib3:1.26.0"
        declared_licenses:
          - "MIT"
        declared_licenses_processed:
          spdx_expression: "MIT"
      - id: "npm::lodash:4.17.21"
        declared_licenses:
          - "NOASSERTION"
"#;

fn cmd() -> Command {
    Command::cargo_bin("ort-pypi-fetch").unwrap()
}

#[test]
fn test_missing_input_file_exits_nonzero() {
    cmd()
        .arg("/nonexistent/analyzer-result.yml")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ORT analyzer result not found"));
}

#[test]
fn test_malformed_document_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("analyzer-result.yml");
    fs::write(&input, "scanner: {}").unwrap();

    cmd()
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to parse ORT analyzer result",
        ));
}

#[test]
fn test_scan_without_fetch_writes_stats() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("analyzer-result.yml");
    fs::write(&input, SAMPLE_ANALYZER_RESULT).unwrap();
    let output_dir = temp.path().join("out");

    cmd()
        .arg(&input)
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("PYPI LICENSE FETCH REPORT"))
        .stdout(predicate::str::contains(
            "Total packages with missing licenses: 2",
        ));

    let stats = fs::read_to_string(output_dir.join("pypi-fetch-stats.txt")).unwrap();
    assert!(stats.contains("Total missing: 2"));
    assert!(stats.contains("ScanCode Workload Reduction: 0.0%"));
}

#[test]
fn test_json_and_csv_exports() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("analyzer-result.yml");
    fs::write(&input, SAMPLE_ANALYZER_RESULT).unwrap();
    let output_dir = temp.path().join("out");

    cmd()
        .arg(&input)
        .arg("--json")
        .arg("--csv")
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success();

    let full: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(output_dir.join("pypi-licenses-full.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(full["statistics"]["total_missing"], 2);
    let ids: Vec<&str> = full["packages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["PyPI::requests:2.31.0", "npm::lodash:4.17.21"]);

    let found: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(output_dir.join("pypi-licenses-found.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(found["count"], 0);

    let csv = fs::read_to_string(output_dir.join("pypi-licenses.csv")).unwrap();
    assert!(csv.starts_with("id,ecosystem,name,version,purl"));
    assert!(csv.contains("PyPI::requests:2.31.0,PyPI,requests,2.31.0"));
    assert!(csv.contains("NOT_CHECKED"));
}

#[test]
fn test_curations_without_accepted_results_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("analyzer-result.yml");
    fs::write(&input, SAMPLE_ANALYZER_RESULT).unwrap();
    let output_dir = temp.path().join("out");

    cmd()
        .arg(&input)
        .arg("--curations")
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success();

    // No fetch ran, so there are no accepted results to curate
    assert!(!output_dir.join("curation-suggestions.yml").exists());
    assert!(output_dir.join("pypi-fetch-stats.txt").exists());
}

#[test]
fn test_symlinked_input_is_rejected() {
    #[cfg(unix)]
    {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real.yml");
        fs::write(&real, SAMPLE_ANALYZER_RESULT).unwrap();
        let link = temp.path().join("link.yml");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        cmd()
            .arg(&link)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("symbolic link"));
    }
}
