use cfl_edges::plan_execution::{execute_default, execute_plan, RunOverrides};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_plan_paths_resolve_against_plan_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("dumps")).unwrap();
    fs::write(dir.path().join("dumps/kernel.vfg"), "1\t2\tcall_i\t5\n2\t3\tA").unwrap();
    let plan_file = dir.path().join("convert.yaml");
    fs::write(
        &plan_file,
        "meta:\n  name: kernel\nconvert:\n  input: dumps/kernel.vfg\n  output: out/edges.csv\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("out")).unwrap();

    let summary = execute_plan(&plan_file, &RunOverrides::default()).unwrap();

    assert_eq!(summary.input_lines, 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("out/edges.csv")).unwrap(),
        "n1,n2,label\n1,2,call_5\n2,3,A\n"
    );
    assert!(!dir.path().join("out/edges.cypher").exists());
}

#[test]
fn test_plan_with_load_script() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.vfg"), "1 2 A").unwrap();
    let plan_file = dir.path().join("plan.yaml");
    fs::write(
        &plan_file,
        "convert:\n  input: in.vfg\n  output: cfl_edges.txt\nload_script:\n  output: load/cfl_edges.cypher\n",
    )
    .unwrap();

    execute_plan(&plan_file, &RunOverrides::default()).unwrap();

    let script = fs::read_to_string(dir.path().join("load/cfl_edges.cypher")).unwrap();
    assert!(script.contains("LOAD CSV WITH HEADERS FROM 'file:///cfl_edges.txt' AS row"));
    assert!(script.contains("MERGE (source)-[:EDGE_LABEL {label: row.label}]->(target);"));
}

#[test]
fn test_overrides_beat_plan() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("other.vfg"), "7 8 B").unwrap();
    let plan_file = dir.path().join("plan.yaml");
    fs::write(&plan_file, "convert:\n  input: missing.vfg\n  output: plan.csv\n").unwrap();

    let overrides = RunOverrides {
        input: Some(dir.path().join("other.vfg")),
        output: Some(dir.path().join("override.csv")),
        load_script: None,
    };
    execute_plan(&plan_file, &overrides).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("override.csv")).unwrap(),
        "n1,n2,label\n7,8,B\n"
    );
    assert!(!dir.path().join("plan.csv").exists());
}

#[test]
fn test_malformed_record_fails_plan_and_skips_load_script() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.vfg"), "1 ret_i").unwrap();
    let plan_file = dir.path().join("plan.yaml");
    fs::write(
        &plan_file,
        "convert:\n  input: in.vfg\n  output: out.csv\nload_script:\n  output: out.cypher\n",
    )
    .unwrap();

    let err = execute_plan(&plan_file, &RunOverrides::default()).unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("(malformed input)"));
    assert!(message.contains("Malformed record on line 1"));
    assert!(!dir.path().join("out.cypher").exists());
}

#[test]
fn test_invalid_plan_is_reported() {
    let dir = TempDir::new().unwrap();
    let plan_file = dir.path().join("plan.yaml");
    fs::write(&plan_file, "convert: [not, a, mapping]\n").unwrap();

    let err = execute_plan(&plan_file, &RunOverrides::default()).unwrap_err();
    assert!(err.to_string().starts_with("Invalid plan"));
}

#[test]
fn test_default_run_converts_shipped_sample() {
    // integration tests run from the package root, where the default input lives
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cfl_edges.txt");
    let overrides = RunOverrides {
        output: Some(output.clone()),
        ..RunOverrides::default()
    };

    let summary = execute_default(&overrides).unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows[0], "n1,n2,label");
    assert!(rows.contains(&"3,4,call_1"));
    assert!(rows.contains(&"5,6,ret_1"));
    assert!(rows.contains(&"1,2,A"));
    assert_eq!(summary.indexed_rows, 2);
    assert_eq!(summary.output_lines(), csv.matches('\n').count());
}

#[test]
fn test_default_run_with_missing_input_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let overrides = RunOverrides {
        input: Some(dir.path().join("absent.vfg")),
        output: Some(dir.path().join("out.csv")),
        load_script: None,
    };

    let err = execute_default(&overrides).unwrap_err();
    assert!(err.to_string().ends_with("failed (I/O error)"));
}
