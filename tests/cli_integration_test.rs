//! End-to-end runs of the `jobmap` binary.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const INVENTORY: &str = indoc! {"
    index,file,component_type,unique_name
    1,job1.kjb,tMap,tMap_1
    2,job1.kjb,tSnowflakeOutput,tSnowflakeOutput_1
    3,job2.kjb,tRunJob,tRunJob_1
    4,job2.kjb,tMap,tMap_2
    5,job3.kjb,tSnowflakeInput,tSnowflakeInput_1
"};

fn jobmap(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jobmap").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("JOBMAP_DEVELOPERS")
        .env_remove("RUST_LOG");
    cmd
}

fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("components.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_sample_output_is_analyzable() {
    let temp = TempDir::new().unwrap();
    let sample = temp.path().join("sample.csv");

    jobmap(&temp)
        .args(["sample", "--output"])
        .arg(&sample)
        .assert()
        .success();

    let output = jobmap(&temp)
        .args(["analyze", "--format", "csv"])
        .arg(&sample)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn test_analyze_csv_to_stdout() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, INVENTORY);

    let output = jobmap(&temp)
        .args(["analyze", "--format", "csv"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "file,component_count,size_category,complexity,database_usage,complexity_score,estimated_hours",
            "job2.kjb,2,Small,High,Snowflake Only,5,12.0",
            "job1.kjb,2,Small,Low,Snowflake Only,1,6.4",
            "job3.kjb,1,Small,Low,Snowflake Only,1,6.4",
        ]
    );
}

#[test]
fn test_analyze_csv_into_directory_uses_default_name() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, INVENTORY);
    let out_dir = temp.path().join("reports");
    fs::create_dir(&out_dir).unwrap();

    jobmap(&temp)
        .args(["analyze", "--format", "csv", "--output"])
        .arg(&out_dir)
        .arg(&input)
        .assert()
        .success();

    let written = fs::read_to_string(out_dir.join("talend_migration_analysis.csv")).unwrap();
    assert!(written.contains("job2.kjb,2,Small,High,Snowflake Only,5,12.0"));
}

#[test]
fn test_analyze_json_totals() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, INVENTORY);

    let output = jobmap(&temp)
        .args(["analyze", "--format", "json", "--group-by", "size,complexity"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let total_hours = json["totals"]["total_hours"].as_f64().unwrap();
    assert!((total_hours - 24.8).abs() < 1e-9);
    assert_eq!(json["totals"]["total_files"], 3);
    assert_eq!(json["rows"].as_array().unwrap().len(), 3);
    assert_eq!(json["groups"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_override_beats_config_file() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, INVENTORY);
    fs::write(
        temp.path().join(".jobmap.toml"),
        indoc! {"
            [effort]
            small_hours = 100.0
        "},
    )
    .unwrap();

    let output = jobmap(&temp)
        .args(["analyze", "--format", "json", "--small-hours", "10"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let total_hours = json["totals"]["total_hours"].as_f64().unwrap();
    assert!((total_hours - 31.0).abs() < 1e-9);
}

#[test]
fn test_missing_column_reports_schema_error() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, "file,unique_name\njob1.kjb,tMap_1\n");

    let output = jobmap(&temp)
        .args(["analyze", "--format", "csv"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SchemaError"), "stderr: {stderr}");
    assert!(stderr.contains("component_type"), "stderr: {stderr}");
}

#[test]
fn test_zero_developers_reports_parameter_error() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, INVENTORY);

    let output = jobmap(&temp)
        .args(["analyze", "--format", "csv", "--developers", "0"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ParameterError"), "stderr: {stderr}");
    assert!(stderr.contains("developers"), "stderr: {stderr}");
}

#[test]
fn test_init_writes_config_once() {
    let temp = TempDir::new().unwrap();

    jobmap(&temp).arg("init").assert().success();
    assert!(temp.path().join(".jobmap.toml").exists());

    jobmap(&temp).arg("init").assert().failure();
    jobmap(&temp).args(["init", "--force"]).assert().success();
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_report_write_is_an_error() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, INVENTORY);

    for format in ["csv", "json", "markdown", "terminal"] {
        jobmap(&temp)
            .args(["analyze", "--format", format, "--output", "/dev/full"])
            .arg(&input)
            .assert()
            .failure();
    }
}
