use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SIDE: &str = "\
namespace: trading
enum_name: Side
underlying_type: int8_t
enum_entries:
  - BUY, 1
  - SELL, 2
";

/// Helper to get the enumgen binary command
fn enumgen_cmd() -> Command {
    Command::cargo_bin("enumgen").unwrap()
}

fn write_schema(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

mod success {
    use super::*;

    #[test]
    fn writes_header_and_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(dir.path(), "side.yaml", SIDE);
        let output = dir.path().join("include/trading/side.h");

        enumgen_cmd()
            .arg("--input")
            .arg(&input)
            .arg("--output")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let header = fs::read_to_string(&output).unwrap();
        assert!(header.contains("BUY = 1"));
        assert!(header.contains("SELL = 2"));
        assert!(header.contains("if (sv == \"BUY\") { return BUY; }"));
        assert!(header.contains("return { BUY, SELL };"));
    }

    #[test]
    fn short_flags_work() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(dir.path(), "side.yaml", SIDE);
        let output = dir.path().join("side.h");

        enumgen_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .assert()
            .success();

        assert!(output.exists());
    }

    #[test]
    fn rerun_produces_identical_output() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(dir.path(), "side.yaml", SIDE);
        let output = dir.path().join("side.h");

        enumgen_cmd().arg("-i").arg(&input).arg("-o").arg(&output).assert().success();
        let first = fs::read(&output).unwrap();
        enumgen_cmd().arg("-i").arg(&input).arg("-o").arg(&output).assert().success();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn dry_run_prints_header_without_writing() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(dir.path(), "side.yaml", SIDE);
        let output = dir.path().join("side.h");

        enumgen_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .arg("--dry-run")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("// This file is automatically generated"))
            .stdout(predicate::str::contains("class Side {"));

        assert!(!output.exists());
    }
}

mod failure {
    use super::*;

    #[test]
    fn missing_input_reports_path() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("side.h");

        enumgen_cmd()
            .arg("-i")
            .arg(dir.path().join("nope.yaml"))
            .arg("-o")
            .arg(&output)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to generate enum for"))
            .stderr(predicate::str::contains("nope.yaml"))
            .stderr(predicate::str::contains("Cannot find input file"));

        assert!(!output.exists());
    }

    #[test]
    fn duplicate_name_fails_and_keeps_existing_output() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(
            dir.path(),
            "dup.yaml",
            "namespace: mist\nenum_name: OptionType\nunderlying_type: uint8_t\nenum_entries:\n  - CALL\n  - CALL\n",
        );
        let output = dir.path().join("option_type.h");
        fs::write(&output, "stale").unwrap();

        enumgen_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .assert()
            .failure()
            .stderr(predicate::str::contains("duplicate item 'CALL'"));

        assert_eq!(fs::read_to_string(&output).unwrap(), "stale");
    }

    #[test]
    fn mixed_case_namespace_fails() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(
            dir.path(),
            "ns.yaml",
            "namespace: MyNamespace\nenum_name: OptionType\nunderlying_type: uint8_t\nenum_entries:\n  - CALL\n",
        );

        enumgen_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(dir.path().join("ns.h"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("namespace must be all lower case"));
    }

    #[test]
    fn malformed_yaml_names_the_input_file() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(dir.path(), "broken.yaml", "namespace: [trading\n");

        enumgen_cmd()
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(dir.path().join("broken.h"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to generate enum for"))
            .stderr(predicate::str::contains("broken.yaml"))
            .stderr(predicate::str::contains("Failed to parse enum schema"));
    }

    #[test]
    fn output_is_required() {
        enumgen_cmd()
            .args(["--input", "side.yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--output"));
    }
}
