//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SANS_TAXONOMY: &str = "../../taxonomies/sans-incident-response.toml";

fn irquiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("irquiz").unwrap()
}

/// A command isolated from any user or project config.
fn isolated(dir: &Path) -> Command {
    let mut cmd = irquiz();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("IRQUIZ_TAXONOMY")
        .env_remove("IRQUIZ_OUTPUT_DIR");
    cmd
}

fn write_single_phase_taxonomy(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("containment.toml");
    std::fs::write(
        &path,
        r#"
[[phases]]
name = "Containment"
description = "Limit the damage."
activities = ["Isolating a laptop.", "Blocking an IP."]
"#,
    )
    .unwrap();
    path
}

#[test]
fn validate_reference_taxonomy() {
    irquiz()
        .arg("validate")
        .arg("--taxonomy")
        .arg(SANS_TAXONOMY)
        .assert()
        .success()
        .stdout(predicate::str::contains("6 phases, 30 activities"))
        .stdout(predicate::str::contains("Taxonomy valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = write_single_phase_taxonomy(dir.path());

    irquiz()
        .arg("validate")
        .arg("--taxonomy")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("phase Preparation is missing"))
        .stdout(predicate::str::contains("5 warning(s) found."));
}

#[test]
fn validate_nonexistent_file() {
    irquiz()
        .arg("validate")
        .arg("--taxonomy")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_rejects_unknown_phase() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        "[[phases]]\nname = \"Triage\"\nactivities = [\"Sorting alerts.\"]\n",
    )
    .unwrap();

    irquiz()
        .arg("validate")
        .arg("--taxonomy")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown phase: Triage"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    isolated(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created irquiz.toml"))
        .stdout(predicate::str::contains(
            "Created taxonomies/sans-incident-response.toml",
        ));

    assert!(dir.path().join("irquiz.toml").exists());

    // The written taxonomy must load back cleanly.
    irquiz()
        .arg("validate")
        .arg("--taxonomy")
        .arg(dir.path().join("taxonomies/sans-incident-response.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Taxonomy valid."));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    isolated(dir.path()).arg("init").assert().success();

    // Second init should skip
    isolated(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn learn_prints_every_phase() {
    let dir = TempDir::new().unwrap();

    isolated(dir.path())
        .arg("learn")
        .assert()
        .success()
        .stdout(predicate::str::contains("Preparation\n==========="))
        .stdout(predicate::str::contains("Lessons Learned\n==============="));
}

#[test]
fn learn_single_phase() {
    let dir = TempDir::new().unwrap();

    isolated(dir.path())
        .arg("learn")
        .arg("--phase")
        .arg("lessons-learned")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lessons Learned"))
        .stdout(predicate::str::contains(
            "  - Analyzing the root cause of the incident to prevent recurrence.",
        ))
        .stdout(predicate::str::contains("Containment").not());
}

#[test]
fn learn_unknown_phase_fails() {
    let dir = TempDir::new().unwrap();

    isolated(dir.path())
        .arg("learn")
        .arg("--phase")
        .arg("triage")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown phase"));
}

#[test]
fn quiz_unanswered_reference_and_save() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results.txt");

    isolated(dir.path())
        .arg("quiz")
        .arg("--seed")
        .arg("7")
        .write_stdin(format!("e\ny\ns\n{}\nx\n", out.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Score: 0 out of 30 (0.00%)"))
        .stdout(predicate::str::contains("Results saved to"))
        .stdout(predicate::str::ends_with("Goodbye.\n"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Incident Response Quiz Results\nGenerated on: "));
    assert_eq!(content.matches("Your Answer: Not Answered").count(), 30);
}

#[test]
fn quiz_all_correct_on_custom_taxonomy() {
    let dir = TempDir::new().unwrap();
    let taxonomy = write_single_phase_taxonomy(dir.path());

    isolated(dir.path())
        .arg("quiz")
        .arg("--taxonomy")
        .arg(&taxonomy)
        .write_stdin("1\nn\n1\ne\ny\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Score: 2 out of 2 (100.00%)"))
        .stdout(predicate::str::contains("Excellent work! All answers were correct."));
}

#[test]
fn quiz_exports_json_by_extension() {
    let dir = TempDir::new().unwrap();
    let taxonomy = write_single_phase_taxonomy(dir.path());
    let out = dir.path().join("exports/results.json");

    isolated(dir.path())
        .arg("quiz")
        .arg("--taxonomy")
        .arg(&taxonomy)
        .write_stdin(format!("1\ne\ny\ns\n{}\nx\n", out.display()))
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.trim_start().starts_with('{'));
    assert!(content.contains("\"summary\": \"Your Score: 1 out of 2 (50.00%)\""));
    assert!(content.contains("\"weak_phases\""));
}

#[test]
fn config_file_supplies_taxonomy() {
    let dir = TempDir::new().unwrap();
    write_single_phase_taxonomy(dir.path());
    std::fs::write(
        dir.path().join("irquiz.toml"),
        "taxonomy = \"containment.toml\"\nseed = 3\n",
    )
    .unwrap();

    isolated(dir.path())
        .arg("quiz")
        .write_stdin("e\ny\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Score: 0 out of 2 (0.00%)"))
        .stdout(predicate::str::contains("Study Recommendation(s): Containment"));
}

#[test]
fn start_opens_home_menu() {
    let dir = TempDir::new().unwrap();

    isolated(dir.path())
        .arg("start")
        .write_stdin("l\n6\nh\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incident Response Learning Tool"))
        .stdout(predicate::str::contains("  6. Lessons Learned"))
        .stdout(predicate::str::contains(
            "Conducting a post-incident review meeting with all involved parties.",
        ));
}

#[test]
fn config_paths_are_relative_to_config_file() {
    let dir = TempDir::new().unwrap();
    let cfg = dir.path().join("cfg");
    std::fs::create_dir_all(&cfg).unwrap();
    write_single_phase_taxonomy(&cfg);
    std::fs::write(
        cfg.join("irquiz.toml"),
        "taxonomy = \"containment.toml\"\noutput_dir = \"results\"\n",
    )
    .unwrap();

    isolated(dir.path())
        .arg("quiz")
        .arg("--config")
        .arg(cfg.join("irquiz.toml"))
        .write_stdin("e\ny\ns\n\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Score: 0 out of 2 (0.00%)"));

    assert!(cfg.join("results/ir_quiz_results.txt").exists());
}

#[test]
fn env_overrides_taxonomy_and_output_dir() {
    let dir = TempDir::new().unwrap();
    let taxonomy = write_single_phase_taxonomy(dir.path());
    let exports = dir.path().join("exports");

    isolated(dir.path())
        .env("IRQUIZ_TAXONOMY", &taxonomy)
        .env("IRQUIZ_OUTPUT_DIR", &exports)
        .arg("quiz")
        .write_stdin("1\ne\ny\ns\n\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Score: 1 out of 2 (50.00%)"));

    let content = std::fs::read_to_string(exports.join("ir_quiz_results.txt")).unwrap();
    assert!(content.contains("Your Score: 1 out of 2 (50.00%)"));
}

#[test]
fn blank_env_override_is_ignored() {
    let dir = TempDir::new().unwrap();
    write_single_phase_taxonomy(dir.path());
    std::fs::write(dir.path().join("irquiz.toml"), "taxonomy = \"containment.toml\"\n").unwrap();

    isolated(dir.path())
        .env("IRQUIZ_TAXONOMY", "   ")
        .arg("quiz")
        .write_stdin("e\ny\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Score: 0 out of 2 (0.00%)"));
}

#[test]
fn rust_log_enables_debug_output() {
    let dir = TempDir::new().unwrap();

    isolated(dir.path())
        .env("RUST_LOG", "irquiz=debug")
        .arg("quiz")
        .write_stdin("e\ny\nx\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("generated question set"));
}

#[test]
fn default_log_level_hides_debug_output() {
    let dir = TempDir::new().unwrap();

    isolated(dir.path())
        .env_remove("RUST_LOG")
        .arg("quiz")
        .write_stdin("e\ny\nx\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("generated question set").not());
}

#[test]
fn help_output() {
    irquiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incident-response phase trainer"));
}

#[test]
fn version_output() {
    irquiz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("irquiz"));
}
