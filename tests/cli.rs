use govdeck::ooxml::pptx::DeckSummary;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Run the binary inside `dir` with a clean log environment.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_govdeck"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn govdeck")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_run_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "✅ Presentation saved to: MCP-Governance-Presentation.pptx".to_string(),
            "   Slides: 11".to_string(),
        ]
    );
    assert!(output.stderr.is_empty());

    let summary = DeckSummary::open(dir.path().join("MCP-Governance-Presentation.pptx")).unwrap();
    assert_eq!(summary.slide_count(), 11);
}

#[test]
fn test_output_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("deck.yaml"),
        "output: from-config.pptx\nauthor: Platform Team\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["-c", "deck.yaml", "-o", "from-cli.pptx", "--verify", "-v"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "✅ Presentation saved to: from-cli.pptx");
    assert!(dir.path().join("from-cli.pptx").exists());
    assert!(!dir.path().join("from-config.pptx").exists());

    // Logs go to stderr only
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("presentation saved"));
    assert!(stderr.contains("verified"));
    assert!(!lines.iter().any(|l| l.contains("verified")));
}

#[test]
fn test_bad_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("deck.yaml"), "colour: purple\n").unwrap();

    let output = run_in(dir.path(), &["--config", "deck.yaml"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading configuration from deck.yaml"));
    assert!(!dir.path().join("MCP-Governance-Presentation.pptx").exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["-o", "missing/deck.pptx"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("writing missing/deck.pptx"));
}
