use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "chartview-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_lists_routes_by_default() {
    let exe = env!("CARGO_BIN_EXE_chartview-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .arg("--output")
        .arg(&output_path)
        .env("NO_COLOR", "1")
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    std::fs::remove_file(&output_path).expect("remove output");
    for path in ["/line", "/bar", "/scatter", "/pie"] {
        assert!(content.contains(path), "missing {path}");
    }
}

#[test]
fn cli_resolves_paths_as_json() {
    let exe = env!("CARGO_BIN_EXE_chartview-tester");
    let output = Command::new(exe)
        .args([
            "--mode",
            "hash",
            "--fallback",
            "not-found",
            "--resolve",
            "/pie,/unknown",
            "--report",
            "json",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(value["mode"], "hash");
    assert_eq!(value["resolutions"][0]["view"], "pie");
    assert_eq!(value["resolutions"][1]["outcome"], "not-found");
}

#[test]
fn cli_strict_fails_on_unmatched_path() {
    let exe = env!("CARGO_BIN_EXE_chartview-tester");
    let output = Command::new(exe)
        .args(["--resolve", "/unknown", "--strict"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("matched no route"));
}

#[test]
fn cli_rejects_unknown_mode() {
    let exe = env!("CARGO_BIN_EXE_chartview-tester");
    let output = Command::new(exe)
        .args(["--mode", "memory"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown addressing mode"));
}
