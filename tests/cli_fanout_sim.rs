use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "treesim-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn run_fanout_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fanout_sim"))
        .args(args)
        .output()
        .expect("run fanout_sim")
}

#[test]
fn fanout_sim_writes_summary_json() {
    let dir = unique_temp_dir("summary");
    let out_json = dir.join("summary.json");

    let output = run_fanout_sim(&[
        "--fanout",
        "2,2",
        "--requests",
        "50",
        "--horizon",
        "500",
        "--seed",
        "1",
        "--json",
        out_json.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "fanout_sim failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let raw = fs::read_to_string(&out_json).expect("read summary.json");
    let v: Value = serde_json::from_str(&raw).expect("parse summary.json");
    assert_eq!(v["horizon"], 500);
    assert_eq!(v["total_requests"], 50);
    let incomplete = v["incomplete"].as_u64().expect("incomplete is a number");
    assert!(incomplete <= 50);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn fanout_sim_is_reproducible_for_a_fixed_seed() {
    let dir = unique_temp_dir("repro");
    let first = dir.join("first.json");
    let second = dir.join("second.json");

    for path in [&first, &second] {
        let output = run_fanout_sim(&[
            "--fanout",
            "2,3",
            "--requests",
            "100",
            "--horizon",
            "1000",
            "--seed",
            "99",
            "--json",
            path.to_str().unwrap(),
        ]);
        assert!(output.status.success());
    }

    let a = fs::read_to_string(&first).expect("read first.json");
    let b = fs::read_to_string(&second).expect("read second.json");
    assert_eq!(a, b, "same seed must reproduce the same summary");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn fanout_sim_reads_config_file_and_applies_overrides() {
    let dir = unique_temp_dir("config");
    let config = dir.join("config.json");
    fs::write(
        &config,
        r#"{ "horizon": 400, "fanout": [2], "requests": 10, "seed": 5 }"#,
    )
    .expect("write config");
    let out_json = dir.join("summary.json");

    let output = run_fanout_sim(&[
        "--config",
        config.to_str().unwrap(),
        "--requests",
        "25",
        "--json",
        out_json.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let raw = fs::read_to_string(&out_json).expect("read summary.json");
    let v: Value = serde_json::from_str(&raw).expect("parse summary.json");
    assert_eq!(v["horizon"], 400);
    assert_eq!(v["total_requests"], 25, "flag must override the config file");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn fanout_sim_reports_no_data_for_zero_horizon() {
    let output = run_fanout_sim(&["--horizon", "0", "--requests", "3"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("average latency: no data"), "stdout: {stdout}");
    assert!(stdout.contains("num incomplete requests: 3"), "stdout: {stdout}");
}

#[test]
fn fanout_sim_rejects_zero_fanout_level() {
    let output = run_fanout_sim(&["--fanout", "2,0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid config"), "stderr: {stderr}");
}
