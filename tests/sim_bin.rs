use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "1", "25"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 1);
    assert!(v["state"]["round"].as_u64().unwrap() >= 1);
    assert!(v["state"]["hearts"].as_u64().unwrap() <= 5);
    assert!(v["state"]["phase"].is_string());
}

#[test]
fn sim_binary_perfect_player_reaches_round_limit() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "3", "10", "1.0"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["wrong"], 0);
    // only timeouts can cost hearts
    let hearts = v["state"]["hearts"].as_u64().unwrap();
    let timeouts = v["timeouts"].as_u64().unwrap();
    assert_eq!(hearts + timeouts.min(5), 5);
}

#[test]
fn sim_binary_rejects_bad_accuracy() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "1", "5", "2.0"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
