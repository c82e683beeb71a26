//! Binary-level tests for environment overrides. Each test runs
//! `prompt-booster config --json` in a clean child process and reads the
//! effective configuration back from stdout.

use std::process::{Command, Output};

use tempfile::TempDir;

const ENV_VARS: [&str; 4] = [
    "PROMPT_BOOSTER_CONFIG",
    "PROMPT_BOOSTER_HOST",
    "PROMPT_BOOSTER_PORT",
    "PROMPT_BOOSTER_CORS_ORIGINS",
];

fn config_command(workdir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_prompt-booster"));
    cmd.current_dir(workdir.path())
        .args(["--quiet", "config", "--json"])
        .env_remove("RUST_LOG");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn effective_config(output: Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "prompt-booster failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn no_env_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = effective_config(config_command(&tmp).output().unwrap());

    assert_eq!(config["server"]["host"], "127.0.0.1");
    assert_eq!(config["server"]["port"], 8000);
    assert_eq!(
        config["cors"]["allowed_origins"],
        serde_json::json!(["http://localhost:5173"])
    );
}

#[test]
fn env_overrides_port_host_and_origins() {
    let tmp = TempDir::new().unwrap();
    let output = config_command(&tmp)
        .env("PROMPT_BOOSTER_HOST", "0.0.0.0")
        .env("PROMPT_BOOSTER_PORT", "9100")
        .env(
            "PROMPT_BOOSTER_CORS_ORIGINS",
            "https://a.example.com, https://b.example.com",
        )
        .output()
        .unwrap();
    let config = effective_config(output);

    assert_eq!(config["server"]["host"], "0.0.0.0");
    assert_eq!(config["server"]["port"], 9100);
    assert_eq!(
        config["cors"]["allowed_origins"],
        serde_json::json!(["https://a.example.com", "https://b.example.com"])
    );
}

#[test]
fn env_config_path_is_read() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("custom.toml");
    std::fs::write(&path, "[server]\nport = 7000\n").unwrap();

    let output = config_command(&tmp)
        .env("PROMPT_BOOSTER_CONFIG", &path)
        .output()
        .unwrap();
    assert_eq!(effective_config(output)["server"]["port"], 7000);
}

#[test]
fn invalid_env_origin_fails_startup() {
    let tmp = TempDir::new().unwrap();
    let output = config_command(&tmp)
        .env("PROMPT_BOOSTER_CORS_ORIGINS", "*")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid CORS origin"), "stderr was: {stderr}");
}
