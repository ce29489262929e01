#![allow(clippy::unwrap_used)]
//! CLI smoke tests for argument handling and exit codes.
//!
//! Every test runs with a scrubbed environment and an empty config
//! directory so the developer's own settings never leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "TEXT",
    "TARGET_LANGUAGE",
    "LLM_SYSTEM_PROMPT",
    "BASE_URL",
    "API_KEY",
    "MODEL",
    "LLM_TEMPERATURE",
    "TRANSLATION_POLICY",
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "ALL_PROXY",
    "http_proxy",
    "https_proxy",
    "all_proxy",
];

#[allow(deprecated)]
fn polytrans(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("polytrans").unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Answers one chat-completion request with `content` and returns the raw request.
fn serve_completion(content: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let body = serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
    .to_string();

    let handle = thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = socket.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);

            let request = String::from_utf8_lossy(&buffer);
            if let Some((headers, payload)) = request.split_once("\r\n\r\n") {
                let content_length = headers
                    .to_lowercase()
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:").map(str::to_string))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if payload.len() >= content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\n\
             content-type: application/json\r\n\
             content-length: {}\r\n\
             connection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).unwrap();
        String::from_utf8(buffer).unwrap()
    });

    (format!("http://{addr}"), handle)
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--glossary"))
        .stdout(predicate::str::contains("--policy"))
        .stdout(predicate::str::contains("TARGET_LANGUAGE"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_inputs_exit_with_status_1() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::diff(
            "Error: TEXT and TARGET_LANGUAGE environment variables are required\n",
        ));
}

#[test]
fn test_missing_target_language() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .env("TEXT", "Hello")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "TEXT and TARGET_LANGUAGE environment variables are required",
        ));
}

#[test]
fn test_empty_text_counts_as_missing() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .env("TEXT", "")
        .env("TARGET_LANGUAGE", "French")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("environment variables are required"));
}

#[test]
fn test_missing_api_key_fails() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .env("TEXT", "Hello world")
        .env("TARGET_LANGUAGE", "French")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("API key"));
}

#[test]
fn test_translation_printed_to_stdout() {
    let home = TempDir::new().unwrap();
    let (base_url, server) =
        serve_completion("GLOSSARY: x\n(Markdown kept)\n  Insuficiencia cardiaca  \nmore");

    polytrans(&home)
        .env("BASE_URL", &base_url)
        .env("API_KEY", "sk-test")
        .env("TEXT", "Heart failure")
        .env("TARGET_LANGUAGE", "es")
        .env("LLM_SYSTEM_PROMPT", "Heart failure=Insuficiencia cardiaca")
        .assert()
        .code(0)
        .stdout(predicate::str::diff("Insuficiencia cardiaca\n"))
        .stderr(predicate::str::is_empty());

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /chat/completions HTTP/1.1"));

    let (_, body) = request.split_once("\r\n\r\n").unwrap();
    let body: serde_json::Value = serde_json::from_str(body).unwrap();
    assert!(
        body["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("into Spanish")
    );
    assert_eq!(
        body["messages"][1]["content"],
        "GLOSSARY (optional):\nHeart failure=Insuficiencia cardiaca\n\nTEXT:\nHeart failure"
    );
}

#[test]
fn test_invalid_temperature_fails() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .env("TEXT", "Hello")
        .env("TARGET_LANGUAGE", "es")
        .env("API_KEY", "sk-test")
        .env("LLM_TEMPERATURE", "warm")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid temperature 'warm'"));
}

#[test]
fn test_unknown_policy_fails() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .args(["--text", "Hello", "--to", "es", "--policy", "casual"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Translation policy 'casual' not found"));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("es"))
        .stdout(predicate::str::contains("Spanish"))
        .stdout(predicate::str::contains("Galician"));
}

#[test]
fn test_policies_list() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .arg("policies")
        .assert()
        .success()
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("faithful"))
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn test_policies_show() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .args(["policies", "faithful"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preserve code blocks verbatim"));
}

#[test]
fn test_policies_show_nonexistent() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .args(["policies", "nonexistent_policy_xyz"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_configure_show_reads_env_and_masks_key() {
    let home = TempDir::new().unwrap();
    polytrans(&home)
        .args(["configure", "--show"])
        .env("MODEL", "llama3")
        .env("API_KEY", "sk-secret-1234")
        .assert()
        .success()
        .stdout(predicate::str::contains("llama3"))
        .stdout(predicate::str::contains("https://api.ai.it.ufl.edu"))
        .stdout(predicate::str::contains("1234"))
        .stdout(predicate::str::contains("sk-secret").not());
}

#[test]
fn test_configure_show_uses_config_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("polytrans");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "[translator]\nmodel = \"file-model\"\npolicy = \"faithful\"\n",
    )
    .unwrap();

    polytrans(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file-model"))
        .stdout(predicate::str::contains("faithful"));
}
