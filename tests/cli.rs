use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("trello-stats").unwrap();
    cmd.env_remove("TRELLO_API_KEY")
        .env_remove("TRELLO_API_TOKEN")
        .env_remove("TRELLO_ORG")
        .env_remove("TRELLO_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn with_credentials() -> Command {
    let mut cmd = cmd();
    cmd.env("TRELLO_API_KEY", "test-key")
        .env("TRELLO_API_TOKEN", "test-token")
        // Nothing listens on the discard port
        .env("TRELLO_API_URL", "http://127.0.0.1:9/1");
    cmd
}

#[test]
fn missing_credentials_exit_one() {
    cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Trello API Key and API Token are required"));
}

#[test]
fn missing_token_only() {
    cmd()
        .env("TRELLO_API_KEY", "test-key")
        .assert()
        .code(1)
        .stderr(contains("TRELLO_API_TOKEN"));
}

#[test]
fn malformed_start_date() {
    with_credentials()
        .args(["--start-date", "2024/03/01"])
        .assert()
        .failure()
        .stderr(contains("Not a valid date: '2024/03/01'."));
}

#[test]
fn future_start_date() {
    with_credentials()
        .args(["-s", "2999-01-01"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("after today"));
}

#[test]
fn unreachable_api_fails() {
    with_credentials()
        .args(["-s", "2020-01-01"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_hides_credentials() {
    with_credentials()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--start-date"))
        .stdout(contains("test-token").not());
}

/// Serve one canned HTTP response and return the API root pointing at it
fn stub_api(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/1", listener.local_addr().unwrap());

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
    });

    base
}

#[test]
fn rejected_credentials_fail_without_report() {
    let base = stub_api("401 Unauthorized", "invalid key");

    with_credentials()
        .env("TRELLO_API_URL", &base)
        .args(["-s", "2020-01-01"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("HTTP 401 from /organizations/redhatcop: invalid key"));
}
