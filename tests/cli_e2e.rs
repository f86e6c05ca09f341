//! End-to-end CLI tests for the httpget binary.

use std::io::{Read, Write};
use std::net::TcpListener;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Test that a missing URL prints usage to stderr and exits with code 1.
#[test]
fn test_missing_url_prints_usage() {
    let mut cmd = Command::cargo_bin("httpget").unwrap();
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_help_displays_usage() {
    let mut cmd = Command::cargo_bin("httpget").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetch a single HTTP URL"));
}

/// Test that --version displays the version and exits with code 0.
#[test]
fn test_version_displays_version() {
    let mut cmd = Command::cargo_bin("httpget").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("httpget"));
}

/// Test that an unsupported scheme fails the parse and exits with code 1.
#[test]
fn test_unknown_scheme_exits_one() {
    let mut cmd = Command::cargo_bin("httpget").unwrap();
    cmd.arg("ftp://files.example.com/a")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown scheme"));
}

/// Test that an unreachable server is fatal with exit code 1.
#[test]
fn test_connect_refused_exits_one() {
    // Bind then drop to find a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut cmd = Command::cargo_bin("httpget").unwrap();
    cmd.arg(format!("http://127.0.0.1:{port}/x"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("connect"));
}

/// Test the full loop against a one-shot local server: fetch, save, exit 0.
#[test]
fn test_fetch_saves_file_and_exits_zero() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = std::thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();
        let mut buf = [0u8; 2048];
        let mut request = Vec::new();
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nok")
            .unwrap();
        request
    });

    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("httpget").unwrap();
    cmd.arg("-O")
        .arg(dir.path())
        .arg(format!("http://127.0.0.1:{port}/note.txt"))
        .assert()
        .success();

    let request = server.join().unwrap();
    let request_text = String::from_utf8_lossy(&request);
    assert!(
        request_text.starts_with("GET /note.txt HTTP/1.1\r\n"),
        "got: {request_text}"
    );

    let saved = std::fs::read(dir.path().join("note.txt")).unwrap();
    assert_eq!(saved, b"ok");
}

/// Test that a protocol dead end (404) still exits 0.
#[test]
fn test_unsupported_status_exits_zero() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = std::thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();
        let mut buf = [0u8; 2048];
        let mut request = Vec::new();
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n")
            .unwrap();
    });

    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("httpget").unwrap();
    cmd.arg("-O")
        .arg(dir.path())
        .arg(format!("http://127.0.0.1:{port}/gone"))
        .assert()
        .success();

    server.join().unwrap();
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty(), "no file for a 404: {entries:?}");
}
