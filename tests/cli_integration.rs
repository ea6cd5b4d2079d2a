//! Integration tests for the `dl` CLI.
//!
//! Each test starts a stub HTTP server on a loopback port, runs `dl` as a
//! subprocess pointed at it with `--url`, and verifies stdout/stderr.

use pretty_assertions::assert_eq;

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::Command;
use std::thread;

/// Get the path to the built `dl` binary.
fn dl_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("dl");
    path
}

/// Start a stub server. The handler maps (method, path, body) to
/// (status, json body) for every request; the thread runs until the test
/// process exits.
fn stub_server<F>(handler: F) -> String
where
    F: Fn(&str, &str, &str) -> (u16, String) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };

            // Read headers
            let mut buf = Vec::new();
            let mut byte = [0u8; 1];
            while !buf.ends_with(b"\r\n\r\n") {
                match stream.read(&mut byte) {
                    Ok(1) => buf.push(byte[0]),
                    _ => break,
                }
            }
            let head = String::from_utf8_lossy(&buf).to_string();
            let mut lines = head.lines();
            let request_line = lines.next().unwrap_or_default().to_string();
            let mut parts = request_line.split_whitespace();
            let method = parts.next().unwrap_or_default().to_string();
            let path = parts.next().unwrap_or_default().to_string();

            // Read body if Content-Length is present
            let content_length = lines
                .filter_map(|l| l.split_once(':'))
                .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            let mut body = vec![0u8; content_length];
            if content_length > 0 {
                let _ = stream.read_exact(&mut body);
            }
            let body = String::from_utf8_lossy(&body).to_string();

            let (status, response_body) = handler(&method, &path, &body);
            let reason = match status {
                200 => "OK",
                201 => "Created",
                204 => "No Content",
                404 => "Not Found",
                _ => "Internal Server Error",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
                response_body.len(),
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/api/todos")
}

/// Run `dl --url <url> <args>`, returning (stdout, stderr, success).
fn run_dl(url: &str, args: &[&str]) -> (String, String, bool) {
    let tmp = tempfile::TempDir::new().unwrap();
    let output = Command::new(dl_bin())
        .arg("--url")
        .arg(url)
        .args(args)
        .current_dir(tmp.path()) // no duelist.toml in scope
        .env_remove("DUELIST_CONFIG")
        .env_remove("DUELIST_URL")
        .output()
        .expect("failed to run dl");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn run_dl_ok(url: &str, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_dl(url, args);
    if !success {
        panic!(
            "dl {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

const LIST_JSON: &str = r#"[
  {"id": 1, "title": "Pay rent", "completed": false, "dueDate": "2025-08-28",
   "priority": "high", "overdue": true, "dueToday": false, "completedThisMonth": false},
  {"id": 2, "title": "Water plants", "completed": false, "dueDate": "2025-08-31",
   "priority": "normal", "overdue": false, "dueToday": true, "completedThisMonth": false},
  {"id": 3, "title": "File taxes", "completed": true, "completedDate": "2025-08-14T09:30:00",
   "overdue": false, "dueToday": false, "completedThisMonth": true}
]"#;

// ---------------------------------------------------------------------------
// Read command tests
// ---------------------------------------------------------------------------

#[test]
fn test_list_json() {
    let url = stub_server(|method, path, _| {
        assert_eq!((method, path), ("GET", "/api/todos"));
        (200, LIST_JSON.to_string())
    });

    let out = run_dl_ok(&url, &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["open_count"], 2);
    assert_eq!(parsed["overdue"][0]["id"], 1);
    assert_eq!(parsed["today"][0]["title"], "Water plants");
    assert_eq!(parsed["done_this_month"][0]["completed"], true);
}

#[test]
fn test_list_human_sections() {
    let url = stub_server(|_, _, _| (200, LIST_JSON.to_string()));

    let out = run_dl_ok(&url, &["list"]);
    assert!(out.contains("Overdue"));
    assert!(out.contains("Pay rent"));
    assert!(out.contains("Water plants"));
    assert!(out.contains("Completed in"));
    assert!(out.contains("(2 tasks)"));
}

#[test]
fn test_stats_counts() {
    let url = stub_server(|_, _, _| (200, LIST_JSON.to_string()));

    let out = run_dl_ok(&url, &["stats", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["total"], 3);
    assert_eq!(parsed["completed"], 1);
    assert_eq!(parsed["pending"], 2);
    assert_eq!(parsed["overdue"], 1);
    assert_eq!(parsed["due_today"], 1);

    let text = run_dl_ok(&url, &["stats"]);
    assert!(text.contains("pending    2"));
}

#[test]
fn test_show_not_found() {
    let url = stub_server(|_, _, _| (404, String::new()));

    let (_, stderr, success) = run_dl(&url, &["show", "99"]);
    assert!(!success);
    assert!(stderr.contains("task not found: 99"));
}

// ---------------------------------------------------------------------------
// Write command tests
// ---------------------------------------------------------------------------

#[test]
fn test_add_sends_create_and_prints_id() {
    let url = stub_server(|method, path, body| {
        assert_eq!((method, path), ("POST", "/api/todos"));
        let sent: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(sent["title"], "Buy milk");
        assert_eq!(sent["priority"], "high");
        (
            201,
            r#"{"id": 42, "title": "Buy milk", "completed": false, "priority": "high"}"#
                .to_string(),
        )
    });

    let out = run_dl_ok(&url, &["add", "Buy milk", "--priority", "high"]);
    assert!(out.contains("Added task 42"));
}

#[test]
fn test_add_rejects_past_due_date() {
    let url = stub_server(|_, _, _| panic!("no request should be sent"));

    let (_, stderr, success) = run_dl(&url, &["add", "Too late", "--due", "2020-01-01"]);
    assert!(!success);
    assert!(stderr.contains("due date is in the past"));
}

#[test]
fn test_toggle_completes_open_task() {
    let url = stub_server(|method, path, _| match (method, path) {
        ("GET", "/api/todos/7") => (
            200,
            r#"{"id": 7, "title": "Call bank", "completed": false}"#.to_string(),
        ),
        ("PATCH", "/api/todos/7") => (
            200,
            r#"{"id": 7, "title": "Call bank", "completed": true}"#.to_string(),
        ),
        other => panic!("unexpected request: {other:?}"),
    });

    let out = run_dl_ok(&url, &["toggle", "7"]);
    assert!(out.contains("Completed task 7"));
}

#[test]
fn test_toggle_refuses_completed_task() {
    let url = stub_server(|method, path, _| {
        assert_eq!((method, path), ("GET", "/api/todos/7"));
        (
            200,
            r#"{"id": 7, "title": "Call bank", "completed": true}"#.to_string(),
        )
    });

    let (_, stderr, success) = run_dl(&url, &["toggle", "7"]);
    assert!(!success);
    assert!(stderr.contains("already completed"));
}

#[test]
fn test_rm_deletes() {
    let url = stub_server(|method, path, _| {
        assert_eq!((method, path), ("DELETE", "/api/todos/9"));
        (204, String::new())
    });

    let out = run_dl_ok(&url, &["rm", "9"]);
    assert!(out.contains("Deleted task 9"));
}

// ---------------------------------------------------------------------------
// Error surface tests
// ---------------------------------------------------------------------------

#[test]
fn test_server_error_reaches_stderr() {
    let url = stub_server(|_, _, _| (500, "boom".to_string()));

    let (_, stderr, success) = run_dl(&url, &["list"]);
    assert!(!success);
    assert!(stderr.contains("server returned 500"));
}
