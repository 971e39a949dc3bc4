// Shared test helpers for html-main-text.
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use html_main_text::Options;

/// A fixture: input HTML plus what the extracted text must and must not hold.
pub struct Fixture {
    pub html: String,
    pub options: Options,
    pub contains: Vec<String>,
    pub excludes: Vec<String>,
}

/// Load a test fixture's input HTML and expectations.
///
/// Fixture directories contain `index.html` and `index.json`.
pub fn load_fixture(name: &str) -> Fixture {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures").join(name);
    let html = fs::read_to_string(base.join("index.html"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.html", name));
    let json_str = fs::read_to_string(base.join("index.json"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.json", name));
    let val: serde_json::Value = serde_json::from_str(&json_str)
        .unwrap_or_else(|e| panic!("Bad fixture json {}: {e}", name));

    let strings = |key: &str| -> Vec<String> {
        val.get(key)
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    };

    let mut options = Options::default();
    if let Some(b) = val.get("tables").and_then(|v| v.as_bool()) {
        options.include_tables = b;
    }
    if let Some(b) = val.get("comments").and_then(|v| v.as_bool()) {
        options.include_comments = b;
    }

    Fixture {
        html,
        options,
        contains: strings("contains"),
        excludes: strings("excludes"),
    }
}

/// Output of one run of the `extract` binary.
pub struct Run {
    pub stdout: String,
    pub json: serde_json::Value,
    pub status: i32,
}

/// Run the `extract` binary with `input` on stdin.
pub fn run_binary(input: &[u8]) -> Run {
    let mut child = Command::new(env!("CARGO_BIN_EXE_extract"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn extract");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input)
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait extract");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let json = serde_json::from_str(stdout.trim_end())
        .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {stdout:?}"));
    Run {
        stdout,
        json,
        status: output.status.code().expect("exit code"),
    }
}
