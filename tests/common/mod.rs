//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dictfill"))
}

/// Mock lookup service; the runtime must outlive the server
pub struct LookupServer {
    pub rt: Runtime,
    pub server: MockServer,
}

impl LookupServer {
    pub fn start() -> Self {
        let rt = Runtime::new().expect("Failed to start runtime");
        let server = rt.block_on(MockServer::start());
        Self { rt, server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Serve a one-meaning definition for `word`
    pub fn define(&self, word: &str, definition: &str) {
        let body = serde_json::json!([{
            "word": word,
            "phonetic": format!("/{}/", word),
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [{"definition": definition, "example": format!("An {} example.", word)}]
            }]
        }]);
        self.respond(word, ResponseTemplate::new(200).set_body_json(body));
    }

    /// Answer `word` with the service's "not found" response
    pub fn not_found(&self, word: &str) {
        let body = serde_json::json!({
            "title": "No Definitions Found",
            "message": "Sorry pal, we couldn't find definitions for the word you were looking for."
        });
        self.respond(word, ResponseTemplate::new(404).set_body_json(body));
    }

    pub fn respond(&self, word: &str, response: ResponseTemplate) {
        self.rt.block_on(
            Mock::given(method("GET"))
                .and(path(format!("/{}", word)))
                .respond_with(response)
                .mount(&self.server),
        );
    }

    /// Number of lookups received so far
    pub fn request_count(&self) -> usize {
        self.rt
            .block_on(self.server.received_requests())
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

/// Files used by one run, all inside a temp directory
pub struct Workspace {
    pub dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let p = self.path(name);
        fs::write(&p, content).expect("Failed to write file");
        p
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("Failed to read file")
    }

    pub fn cache_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read("dictionary.json")).expect("Cache is not valid JSON")
    }

    /// Base command: words.txt -> processed.txt with dictionary.json, no pacing
    pub fn command(&self, base_url: &str) -> Command {
        let mut cmd = Command::new(binary_path());
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .args([
                "--base-url",
                base_url,
                "--delay-ms",
                "0",
                "--timeout-secs",
                "5",
                "--cache",
                "dictionary.json",
                "words.txt",
                "processed.txt",
            ]);
        cmd
    }
}

/// Run `cmd` with stdin closed
pub fn run(cmd: &mut Command) -> Output {
    cmd.stdin(Stdio::null())
        .output()
        .expect("Failed to run binary")
}

/// Run `cmd` feeding `input` on stdin
pub fn run_with_input(cmd: &mut Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for binary")
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
