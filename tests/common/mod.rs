//! Helpers for driving `alloy-ls` over JSON-RPC in integration tests
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdout, Command, Stdio};
use std::time::{Duration, Instant};

use serde_json::Value;

const SERVER_TIMEOUT: Duration = Duration::from_secs(5);
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_millis(200);

/// A language server child process spoken to over stdio
pub struct Session {
    child: Child,
    reader: BufReader<ChildStdout>,
}

impl Session {
    /// Spawn the server without any handshake
    pub fn spawn() -> Self {
        let mut child = spawn_server();
        let stdout = child
            .stdout
            .take()
            .expect("Child stdout should be available");
        Session {
            child,
            reader: BufReader::new(stdout),
        }
    }

    /// Spawn the server and complete the initialize handshake
    pub fn start() -> Self {
        let mut session = Session::spawn();
        let _init_response = session.initialize();

        session.send(&serde_json::json!({
            "jsonrpc": "2.0",
            "method": "initialized",
            "params": {}
        }));

        session
    }

    /// Send `initialize` with id 1 and return the response
    pub fn initialize(&mut self) -> Value {
        self.request(
            1,
            "initialize",
            serde_json::json!({
                "processId": null,
                "rootUri": null,
                "capabilities": {},
                "clientInfo": { "name": "test-client", "version": "1.0" }
            }),
        )
    }

    pub fn open(&mut self, uri: &str, language_id: &str, text: &str) {
        self.send(&serde_json::json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didOpen",
            "params": {
                "textDocument": {
                    "uri": uri,
                    "languageId": language_id,
                    "version": 1,
                    "text": text
                }
            }
        }));
    }

    pub fn request(&mut self, id: u64, method: &str, params: Value) -> Value {
        self.send(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params
        }));
        self.read_response(id)
    }

    pub fn send(&mut self, message: &Value) {
        let body = message.to_string();
        let request = format!("Content-Length: {}\r\n\r\n{}", body.len(), body);

        let stdin = self
            .child
            .stdin
            .as_mut()
            .expect("Child stdin should be available");
        stdin
            .write_all(request.as_bytes())
            .expect("Failed to write request");
        stdin.flush().expect("Failed to flush stdin");
    }

    pub fn read_message(&mut self) -> Value {
        let content_length = read_content_length_header(&mut self.reader);
        let mut body_bytes = vec![0u8; content_length];
        std::io::Read::read_exact(&mut self.reader, &mut body_bytes)
            .expect("Failed to read response body");
        let body = String::from_utf8(body_bytes).expect("Response body should be valid UTF-8");
        serde_json::from_str(&body).expect("Valid JSON response")
    }

    pub fn read_response(&mut self, expected_id: u64) -> Value {
        // Skip notifications such as window/logMessage
        loop {
            let message = self.read_message();
            if message.get("id").and_then(|id| id.as_u64()) == Some(expected_id) {
                return message;
            }
        }
    }

    pub fn read_notification(&mut self, method: &str) -> Value {
        loop {
            let message = self.read_message();
            if message.get("method").and_then(|m| m.as_str()) == Some(method) {
                return message;
            }
        }
    }

    pub fn shutdown(mut self) {
        // Close stdin to signal we're done
        drop(self.child.stdin.take());

        std::thread::sleep(SHUTDOWN_GRACE_PERIOD);

        match self.child.try_wait() {
            Ok(Some(status)) => {
                if !status.success() {
                    eprintln!("Server exited with non-zero status: {:?}", status);
                }
            }
            Ok(None) => {
                eprintln!("Server didn't exit gracefully, forcing termination");
                let _ = self.child.kill();
                let _ = self.child.wait();
            }
            Err(e) => panic!("Error checking server status: {}", e),
        }
    }
}

fn spawn_server() -> Child {
    let bin_path = std::env::var("CARGO_BIN_EXE_alloy-ls")
        .unwrap_or_else(|_| "target/debug/alloy-ls".to_string());

    Command::new(bin_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .env("RUST_LOG", "off")
        .spawn()
        .expect("Failed to spawn language server")
}

fn read_content_length_header(reader: &mut BufReader<ChildStdout>) -> usize {
    let start_time = Instant::now();
    let mut content_length = None;

    loop {
        if start_time.elapsed() > SERVER_TIMEOUT {
            panic!("Timeout waiting for response headers");
        }

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => panic!("Unexpected EOF while reading headers"),
            Ok(_) => {
                if line.trim().is_empty() {
                    break;
                }

                if let Some(length_str) = line.strip_prefix("Content-Length:") {
                    content_length = Some(
                        length_str
                            .trim()
                            .parse::<usize>()
                            .expect("Invalid Content-Length header"),
                    );
                }
            }
            Err(e) => panic!("Error reading headers: {}", e),
        }
    }

    content_length.expect("Missing Content-Length header")
}
