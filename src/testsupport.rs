//! Shared test fixtures: temp dirs, a one-shot HTTP stub, and test doubles
//! for the render, terminal, clipboard, and model seams.

use crate::api::ModelClient;
use crate::clipboard::Clipboard;
use crate::error::{ApiError, ClipboardError};
use crate::ui::render::RenderSink;
use crate::ui::spinner::Spinner;
use crate::ui::terminal::Terminal;
use async_trait::async_trait;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "shelly-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Serve exactly one HTTP response on a loopback port.
///
/// Returns the base URL and a handle resolving to the raw request text.
pub async fn serve_http_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let request = read_http_request(&mut stream).await;
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
        request
    });
    (format!("http://{addr}"), handle)
}

/// Read headers plus `Content-Length` body bytes from one request.
async fn read_http_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + content_length {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Render sink that records output instead of writing to the terminal.
#[derive(Debug, Default)]
pub struct RecordingSink {
    stdout: Mutex<Vec<String>>,
    stderr: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Everything written to the stdout side, one entry per call.
    pub fn stdout(&self) -> Vec<String> {
        self.stdout.lock().expect("stdout lock").clone()
    }

    /// Everything written to the stderr side, one entry per call.
    pub fn stderr(&self) -> Vec<String> {
        self.stderr.lock().expect("stderr lock").clone()
    }

    fn out(&self, text: String) {
        self.stdout.lock().expect("stdout lock").push(text);
    }

    fn err(&self, text: String) {
        self.stderr.lock().expect("stderr lock").push(text);
    }
}

impl RenderSink for RecordingSink {
    fn assistant_message(&self, content: &str) {
        self.out(content.to_string());
    }

    fn info(&self, text: &str) {
        self.out(text.to_string());
    }

    fn success(&self, text: &str) {
        self.out(text.to_string());
    }

    fn prompt_inline(&self, text: &str) {
        self.out(text.to_string());
    }

    fn waiting(&self, _model: &str) -> Spinner {
        Spinner::inactive()
    }

    fn warn(&self, msg: &str) {
        self.err(format!("warning: {msg}"));
    }

    fn error(&self, msg: &str) {
        self.err(format!("error: {msg}"));
    }

    fn detail(&self, text: &str) {
        self.err(text.to_string());
    }
}

/// Terminal double with scripted stdin, selection, and key answers.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    interactive: bool,
    piped: String,
    selection: Option<String>,
    api_key: Option<String>,
    pub piped_reads: usize,
    pub selection_reads: usize,
}

impl ScriptedTerminal {
    /// Stdin is a terminal; nothing is piped.
    pub fn interactive() -> Self {
        Self {
            interactive: true,
            ..Self::default()
        }
    }

    /// Stdin is a pipe carrying `text`.
    pub fn piped(text: &str) -> Self {
        Self {
            interactive: false,
            piped: text.to_string(),
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, answer: &str) -> Self {
        self.selection = Some(answer.to_string());
        self
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }
}

impl Terminal for ScriptedTerminal {
    fn stdin_is_interactive(&self) -> bool {
        self.interactive
    }

    fn read_piped_input(&mut self) -> io::Result<String> {
        self.piped_reads += 1;
        crate::ui::terminal::read_lines_joined(self.piped.as_bytes())
    }

    fn read_selection_line(&mut self) -> io::Result<String> {
        self.selection_reads += 1;
        Ok(self.selection.take().unwrap_or_default())
    }

    fn read_api_key(&mut self) -> io::Result<String> {
        self.api_key
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted key"))
    }
}

/// Clipboard double recording every copy.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    copied: RefCell<Vec<String>>,
    failure: RefCell<Option<ClipboardError>>,
}

impl RecordingClipboard {
    /// Clipboard whose next copy fails with `err`.
    pub fn failing_with(err: ClipboardError) -> Self {
        Self {
            copied: RefCell::default(),
            failure: RefCell::new(Some(err)),
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = self.failure.borrow_mut().take() {
            return Err(err);
        }
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Model double returning one scripted outcome and recording prompts.
#[derive(Debug)]
pub struct ScriptedModel {
    outcome: Mutex<Option<Result<String, ApiError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn replying(reply: &str) -> Self {
        Self::with_outcome(Ok(reply.to_string()))
    }

    pub fn failing(err: ApiError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<String, ApiError>) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedModel {
    fn model(&self) -> &str {
        "scripted/model"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());
        self.outcome
            .lock()
            .expect("outcome lock")
            .take()
            .unwrap_or(Err(ApiError::EmptyReply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn scripted_terminal_answers_once() {
        let mut terminal = ScriptedTerminal::piped("a\nb\n").with_selection("1\n");
        assert!(!terminal.stdin_is_interactive());
        assert_eq!(terminal.read_piped_input().unwrap(), "a\nb");
        assert_eq!(terminal.read_selection_line().unwrap(), "1\n");
        assert_eq!(terminal.read_selection_line().unwrap(), "");
        assert_eq!(terminal.selection_reads, 2);
    }

    #[tokio::test]
    async fn http_stub_captures_request_body() {
        let (url, server) = serve_http_once("200 OK", "{}").await;
        let resp = reqwest::Client::new()
            .post(format!("{url}/x"))
            .body("hello")
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_success());
        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /x "));
        assert!(raw.ends_with("hello"));
    }
}
