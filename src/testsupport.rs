//! Shared test fixtures: temp dirs plus fake terminal, tmux, clipboard, and
//! selector capabilities that record what they were asked to do.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::clipboard::ClipboardSink;
use crate::error::{InjectError, SelectError, TmuxError};
use crate::session::Selector;
use crate::template::fill_placeholders;
use crate::tmux::Multiplexer;
use crate::tty::{ApplyWhen, TerminalInput};
use crate::vars::SessionVariables;

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
            "quiver-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

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

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// The subset of line-discipline flags the fake terminal models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeAttrs {
    pub echo: bool,
    pub canonical: bool,
    pub isig: bool,
}

impl FakeAttrs {
    /// A normal interactive terminal.
    pub fn cooked() -> Self {
        Self {
            echo: true,
            canonical: true,
            isig: true,
        }
    }

    pub fn quiet_from(attrs: &Self) -> Self {
        Self {
            echo: false,
            canonical: false,
            ..*attrs
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermCall {
    Get,
    Apply(FakeAttrs, ApplyWhen),
    Push(u8),
}

#[derive(Debug)]
struct FakeTerminalState {
    current: FakeAttrs,
    calls: Vec<TermCall>,
    queued: Vec<u8>,
}

/// In-memory terminal that records every operation in order.
#[derive(Debug)]
pub struct FakeTerminal {
    state: RefCell<FakeTerminalState>,
    fail_get: bool,
    fail_push_after: Option<usize>,
}

impl FakeTerminal {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(FakeTerminalState {
                current: FakeAttrs::cooked(),
                calls: Vec::new(),
                queued: Vec::new(),
            }),
            fail_get: false,
            fail_push_after: None,
        }
    }

    pub fn failing_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    /// Reject every push after the first `count` succeed.
    pub fn failing_push_after(mut self, count: usize) -> Self {
        self.fail_push_after = Some(count);
        self
    }

    pub fn calls(&self) -> Vec<TermCall> {
        self.state.borrow().calls.clone()
    }

    pub fn queued(&self) -> String {
        String::from_utf8_lossy(&self.state.borrow().queued).to_string()
    }

    pub fn current(&self) -> FakeAttrs {
        self.state.borrow().current
    }
}

impl TerminalInput for FakeTerminal {
    type Attrs = FakeAttrs;

    fn attributes(&self) -> Result<FakeAttrs, InjectError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(TermCall::Get);
        if self.fail_get {
            return Err(InjectError::Attributes("not a tty".into()));
        }
        Ok(state.current)
    }

    fn apply(&self, attrs: &FakeAttrs, when: ApplyWhen) -> Result<(), InjectError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(TermCall::Apply(*attrs, when));
        state.current = *attrs;
        Ok(())
    }

    fn quiet(attrs: &FakeAttrs) -> FakeAttrs {
        FakeAttrs::quiet_from(attrs)
    }

    fn push_byte(&self, byte: u8) -> Result<(), InjectError> {
        let mut state = self.state.borrow_mut();
        if self
            .fail_push_after
            .is_some_and(|limit| state.queued.len() >= limit)
        {
            return Err(InjectError::Inject("EIO".into()));
        }
        state.calls.push(TermCall::Push(byte));
        state.queued.push(byte);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Multiplexer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MuxCall {
    Available,
    ListSessions,
    ActiveWindow(String),
    ListPanes(String),
    Split(String),
    SendLiteral(String, String),
    SendEnter(String),
    Select(String),
}

/// Scripted tmux server: one window `@1`, splits create `%9`.
#[derive(Debug)]
pub struct FakeMux {
    available: bool,
    fail: bool,
    sessions: Vec<String>,
    panes: Vec<String>,
    calls: Mutex<Vec<MuxCall>>,
}

impl FakeMux {
    pub fn with_panes(panes: &[&str]) -> Self {
        Self {
            available: true,
            fail: false,
            sessions: vec!["$1".to_string()],
            panes: panes.iter().map(|p| p.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Sessions listed oldest to newest.
    pub fn sessions(mut self, sessions: &[&str]) -> Self {
        self.sessions = sessions.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Installed, but every server call fails.
    pub fn failing() -> Self {
        let mut mux = Self::with_panes(&["%0"]);
        mux.fail = true;
        mux
    }

    pub fn unavailable() -> Self {
        let mut mux = Self::with_panes(&["%0"]);
        mux.available = false;
        mux
    }

    pub fn calls(&self) -> Vec<MuxCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: MuxCall) -> Result<(), TmuxError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(TmuxError::Failed("no server running".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl Multiplexer for FakeMux {
    async fn is_available(&self) -> bool {
        self.calls.lock().unwrap().push(MuxCall::Available);
        self.available
    }

    async fn list_sessions(&self) -> Result<Vec<String>, TmuxError> {
        self.record(MuxCall::ListSessions)?;
        Ok(self.sessions.clone())
    }

    async fn active_window(&self, session: &str) -> Result<String, TmuxError> {
        self.record(MuxCall::ActiveWindow(session.to_string()))?;
        Ok("@1".to_string())
    }

    async fn list_panes(&self, window: &str) -> Result<Vec<String>, TmuxError> {
        self.record(MuxCall::ListPanes(window.to_string()))?;
        Ok(self.panes.clone())
    }

    async fn split_window(&self, window: &str) -> Result<String, TmuxError> {
        self.record(MuxCall::Split(window.to_string()))?;
        Ok("%9".to_string())
    }

    async fn send_literal(&self, pane: &str, text: &str) -> Result<(), TmuxError> {
        self.record(MuxCall::SendLiteral(pane.to_string(), text.to_string()))
    }

    async fn send_enter(&self, pane: &str) -> Result<(), TmuxError> {
        self.record(MuxCall::SendEnter(pane.to_string()))
    }

    async fn select_pane(&self, pane: &str) -> Result<(), TmuxError> {
        self.record(MuxCall::Select(pane.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Clipboard
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FakeClipboard {
    fail: bool,
    contents: Mutex<Option<String>>,
}

impl FakeClipboard {
    pub fn available() -> Self {
        Self::default()
    }

    /// Reachable, but every copy errors.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl ClipboardSink for FakeClipboard {
    fn is_available(&self) -> bool {
        true
    }

    fn copy(&self, text: &str) -> Result<(), String> {
        if self.fail {
            return Err("clipboard owner went away".into());
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// Returns pre-scripted lines, filled from the session variables.
#[derive(Debug, Default)]
pub struct ScriptedSelector {
    lines: VecDeque<String>,
    restarts: usize,
}

impl ScriptedSelector {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            restarts: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    pub fn restarts(&self) -> usize {
        self.restarts
    }
}

#[async_trait]
impl Selector for ScriptedSelector {
    async fn select(&mut self, vars: &SessionVariables) -> Result<Option<String>, SelectError> {
        Ok(self
            .lines
            .pop_front()
            .map(|line| fill_placeholders(&line, vars)))
    }

    fn restart(&mut self) {
        self.restarts += 1;
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
        assert!(fixture.path().exists());
    }

    #[test]
    fn fake_terminal_tracks_current_attributes() {
        let term = FakeTerminal::new();
        let quiet = FakeAttrs::quiet_from(&FakeAttrs::cooked());
        term.apply(&quiet, ApplyWhen::Now).unwrap();
        assert_eq!(term.current(), quiet);
    }
}
