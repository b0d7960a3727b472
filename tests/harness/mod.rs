//! Recording fakes for integration tests, built only on the public API.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use quiver::clipboard::ClipboardSink;
use quiver::error::{InjectError, SelectError, TmuxError};
use quiver::session::Selector;
use quiver::template::fill_placeholders;
use quiver::tmux::Multiplexer;
use quiver::tty::Prefill;
use quiver::vars::SessionVariables;

static SCRATCH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fresh scratch directory under the system temp dir.
pub struct Scratch {
    pub root: PathBuf,
}

impl Scratch {
    pub fn new(name: &str) -> Self {
        let n = SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
        let root = std::env::temp_dir().join(format!(
            "quiver-it-{name}-{}-{n}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).expect("scratch dir");
        Self { root }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

/// Prefill sink that records what would have been typed.
#[derive(Default)]
pub struct RecordingPrefill {
    typed: Mutex<Vec<String>>,
}

impl RecordingPrefill {
    pub fn typed(&self) -> Vec<String> {
        self.typed.lock().unwrap().clone()
    }
}

impl Prefill for RecordingPrefill {
    fn inject(&self, cmd: &str) -> Result<(), InjectError> {
        self.typed.lock().unwrap().push(cmd.to_string());
        Ok(())
    }
}

/// Clipboard that keeps the last copy.
#[derive(Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn text(&self) -> Option<String> {
        self.text.lock().unwrap().clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn is_available(&self) -> bool {
        true
    }

    fn copy(&self, text: &str) -> Result<(), String> {
        *self.text.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// How the scripted tmux server behaves.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TmuxState {
    Missing,
    NoServer,
    Running,
}

/// Scripted tmux: sessions oldest to newest, one window `@w`, split yields `%new`.
pub struct ScriptedTmux {
    state: TmuxState,
    sessions: Vec<String>,
    panes: Vec<String>,
    log: Mutex<Vec<String>>,
}

impl ScriptedTmux {
    pub fn new(state: TmuxState, sessions: &[&str], panes: &[&str]) -> Self {
        Self {
            state,
            sessions: sessions.iter().map(|s| s.to_string()).collect(),
            panes: panes.iter().map(|p| p.to_string()).collect(),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn call(&self, entry: String) -> Result<(), TmuxError> {
        self.log.lock().unwrap().push(entry);
        match self.state {
            TmuxState::Running => Ok(()),
            _ => Err(TmuxError::Failed("no server running on /tmp/tmux-0/default".into())),
        }
    }
}

#[async_trait]
impl Multiplexer for ScriptedTmux {
    async fn is_available(&self) -> bool {
        self.state != TmuxState::Missing
    }

    async fn list_sessions(&self) -> Result<Vec<String>, TmuxError> {
        self.call("list-sessions".into())?;
        Ok(self.sessions.clone())
    }

    async fn active_window(&self, session: &str) -> Result<String, TmuxError> {
        self.call(format!("active-window {session}"))?;
        Ok("@w".into())
    }

    async fn list_panes(&self, window: &str) -> Result<Vec<String>, TmuxError> {
        self.call(format!("list-panes {window}"))?;
        Ok(self.panes.clone())
    }

    async fn split_window(&self, window: &str) -> Result<String, TmuxError> {
        self.call(format!("split-window {window}"))?;
        Ok("%new".into())
    }

    async fn send_literal(&self, pane: &str, text: &str) -> Result<(), TmuxError> {
        self.call(format!("send-keys -l {pane} {text}"))
    }

    async fn send_enter(&self, pane: &str) -> Result<(), TmuxError> {
        self.call(format!("send-keys {pane} Enter"))
    }

    async fn select_pane(&self, pane: &str) -> Result<(), TmuxError> {
        self.call(format!("select-pane {pane}"))
    }
}

/// Selector replaying typed lines, filling placeholders like a real picker.
pub struct ReplaySelector {
    lines: VecDeque<String>,
    pub restarts: usize,
}

impl ReplaySelector {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            restarts: 0,
        }
    }
}

#[async_trait]
impl Selector for ReplaySelector {
    async fn select(&mut self, vars: &SessionVariables) -> Result<Option<String>, SelectError> {
        Ok(self.lines.pop_front().map(|l| fill_placeholders(&l, vars)))
    }

    fn restart(&mut self) {
        self.restarts += 1;
    }
}
