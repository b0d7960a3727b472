//! Optional system clipboard capability.

use std::sync::Mutex;
use std::time::Duration;

/// How long a Linux copy keeps serving the selection before returning.
///
/// X11 and Wayland clipboards live in the owning process, so the contents
/// vanish when quiver exits unless a clipboard manager takes them first.
/// A manager usually takes them at once, which ends the wait early.
pub const LINUX_CLIPBOARD_LINGER: Duration = Duration::from_secs(2);

/// A place the resolved command can be copied to.
pub trait ClipboardSink: Send + Sync {
    /// False when no clipboard backend could be reached.
    fn is_available(&self) -> bool;

    fn copy(&self, text: &str) -> Result<(), String>;
}

/// Clipboard backed by the desktop session via `arboard`.
pub struct SystemClipboard {
    inner: Mutex<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Connect to the system clipboard, or `None` when there is no display.
    pub fn connect() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Some(Self {
                inner: Mutex::new(clipboard),
            }),
            Err(err) => {
                tracing::debug!(%err, "system clipboard unavailable");
                None
            }
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn is_available(&self) -> bool {
        true
    }

    fn copy(&self, text: &str) -> Result<(), String> {
        let mut clipboard = self
            .inner
            .lock()
            .map_err(|_| "clipboard lock poisoned".to_string())?;
        set_and_hand_off(&mut clipboard, text).map_err(|err| err.to_string())
    }
}

/// Deadline for serving the selection, starting at `now`.
#[cfg(target_os = "linux")]
fn handoff_deadline(now: std::time::Instant) -> std::time::Instant {
    now + LINUX_CLIPBOARD_LINGER
}

#[cfg(target_os = "linux")]
fn set_and_hand_off(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    tracing::debug!(linger = ?LINUX_CLIPBOARD_LINGER, "serving clipboard until handed off");
    clipboard
        .set()
        .wait_until(handoff_deadline(std::time::Instant::now()))
        .text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_and_hand_off(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Stand-in used when no clipboard backend exists; copying is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardSink for NoClipboard {
    fn is_available(&self) -> bool {
        false
    }

    fn copy(&self, _text: &str) -> Result<(), String> {
        Ok(())
    }
}

/// Pick the system clipboard when reachable, otherwise [`NoClipboard`].
pub fn detect_clipboard() -> Box<dyn ClipboardSink> {
    match SystemClipboard::connect() {
        Some(clipboard) => Box::new(clipboard),
        None => Box::new(NoClipboard),
    }
}
