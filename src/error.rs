//! Unified error types for the launcher.

use std::fmt;

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Errors from the persisted session-variable file.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    /// The file exists but is not a flat JSON object of strings.
    Parse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(msg) => write!(f, "malformed variable store: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// TmuxError
// ---------------------------------------------------------------------------

/// Failures raised by the multiplexer layer. Always absorbed by fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TmuxError {
    /// The tmux binary could not be started.
    Spawn(String),
    /// tmux ran but exited non-zero (no server, bad target, ...).
    Failed(String),
    /// tmux output did not have the expected shape.
    Unexpected(String),
}

impl fmt::Display for TmuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(msg) => write!(f, "failed to start tmux: {msg}"),
            Self::Failed(msg) => write!(f, "tmux failed: {msg}"),
            Self::Unexpected(msg) => write!(f, "unexpected tmux output: {msg}"),
        }
    }
}

impl std::error::Error for TmuxError {}

// ---------------------------------------------------------------------------
// InjectError
// ---------------------------------------------------------------------------

/// Errors while prefilling the controlling terminal's input queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectError {
    /// Reading or applying terminal attributes failed.
    Attributes(String),
    /// A TIOCSTI push was rejected.
    Inject(String),
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attributes(msg) => write!(f, "terminal attributes: {msg}"),
            Self::Inject(msg) => write!(f, "terminal input injection: {msg}"),
        }
    }
}

impl std::error::Error for InjectError {}

// ---------------------------------------------------------------------------
// DeliveryError
// ---------------------------------------------------------------------------

/// Errors from a delivery sink that cannot degrade silently.
#[derive(Debug)]
pub enum DeliveryError {
    Io(std::io::Error),
    Inject(InjectError),
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Inject(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DeliveryError {}

impl From<std::io::Error> for DeliveryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<InjectError> for DeliveryError {
    fn from(e: InjectError) -> Self {
        Self::Inject(e)
    }
}

// ---------------------------------------------------------------------------
// SelectError
// ---------------------------------------------------------------------------

/// Errors from the interactive selector.
#[derive(Debug)]
pub enum SelectError {
    Io(std::io::Error),
    /// The selector program could not be started or crashed.
    Spawn(String),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Spawn(msg) => write!(f, "selector: {msg}"),
        }
    }
}

impl std::error::Error for SelectError {}

impl From<std::io::Error> for SelectError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// LauncherError (top-level)
// ---------------------------------------------------------------------------

/// Top-level error type for one launcher session.
#[derive(Debug)]
pub enum LauncherError {
    Store(StoreError),
    Delivery(DeliveryError),
    Select(SelectError),
}

impl fmt::Display for LauncherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "variables: {e}"),
            Self::Delivery(e) => write!(f, "delivery: {e}"),
            Self::Select(e) => write!(f, "selection: {e}"),
        }
    }
}

impl std::error::Error for LauncherError {}

impl From<StoreError> for LauncherError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<DeliveryError> for LauncherError {
    fn from(e: DeliveryError) -> Self {
        Self::Delivery(e)
    }
}

impl From<SelectError> for LauncherError {
    fn from(e: SelectError) -> Self {
        Self::Select(e)
    }
}
