//! Logging setup plus small startup and shutdown decisions.

use quiver::delivery::DeliveryOutcome;
use quiver::select::SelectorKind;
use quiver::session::SessionEnd;
use quiver::tmux::PaneDelivery;

/// Crate-specific log filter; takes precedence over `RUST_LOG`.
const LOG_ENV: &str = "QUIVER_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr `tracing` subscriber.
pub(crate) fn init_logging() {
    let filter = log_filter_with(|name| std::env::var(name).ok());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// `QUIVER_LOG`, then `RUST_LOG`, then `warn`.
pub(crate) fn log_filter_with<FEnv>(env_lookup: FEnv) -> String
where
    FEnv: Fn(&str) -> Option<String>,
{
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .filter_map(&env_lookup)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// The line prompt wins when forced, configured, or fzf is missing.
pub(crate) fn choose_selector(
    configured: SelectorKind,
    force_prompt: bool,
    fzf_available: bool,
) -> SelectorKind {
    if force_prompt || configured == SelectorKind::Prompt || !fzf_available {
        SelectorKind::Prompt
    } else {
        SelectorKind::Fzf
    }
}

/// A warning worth showing after a session, if any.
pub(crate) fn outcome_notice(end: &SessionEnd) -> Option<String> {
    match end {
        SessionEnd::Delivered(DeliveryOutcome::ClipboardUnavailable) => {
            Some("clipboard unavailable; command was not copied".to_string())
        }
        SessionEnd::Delivered(DeliveryOutcome::Pane(PaneDelivery::FellBack { reason })) => {
            Some(format!("tmux: {reason}; prefilled this terminal instead"))
        }
        _ => None,
    }
}
