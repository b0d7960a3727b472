//! Application entry orchestration for the quiver CLI.

use quiver::build_info::cli_version_text;
use quiver::clipboard::{detect_clipboard, ClipboardSink, NoClipboard};
use quiver::config::{load_config_with_source, Config};
use quiver::delivery::{DeliveryRequest, Dispatcher};
use quiver::error::LauncherError;
use quiver::select::{fzf_available, FzfSelector, PromptSelector, SelectorKind};
use quiver::session::{SessionEnd, SessionLoop, Selector};
use quiver::tmux::{PaneCoordinator, TmuxCli};
use quiver::tty::{ControllingTerminal, TtyInjector};
use quiver::ui::render::{RenderSink, Renderer};
use quiver::vars::VariableStore;

use crate::app::check::run_check;
use crate::app::startup::{choose_selector, outcome_notice};
use crate::cli::Args;

/// Run one invocation and return the process exit code.
pub(crate) async fn run(args: Args) -> i32 {
    if args.version {
        println!("{}", cli_version_text());
        return 0;
    }

    let loaded = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            Renderer::new(std::env::var_os("NO_COLOR").is_none()).error(&format!("config: {e}"));
            return 1;
        }
    };
    let config = loaded.config;
    let renderer = Renderer::new(config.display.color);

    if args.check {
        return run_check(
            &config.catalogue_paths,
            &loaded.source,
            &renderer,
            &mut std::io::stdout(),
        );
    }

    let request = args.delivery_request();
    match run_session(&config, &request, args.prompt).await {
        Ok(end) => {
            tracing::debug!(?end, "session finished");
            if let Some(notice) = outcome_notice(&end) {
                renderer.warn(&notice);
            }
            0
        }
        Err(e) => {
            renderer.error(&e.to_string());
            1
        }
    }
}

/// Wire the real capabilities and drive the session loop.
///
/// A copy blocks inside the dispatch until a clipboard manager takes the
/// selection or the Linux linger runs out.
async fn run_session(
    config: &Config,
    request: &DeliveryRequest,
    force_prompt: bool,
) -> Result<SessionEnd, LauncherError> {
    let store = VariableStore::new(config.variables_path.clone());
    let clipboard: Box<dyn ClipboardSink> = if request.copy {
        detect_clipboard()
    } else {
        Box::new(NoClipboard)
    };
    let mux = TmuxCli::default();
    let injector = TtyInjector::new(ControllingTerminal::new());
    let panes =
        PaneCoordinator::new(&mux, &injector).with_split_delay(config.tmux.split_delay());
    let dispatcher = Dispatcher::new(clipboard.as_ref(), &mux, &injector)
        .with_shell(config.exec_shell.clone())
        .with_panes(panes);

    let mut selector = build_selector(config, force_prompt).await;
    let session = SessionLoop::new(&store, &dispatcher, request);
    session.run(selector.as_mut(), &mut std::io::stdout()).await
}

async fn build_selector(config: &Config, force_prompt: bool) -> Box<dyn Selector> {
    let wants_fzf = !force_prompt && config.selector == SelectorKind::Fzf;
    let fzf_ok = wants_fzf && fzf_available(&config.fzf_command).await;
    if wants_fzf && !fzf_ok {
        tracing::warn!(program = %config.fzf_command, "fzf not found; using line prompt");
    }
    let kind = choose_selector(config.selector, force_prompt, fzf_ok);
    tracing::debug!(?kind, "selected picker");
    let paths = config.catalogue_paths.clone();
    match kind {
        SelectorKind::Fzf => Box::new(FzfSelector::new(config.fzf_command.clone(), paths)),
        SelectorKind::Prompt => Box::new(PromptSelector::stdin(paths)),
    }
}
