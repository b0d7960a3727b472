//! Request flags and the fixed-priority route table.

use std::path::PathBuf;

/// Caller-selected delivery modes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub print: bool,
    pub copy: bool,
    pub exec: bool,
    pub tmux: bool,
    pub outfile: Option<PathBuf>,
}

/// The one sink a request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryRoute {
    Clipboard,
    Print,
    File(PathBuf),
    Execute,
    /// Send to a tmux pane; `submit` presses Enter after typing.
    Pane { submit: bool },
    Prefill,
}

impl DeliveryRoute {
    /// First matching row wins: copy, print, outfile, exec without tmux,
    /// tmux, then prefill.
    pub fn plan(request: &DeliveryRequest) -> Self {
        match request {
            DeliveryRequest { copy: true, .. } => Self::Clipboard,
            DeliveryRequest { print: true, .. } => Self::Print,
            DeliveryRequest {
                outfile: Some(path),
                ..
            } => Self::File(path.clone()),
            DeliveryRequest {
                exec: true,
                tmux: false,
                ..
            } => Self::Execute,
            DeliveryRequest {
                tmux: true, exec, ..
            } => Self::Pane { submit: *exec },
            _ => Self::Prefill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(copy: bool, print: bool, outfile: bool, exec: bool, tmux: bool) -> DeliveryRequest {
        DeliveryRequest {
            print,
            copy,
            exec,
            tmux,
            outfile: outfile.then(|| PathBuf::from("/tmp/out.txt")),
        }
    }

    #[test]
    fn copy_beats_every_other_flag() {
        assert_eq!(
            DeliveryRoute::plan(&request(true, true, true, true, true)),
            DeliveryRoute::Clipboard
        );
    }

    #[test]
    fn print_beats_outfile_exec_and_tmux() {
        assert_eq!(
            DeliveryRoute::plan(&request(false, true, true, true, true)),
            DeliveryRoute::Print
        );
    }

    #[test]
    fn outfile_beats_exec_and_tmux() {
        assert_eq!(
            DeliveryRoute::plan(&request(false, false, true, true, true)),
            DeliveryRoute::File(PathBuf::from("/tmp/out.txt"))
        );
    }

    #[test]
    fn exec_alone_executes() {
        assert_eq!(
            DeliveryRoute::plan(&request(false, false, false, true, false)),
            DeliveryRoute::Execute
        );
    }

    #[test]
    fn tmux_submits_only_with_exec() {
        assert_eq!(
            DeliveryRoute::plan(&request(false, false, false, true, true)),
            DeliveryRoute::Pane { submit: true }
        );
        assert_eq!(
            DeliveryRoute::plan(&request(false, false, false, false, true)),
            DeliveryRoute::Pane { submit: false }
        );
    }

    #[test]
    fn no_flags_prefill() {
        assert_eq!(
            DeliveryRoute::plan(&DeliveryRequest::default()),
            DeliveryRoute::Prefill
        );
    }
}
