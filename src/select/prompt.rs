//! Line-oriented picker for terminals without fzf.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::catalogue::Catalogue;
use crate::error::SelectError;
use crate::session::Selector;
use crate::template::fill_placeholders;
use crate::vars::SessionVariables;

/// Lists numbered templates on stderr and reads a choice from `reader`.
///
/// A number picks that template; any other text is taken as typed.
pub struct PromptSelector<R> {
    reader: R,
    paths: Vec<PathBuf>,
    templates: Vec<String>,
    listed: bool,
}

impl PromptSelector<BufReader<Stdin>> {
    pub fn stdin(paths: Vec<PathBuf>) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), paths)
    }
}

impl<R> PromptSelector<R> {
    pub fn new(reader: R, paths: Vec<PathBuf>) -> Self {
        let templates = load_templates(&paths);
        Self {
            reader,
            paths,
            templates,
            listed: false,
        }
    }

    /// Map one input line to a template or the typed text.
    fn resolve(&self, input: &str) -> Option<String> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let picked = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.templates.get(idx));
        Some(picked.cloned().unwrap_or_else(|| input.to_string()))
    }

    fn list_templates(&mut self) {
        if self.listed {
            return;
        }
        self.listed = true;
        for (idx, template) in self.templates.iter().enumerate() {
            eprintln!("{:>4}  {template}", idx + 1);
        }
    }
}

#[async_trait]
impl<R> Selector for PromptSelector<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn select(&mut self, vars: &SessionVariables) -> Result<Option<String>, SelectError> {
        self.list_templates();
        eprint!("quiver> ");
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(self
            .resolve(&line)
            .map(|picked| fill_placeholders(&picked, vars)))
    }

    fn restart(&mut self) {
        self.templates = load_templates(&self.paths);
        self.listed = false;
    }
}

fn load_templates(paths: &[PathBuf]) -> Vec<String> {
    Catalogue::load(paths).commands().map(str::to_string).collect()
}
