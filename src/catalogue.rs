//! Plain-text command catalogue: one template per line.
//!
//! A catalogue path is either a file or a directory whose regular files are
//! read in name order. Blank lines and lines starting with `#` are skipped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory under the home directory used when no paths are configured.
pub const DEFAULT_CATALOGUE_DIR: &str = ".cheats";

/// Returns `~/.cheats` when a home directory is known.
pub fn default_catalogue_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_CATALOGUE_DIR))
}

/// One template and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub command: String,
    pub source: PathBuf,
    /// 1-based line number within `source`.
    pub line: usize,
}

/// Loaded templates plus any paths that could not be read.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    pub templates: Vec<Template>,
    pub unreadable: Vec<(PathBuf, String)>,
}

impl Catalogue {
    /// Load every configured path; unreadable paths are recorded, not fatal.
    pub fn load(paths: &[PathBuf]) -> Self {
        let mut catalogue = Self::default();
        for path in paths {
            match catalogue_files(path) {
                Ok(files) => {
                    for file in files {
                        catalogue.load_file(&file);
                    }
                }
                Err(err) => catalogue.unreadable.push((path.clone(), err.to_string())),
            }
        }
        tracing::debug!(
            templates = catalogue.templates.len(),
            unreadable = catalogue.unreadable.len(),
            "loaded catalogue"
        );
        catalogue
    }

    fn load_file(&mut self, file: &Path) {
        match std::fs::read_to_string(file) {
            Ok(text) => self.templates.extend(parse_templates(&text, file)),
            Err(err) => self.unreadable.push((file.to_path_buf(), err.to_string())),
        }
    }

    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.command.as_str())
    }

    /// Validate the catalogue for `--check`.
    pub fn check(&self) -> CatalogueReport {
        let mut seen: HashMap<&str, &Template> = HashMap::new();
        let mut duplicates = Vec::new();
        for template in &self.templates {
            if let Some(first) = seen.get(template.command.as_str()) {
                duplicates.push(((*first).clone(), template.clone()));
            } else {
                seen.insert(&template.command, template);
            }
        }
        CatalogueReport {
            template_count: self.templates.len(),
            duplicates,
            unreadable: self.unreadable.clone(),
        }
    }
}

/// Result of validating a catalogue.
#[derive(Debug, Clone, Default)]
pub struct CatalogueReport {
    pub template_count: usize,
    /// `(first occurrence, repeated occurrence)` pairs.
    pub duplicates: Vec<(Template, Template)>,
    pub unreadable: Vec<(PathBuf, String)>,
}

impl CatalogueReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.unreadable.is_empty()
    }

    /// Human-readable report lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (path, err) in &self.unreadable {
            lines.push(format!("unreadable: {}: {err}", path.display()));
        }
        for (first, repeat) in &self.duplicates {
            lines.push(format!(
                "duplicate: `{}` at {}:{} (first at {}:{})",
                repeat.command,
                repeat.source.display(),
                repeat.line,
                first.source.display(),
                first.line
            ));
        }
        lines.push(format!("{} templates", self.template_count));
        lines
    }
}

fn catalogue_files(path: &Path) -> std::io::Result<Vec<PathBuf>> {
    if !path.is_dir() {
        std::fs::metadata(path)?;
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn parse_templates(text: &str, source: &Path) -> Vec<Template> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| Template {
            command: line.to_string(),
            source: source.to_path_buf(),
            line: line_no,
        })
        .collect()
}
