//! `--check`: validate the catalogue and report.

use std::io::Write;
use std::path::PathBuf;

use quiver::catalogue::Catalogue;
use quiver::config::ConfigSource;
use quiver::ui::render::RenderSink;

/// Print the catalogue report; 0 when clean, 1 when there are problems.
///
/// The summary goes to `out`; the config location and problems go to the
/// renderer.
pub(crate) fn run_check(
    paths: &[PathBuf],
    source: &ConfigSource,
    renderer: &dyn RenderSink,
    out: &mut dyn Write,
) -> i32 {
    renderer.field("config", &source.to_string());
    if paths.is_empty() {
        renderer.warn("no catalogue paths configured");
    }
    let report = Catalogue::load(paths).check();
    let lines = report.lines();
    let (problems, summary) = lines.split_at(lines.len().saturating_sub(1));
    for problem in problems {
        renderer.detail(problem);
    }
    for line in summary {
        let _ = writeln!(out, "{line}");
    }
    if report.is_clean() {
        0
    } else {
        renderer.error("catalogue has problems");
        1
    }
}
