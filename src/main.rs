//! quiver binary: parse flags, wire capabilities, run one session.

mod app;
mod cli;

use clap::Parser;

#[tokio::main]
async fn main() {
    app::startup::init_logging();
    let args = cli::Args::parse();
    let code = app::entry::run(args).await;
    std::process::exit(code);
}
