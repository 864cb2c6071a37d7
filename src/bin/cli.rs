// src/bin/cli.rs
use prod_report::cli;
use prod_report::log::{self, LogSink};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(LogSink::Stderr);
    cli::run()
}
