mod args;
mod cli;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

fn main() {
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("Failed to set up the logger: {}", e);
    }
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = cli::run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
