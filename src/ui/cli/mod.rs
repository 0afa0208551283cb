// Sat Oct 17 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{Args, Command, DetectArgs, ScanArgs};
pub use handler::CommandHandler;

use clap::Parser;

pub fn parse_args() -> Args {
    Args::parse()
}

/// Parses the process arguments and runs the chosen command. `Ok(false)` means the
/// command ran but at least one archive did not yield the expected outcome.
pub fn run() -> anyhow::Result<bool> {
    let args = parse_args();
    let handler = CommandHandler::new();
    handler.execute(args)
}
