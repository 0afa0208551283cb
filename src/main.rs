// Sat Oct 17 2026 - Alex

use colored::Colorize;
use std::process;

fn main() {
    match unity_version_finder::ui::cli::run() {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            process::exit(1);
        }
    }
}
