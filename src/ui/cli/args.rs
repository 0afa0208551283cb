// Sat Oct 17 2026 - Alex

use crate::config::{ExtractorConfig, MAX_DEEP_SCAN_ENTRIES};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "unity-version-finder")]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Detects the Unity engine version bundled in Android APKs", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract the Unity version from each archive
    Scan(ScanArgs),
    /// Only check whether each archive is a Unity build
    Detect(DetectArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    #[arg(required = true)]
    pub apks: Vec<PathBuf>,

    #[arg(long)]
    pub json: bool,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub no_progress: bool,

    #[arg(long, default_value = "0")]
    pub pacing_ms: u64,

    #[arg(short, long)]
    pub jobs: Option<usize>,

    #[arg(long, default_value = "20")]
    pub deep_scan_limit: usize,
}

#[derive(Parser, Debug)]
pub struct DetectArgs {
    #[arg(required = true)]
    pub apks: Vec<PathBuf>,

    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.jobs == Some(0) {
            return Err("--jobs must be at least 1".to_string());
        }

        if self.deep_scan_limit > MAX_DEEP_SCAN_ENTRIES {
            return Err(format!("--deep-scan-limit cannot exceed {}", MAX_DEEP_SCAN_ENTRIES));
        }

        if let Some(output) = &self.output {
            if output.is_dir() {
                return Err(format!("Output path is a directory: {:?}", output));
            }
        }

        Ok(())
    }

    pub fn to_config(&self) -> ExtractorConfig {
        ExtractorConfig::new()
            .with_pacing(Duration::from_millis(self.pacing_ms))
            .with_deep_scan_limit(self.deep_scan_limit)
    }

    pub fn thread_count(&self) -> usize {
        self.jobs.unwrap_or_else(num_cpus::get).max(1)
    }
}
