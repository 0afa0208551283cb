// Sat Oct 17 2026 - Alex

pub mod bar;

pub use bar::BarSink;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;

const ARCHIVE_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos:>3}% {prefix:.bold} {msg}";

/// One bar per archive, all drawn under a shared `MultiProgress`.
#[derive(Clone)]
pub struct ProgressManager {
    multi: MultiProgress,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
        }
    }

    pub fn hidden() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        }
    }

    pub fn archive_bar(&self, path: &Path) -> BarSink {
        let style = ProgressStyle::default_bar()
            .template(ARCHIVE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ ");

        let pb = ProgressBar::new(100);
        pb.set_style(style);
        pb.set_prefix(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        );
        BarSink::new(self.multi.add(pb))
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
