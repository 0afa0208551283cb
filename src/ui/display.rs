// Sat Oct 17 2026 - Alex

use crate::output::{ProbeReport, ScanReport};
use crate::result::ExtractionResult;
use colored::*;
use std::path::Path;

pub struct ResultRenderer {
    use_color: bool,
    show_details: bool,
}

impl ResultRenderer {
    pub fn new() -> Self {
        Self {
            use_color: true,
            show_details: true,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_details(mut self, show_details: bool) -> Self {
        self.show_details = show_details;
        self
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn render_result(&self, path: &Path, result: &ExtractionResult) -> String {
        let mut lines = Vec::new();
        let name = path.display().to_string();

        match (&result.version, &result.error) {
            (Some(version), _) => {
                lines.push(format!("{} {}: Unity {}", self.paint("[+]", Color::Green), name, self.paint(version, Color::Cyan)));
                if let Some(entry) = &result.source_entry {
                    let tier = result.tier.map(|t| t.to_string()).unwrap_or_default();
                    lines.push(format!("    from {} ({} search)", entry, tier));
                }
            }
            (None, Some(error)) => {
                let marker = if error.is_fatal() { "[!]" } else { "[-]" };
                let color = if error.is_fatal() { Color::Red } else { Color::Yellow };
                lines.push(format!("{} {}: {}", self.paint(marker, color), name, error));
            }
            (None, None) => {
                lines.push(format!("{} {}: no result", self.paint("[?]", Color::Yellow), name));
            }
        }

        if self.show_details {
            for detail in &result.details {
                lines.push(format!("    {}", self.paint(detail, Color::BrightBlack)));
            }
        }

        lines.join("\n")
    }

    pub fn render_probe(&self, report: &ProbeReport) -> String {
        let name = report.path.display().to_string();

        let Some(probe) = &report.probe else {
            let message = report.error.as_ref().map(ToString::to_string).unwrap_or_default();
            return format!("{} {}: {}", self.paint("[!]", Color::Red), name, message);
        };

        let mut lines = Vec::new();
        match probe.indicator {
            Some(indicator) => lines.push(format!(
                "{} {}: Unity build (matched {})",
                self.paint("[+]", Color::Green),
                name,
                self.paint(indicator, Color::Cyan)
            )),
            None => lines.push(format!("{} {}: not a Unity build", self.paint("[-]", Color::Yellow), name)),
        }

        lines.push(format!("    {} entries", probe.entry_count));
        for target in &probe.present_targets {
            lines.push(format!("    target present: {}", target));
        }

        lines.join("\n")
    }

    pub fn render_summary(&self, report: &ScanReport) -> String {
        let total = report.archives.len();
        let found = report.found_count();
        let line = format!("{}/{} archives yielded a Unity version", found, total);

        if found == total {
            self.paint(&line, Color::Green)
        } else {
            self.paint(&line, Color::Yellow)
        }
    }
}

impl Default for ResultRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use crate::extractor::EngineProbe;
    use crate::version::MatchTier;

    fn plain() -> ResultRenderer {
        ResultRenderer::new().with_color(false)
    }

    #[test]
    fn test_render_found() {
        let mut result = ExtractionResult::pending();
        result.is_target_engine = true;
        result.note("Could not read Level 0: invalid checksum");
        let result = result.found("2021.3.1f1".into(), "assets/bin/Data/globalgamemanagers", MatchTier::Anchored);

        let text = plain().render_result(Path::new("game.apk"), &result);
        assert!(text.starts_with("[+] game.apk: Unity 2021.3.1f1"));
        assert!(text.contains("from assets/bin/Data/globalgamemanagers (anchored search)"));
        assert!(text.contains("Could not read Level 0"));

        let quiet = plain().with_details(false).render_result(Path::new("game.apk"), &result);
        assert!(!quiet.contains("Could not read"));
    }

    #[test]
    fn test_render_failures() {
        let fatal = ExtractionResult::failed(ExtractError::InvalidArchive("File too small".into()));
        assert!(plain().render_result(Path::new("a.apk"), &fatal).starts_with("[!] a.apk: "));

        let soft = ExtractionResult::failed(ExtractError::NotTargetEngine);
        assert!(plain().render_result(Path::new("b.apk"), &soft).starts_with("[-] b.apk: "));
    }

    #[test]
    fn test_render_probe() {
        let probe = EngineProbe {
            is_target_engine: true,
            indicator: Some("lib/arm64-v8a/libunity.so"),
            present_targets: vec!["assets/bin/Data/globalgamemanagers"],
            entry_count: 12,
        };
        let report = ProbeReport::new(Path::new("c.apk"), Ok(probe));
        let text = plain().render_probe(&report);
        assert!(text.contains("Unity build (matched lib/arm64-v8a/libunity.so)"));
        assert!(text.contains("target present: assets/bin/Data/globalgamemanagers"));
    }

    #[test]
    fn test_summary() {
        let report = ScanReport::new(vec![(
            "a.apk".into(),
            ExtractionResult::failed(ExtractError::VersionUndetermined),
        )]);
        assert_eq!(plain().render_summary(&report), "0/1 archives yielded a Unity version");
    }
}
