// Sat Oct 17 2026 - Alex

use crate::archive::{check_signature, ApkArchive, EntryReader};
use crate::config::ExtractorConfig;
use crate::engine::targets::present_targets;
use crate::engine::EngineDetector;
use crate::error::ExtractError;
use crate::progress::reporter::{
    ENGINE_CHECK_PERCENT, FINAL_PERCENT, OPENING_PERCENT, STRUCTURE_SCAN_PERCENT, VALIDATING_PERCENT,
};
use crate::progress::{ProgressSink, ProgressStage, Reporter};
use crate::result::ExtractionResult;
use crate::scan::{DeepScanner, PriorityScanner, VersionHit};
use crate::version::VersionMatcher;
use log::{debug, info};
use serde::Serialize;
use std::fmt;
use std::io::{Read, Seek};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionState {
    Idle,
    Validating,
    Invalid,
    Opened,
    NotEngine,
    TargetScanning,
    DeepScanning,
    Found,
    Undetermined,
}

impl fmt::Display for ExtractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtractionState::Idle => "idle",
            ExtractionState::Validating => "validating",
            ExtractionState::Invalid => "invalid",
            ExtractionState::Opened => "opened",
            ExtractionState::NotEngine => "not-engine",
            ExtractionState::TargetScanning => "target-scanning",
            ExtractionState::DeepScanning => "deep-scanning",
            ExtractionState::Found => "found",
            ExtractionState::Undetermined => "undetermined",
        };
        write!(f, "{}", name)
    }
}

/// Engine check without any entry reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineProbe {
    pub is_target_engine: bool,
    pub indicator: Option<&'static str>,
    pub present_targets: Vec<&'static str>,
    pub entry_count: usize,
}

pub struct UnityVersionExtractor {
    config: ExtractorConfig,
    matcher: VersionMatcher,
    detector: EngineDetector,
}

impl UnityVersionExtractor {
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        let matcher = VersionMatcher::from_config(&config);
        Self {
            config,
            matcher,
            detector: EngineDetector::new(),
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn extract<P: AsRef<Path>>(&self, path: P) -> ExtractionResult {
        self.guarded(|| self.run_path(path.as_ref(), Reporter::new(None, self.config.pacing())))
    }

    pub fn extract_with_progress<P: AsRef<Path>>(&self, path: P, sink: &mut dyn ProgressSink) -> ExtractionResult {
        self.guarded(|| self.run_path(path.as_ref(), Reporter::new(Some(sink), self.config.pacing())))
    }

    /// Same stages as [`extract`](Self::extract) over an in-memory or already opened source.
    pub fn extract_from_reader<R: Read + Seek>(&self, reader: R, sink: Option<&mut dyn ProgressSink>) -> ExtractionResult {
        self.guarded(move || self.run_reader(reader, Reporter::new(sink, self.config.pacing())))
    }

    /// Engine gate, priority targets and deep scan over an opened archive.
    pub fn extract_from_entries<E>(&self, entries: &mut E, sink: Option<&mut dyn ProgressSink>) -> ExtractionResult
    where
        E: EntryReader + ?Sized,
    {
        self.guarded(move || self.inspect(entries, &mut Reporter::new(sink, self.config.pacing())))
    }

    pub fn probe<P: AsRef<Path>>(&self, path: P) -> Result<EngineProbe, ExtractError> {
        let archive = ApkArchive::open(path)?;
        let names = archive.entry_names();
        let indicator = self.detector.detect(names);

        Ok(EngineProbe {
            is_target_engine: indicator.is_some(),
            indicator,
            present_targets: present_targets(names).map(|t| t.path).collect(),
            entry_count: names.len(),
        })
    }

    fn run_reader<R: Read + Seek>(&self, mut reader: R, mut reporter: Reporter<'_>) -> ExtractionResult {
        self.transition(ExtractionState::Validating);
        reporter.emit(ProgressStage::Validating, "Validating APK file...", VALIDATING_PERCENT, None);
        if let Err(err) = check_signature(&mut reader) {
            return self.abort(err);
        }

        reporter.emit(ProgressStage::Opening, "Opening APK archive...", OPENING_PERCENT, None);
        match ApkArchive::new(reader) {
            Ok(mut archive) => self.inspect(&mut archive, &mut reporter),
            Err(err) => self.abort(err),
        }
    }

    fn run_path(&self, path: &Path, mut reporter: Reporter<'_>) -> ExtractionResult {
        debug!("Extracting Unity version from {}", path.display());

        self.transition(ExtractionState::Validating);
        reporter.emit(ProgressStage::Validating, "Validating APK file...", VALIDATING_PERCENT, None);
        let reader = match ApkArchive::validate(path) {
            Ok(reader) => reader,
            Err(err) => return self.abort(err),
        };

        reporter.emit(ProgressStage::Opening, "Opening APK archive...", OPENING_PERCENT, None);
        let mut archive = match ApkArchive::new(reader) {
            Ok(archive) => archive,
            Err(err) => return self.abort(err),
        };

        self.inspect(&mut archive, &mut reporter)
    }

    fn inspect<E>(&self, entries: &mut E, reporter: &mut Reporter<'_>) -> ExtractionResult
    where
        E: EntryReader + ?Sized,
    {
        self.transition(ExtractionState::Opened);
        let mut result = ExtractionResult::pending();

        reporter.emit(ProgressStage::CheckingEngine, "Checking for Unity signatures...", ENGINE_CHECK_PERCENT, None);
        match self.detector.detect(entries.entry_names()) {
            Some(indicator) => {
                result.is_target_engine = true;
                result.note(format!("Found Unity indicator: {}", indicator));
            }
            None => {
                self.transition(ExtractionState::NotEngine);
                info!("No Unity indicator among {} entries", entries.len());
                return result.fail(ExtractError::NotTargetEngine);
            }
        }

        self.transition(ExtractionState::TargetScanning);
        reporter.emit(ProgressStage::ScanningFiles, "Scanning file structure...", STRUCTURE_SCAN_PERCENT, None);
        let outcome = PriorityScanner::new(&self.matcher).scan(entries, reporter);
        for warning in &outcome.warnings {
            result.note(warning.clone());
        }
        if let Some(hit) = outcome.hit {
            return self.finish(result, hit, reporter);
        }

        self.transition(ExtractionState::DeepScanning);
        let deep = DeepScanner::new(&self.matcher).with_limit(self.config.deep_scan_limit);
        if let Some(hit) = deep.scan(entries, reporter) {
            return self.finish(result, hit, reporter);
        }

        self.transition(ExtractionState::Undetermined);
        reporter.emit(ProgressStage::Finalizing, "Version not found", FINAL_PERCENT, None);
        info!("Unity build confirmed but no version string found");
        result.fail(ExtractError::VersionUndetermined)
    }

    fn finish(&self, mut result: ExtractionResult, hit: VersionHit, reporter: &mut Reporter<'_>) -> ExtractionResult {
        self.transition(ExtractionState::Found);
        reporter.emit(ProgressStage::Finalizing, "Version found!", FINAL_PERCENT, None);
        info!("Unity {} found in {}", hit.version, hit.source_entry);

        result.note(format!(
            "Matched {} in {} at offset 0x{:x} ({} search)",
            hit.version, hit.source_entry, hit.offset, hit.tier
        ));
        result.found(hit.version, &hit.source_entry, hit.tier)
    }

    fn abort(&self, err: ExtractError) -> ExtractionResult {
        self.transition(ExtractionState::Invalid);
        info!("{}", err);
        ExtractionResult::failed(err)
    }

    fn transition(&self, state: ExtractionState) {
        debug!("-> {}", state);
    }

    fn guarded<F>(&self, run: F) -> ExtractionResult
    where
        F: FnOnce() -> ExtractionResult,
    {
        panic::catch_unwind(AssertUnwindSafe(run)).unwrap_or_else(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "extraction panicked".to_string());
            ExtractionResult::failed(ExtractError::Unexpected(reason))
        })
    }
}

impl Default for UnityVersionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressEvent;
    use crate::testing::{noise, with_payload, ApkBuilder, MemoryArchive};
    use crate::version::MatchTier;
    use std::io::Cursor;

    fn collect(extractor: &UnityVersionExtractor, bytes: Vec<u8>) -> (ExtractionResult, Vec<ProgressEvent>) {
        let mut events = Vec::new();
        let result = {
            let mut sink = |e: &ProgressEvent| events.push(e.clone());
            extractor.extract_from_reader(Cursor::new(bytes), Some(&mut sink))
        };
        (result, events)
    }

    #[test]
    fn test_not_an_archive() {
        let (result, events) = collect(&UnityVersionExtractor::new(), b"this is a text file".to_vec());
        assert!(!result.success);
        assert!(!result.is_target_engine);
        assert!(matches!(result.error, Some(ExtractError::InvalidArchive(_))));
        assert!(!result.error_message().unwrap().is_empty());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_corrupted_archive() {
        let mut bytes = ApkBuilder::new().entry("assets/bin/Data/level0", &noise(256)).build();
        bytes.truncate(40);
        let (result, events) = collect(&UnityVersionExtractor::new(), bytes);
        assert!(matches!(result.error, Some(ExtractError::Corrupted(_))));
        assert_eq!(events.last().unwrap().stage, ProgressStage::Opening);
    }

    #[test]
    fn test_non_unity_archive_reads_nothing() {
        let mut archive = MemoryArchive::new()
            .with_entry("AndroidManifest.xml", b"manifest")
            .with_entry("classes.dex", b"dex\n035")
            .with_entry("lib/arm64-v8a/libflutter.so", &with_payload(b"Unity 2021.3.1f1", 32));

        let result = UnityVersionExtractor::new().extract_from_entries(&mut archive, None);
        assert!(!result.is_target_engine);
        assert!(!result.success);
        assert_eq!(result.error, Some(ExtractError::NotTargetEngine));
        assert!(archive.reads.is_empty());
    }

    #[test]
    fn test_finds_version_in_priority_target() {
        let bytes = ApkBuilder::new()
            .entry("AndroidManifest.xml", b"manifest")
            .entry("assets/bin/Data/globalgamemanagers", &with_payload(b"Unity\x00\x002021.3.1f1\x00", 2048))
            .entry("lib/arm64-v8a/libunity.so", &with_payload(b"Unity 2019.4.40f1", 64))
            .build();

        let (result, events) = collect(&UnityVersionExtractor::new(), bytes);
        assert!(result.success);
        assert!(result.is_target_engine);
        assert_eq!(result.version.as_deref(), Some("2021.3.1f1"));
        assert_eq!(result.source_entry.as_deref(), Some("assets/bin/Data/globalgamemanagers"));
        assert_eq!(result.tier, Some(MatchTier::Anchored));
        assert!(result.error.is_none());
        assert_eq!(result.details[0], "Found Unity indicator: assets/bin/Data/");

        let last = events.last().unwrap();
        assert_eq!((last.stage, last.percent, last.message.as_str()), (ProgressStage::Finalizing, 100, "Version found!"));
    }

    #[test]
    fn test_falls_back_to_deep_scan() {
        let bytes = ApkBuilder::new()
            .directory("assets/bin/Data/")
            .entry("assets/bin/Data/globalgamemanagers", &noise(512))
            .entry("assets/bin/Data/sharedassets0.assets", &noise(512))
            .entry("assets/bin/Data/sharedassets1.assets", &with_payload(b"2020.3.48f1\x00", 512))
            .build();

        let (result, events) = collect(&UnityVersionExtractor::new(), bytes);
        assert!(result.success);
        assert_eq!(result.source_entry.as_deref(), Some("assets/bin/Data/sharedassets1.assets"));
        assert!(events.iter().any(|e| e.stage == ProgressStage::DeepScan && e.percent == 75));
    }

    #[test]
    fn test_version_undetermined() {
        let mut builder = ApkBuilder::new().entry("lib/armeabi-v7a/libunity.so", &noise(1024));
        for i in 0..25 {
            builder = builder.entry(&format!("assets/bin/Data/{:02}.resS", i), &noise(128));
        }

        let (result, events) = collect(&UnityVersionExtractor::new(), builder.build());
        assert!(result.is_target_engine);
        assert!(!result.success);
        assert!(result.version.is_none());
        assert!(result.is_undetermined());

        let deep_entries = events.iter().filter(|e| e.stage == ProgressStage::DeepScan && e.entry_name.is_some()).count();
        assert_eq!(deep_entries, 20);
        assert_eq!(events.last().unwrap().message, "Version not found");
    }

    #[test]
    fn test_read_failures_land_in_details() {
        let mut archive = MemoryArchive::new()
            .with_failing_entry("assets/bin/Data/level0")
            .with_entry("assets/bin/Data/mainData", &with_payload(b"Unity 5.6.4p2", 64));

        let result = UnityVersionExtractor::new().extract_from_entries(&mut archive, None);
        assert!(result.success);
        assert_eq!(result.version.as_deref(), Some("5.6.4p2"));
        assert!(result.details.contains(&"Could not read level0: invalid checksum".to_string()));
    }

    #[test]
    fn test_percent_is_monotonic() {
        let mut builder = ApkBuilder::new();
        for target in crate::engine::TARGET_ENTRIES {
            builder = builder.entry(target.path, &noise(64));
        }
        for i in 0..30 {
            builder = builder.entry(&format!("assets/bin/Data/extra{}", i), &noise(64));
        }

        let (_, events) = collect(&UnityVersionExtractor::new(), builder.build());
        let percents: Vec<u8> = events.iter().map(|e| e.percent).collect();
        assert!(percents.windows(2).all(|w| w[0] <= w[1]), "{:?}", percents);
        assert_eq!(percents.first(), Some(&5));
        assert_eq!(percents.last(), Some(&100));
    }

    #[test]
    fn test_result_is_deterministic_and_sink_independent() {
        let bytes = ApkBuilder::new()
            .entry("assets/bin/Data/level0", &noise(128))
            .entry("assets/bin/Data/Resources/unity_builtin_extra", &with_payload(b"Unity 2018.4.36f1", 300))
            .build();

        let extractor = UnityVersionExtractor::new();
        let (with_sink, _) = collect(&extractor, bytes.clone());
        let without_sink = extractor.extract_from_reader(Cursor::new(bytes.clone()), None);
        let again = extractor.extract_from_reader(Cursor::new(bytes), None);

        assert_eq!(with_sink, without_sink);
        assert_eq!(without_sink, again);
        assert_eq!(again.version.as_deref(), Some("2018.4.36f1"));
    }

    #[test]
    fn test_extract_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.apk");
        ApkBuilder::new()
            .entry("assets/bin/Data/data.unity3d", &with_payload(b"UnityFS\x00\x00\x00\x00\x075.x.x\x002022.3.10f1\x00", 128))
            .write_to(&path);

        let result = UnityVersionExtractor::new().extract(&path);
        assert_eq!(result.version.as_deref(), Some("2022.3.10f1"));
    }

    #[test]
    fn test_extract_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = UnityVersionExtractor::new().extract(dir.path().join("nope.apk"));
        assert!(!result.success);
        assert!(!result.is_target_engine);
        assert!(result.error.is_some());
    }

    #[test]
    fn test_extract_directory_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let result = UnityVersionExtractor::new().extract(dir.path());
        assert!(!result.success);
        assert!(matches!(result.error, Some(ExtractError::InvalidArchive(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_unreadable_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locked.apk");
        ApkBuilder::new().entry("assets/bin/Data/level0", b"level").write_to(&path);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores file modes
        if std::fs::File::open(&path).is_ok() {
            return;
        }

        let result = UnityVersionExtractor::new().extract(&path);
        assert!(!result.success);
        assert!(!result.is_target_engine);
        assert!(matches!(result.error, Some(ExtractError::PermissionDenied(_))));
        assert_eq!(result.error_message().as_deref(), Some("Permission denied - cannot access the file"));
    }

    #[test]
    fn test_deep_scan_window_includes_directory_and_targets() {
        let mut builder = ApkBuilder::new()
            .directory("assets/bin/Data/")
            .entry("assets/bin/Data/globalgamemanagers", &noise(256));
        for i in 0..19 {
            builder = builder.entry(&format!("assets/bin/Data/a{:02}", i), &noise(128));
        }
        builder = builder.entry("assets/bin/Data/a19", &with_payload(b"Unity 2021.3.1f1", 128));

        let (result, _) = collect(&UnityVersionExtractor::new(), builder.build());
        assert!(result.is_target_engine);
        assert!(result.is_undetermined());
        assert!(result.source_entry.is_none());
    }

    #[test]
    fn test_probe_reports_targets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.apk");
        ApkBuilder::new()
            .entry("lib/arm64-v8a/libunity.so", b"\x7fELF")
            .entry("assets/bin/Data/level0", b"level")
            .write_to(&path);

        let probe = UnityVersionExtractor::new().probe(&path).unwrap();
        assert!(probe.is_target_engine);
        assert_eq!(probe.indicator, Some("assets/bin/Data/"));
        assert_eq!(probe.present_targets, vec!["assets/bin/Data/level0", "lib/arm64-v8a/libunity.so"]);
        assert_eq!(probe.entry_count, 2);
    }

    #[test]
    fn test_progress_over_channel_from_worker_thread() {
        let bytes = ApkBuilder::new()
            .entry("assets/bin/Data/globalgamemanagers", &with_payload(b"Unity 2021.3.1f1", 64))
            .build();

        let (mut sink, receiver) = crate::progress::channel(2);
        let worker = std::thread::spawn(move || {
            UnityVersionExtractor::new().extract_from_reader(Cursor::new(bytes), Some(&mut sink))
        });

        let stages: Vec<ProgressStage> = receiver.iter().map(|e| e.stage).collect();
        let result = worker.join().unwrap();

        assert!(result.success);
        assert_eq!(stages.first(), Some(&ProgressStage::Validating));
        assert_eq!(stages.last(), Some(&ProgressStage::Finalizing));
    }
}
