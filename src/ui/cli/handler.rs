// Sat Oct 17 2026 - Alex

use super::args::{Args, Command, DetectArgs, ScanArgs};
use crate::extractor::UnityVersionExtractor;
use crate::output::{JsonSerializer, ProbeReport, ScanReport};
use crate::result::ExtractionResult;
use crate::ui::banner::Banner;
use crate::ui::display::ResultRenderer;
use crate::ui::progress::ProgressManager;
use log::{debug, info};
use rayon::prelude::*;
use std::path::PathBuf;

pub struct CommandHandler {
    renderer: ResultRenderer,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            renderer: ResultRenderer::new(),
        }
    }

    /// Returns whether every archive produced the outcome the command looks for.
    pub fn execute(&self, args: Args) -> anyhow::Result<bool> {
        self.setup_logging(&args);

        if args.no_color {
            colored::control::set_override(false);
        }

        let json = match &args.command {
            Command::Scan(scan) => scan.json,
            Command::Detect(detect) => detect.json,
        };
        if !args.quiet && !json {
            Banner::default_banner().with_color(!args.no_color).print();
        }

        match args.command {
            Command::Scan(scan_args) => self.handle_scan(scan_args, args.quiet),
            Command::Detect(detect_args) => self.handle_detect(detect_args, args.quiet),
        }
    }

    fn setup_logging(&self, args: &Args) {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };

        let installed = env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init();

        if installed.is_err() {
            debug!("Logger already initialised");
        }
    }

    fn handle_scan(&self, args: ScanArgs, quiet: bool) -> anyhow::Result<bool> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let config = args.to_config();
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        let extractor = UnityVersionExtractor::with_config(config);

        let progress = if quiet || args.json || args.no_progress {
            ProgressManager::hidden()
        } else {
            ProgressManager::new()
        };

        let threads = args.thread_count();
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
        info!("Scanning {} archive(s) on {} thread(s)", args.apks.len(), threads);
        debug!("Extractor config: {:?}", extractor.config());

        let results: Vec<(PathBuf, ExtractionResult)> = pool.install(|| {
            args.apks
                .par_iter()
                .map(|path| {
                    let mut bar = progress.archive_bar(path);
                    let result = extractor.extract_with_progress(path, &mut bar);
                    bar.finish(&result);
                    (path.clone(), result)
                })
                .collect()
        });

        let report = ScanReport::new(results);

        if let Some(output) = &args.output {
            JsonSerializer::new().serialize_to_file(&report, output)?;
            info!("Report written to {}", output.display());
        }

        if args.json {
            println!("{}", JsonSerializer::new().serialize(&report)?);
        } else if !quiet {
            for archive in &report.archives {
                println!("{}", self.renderer.render_result(&archive.path, &archive.result));
            }
            println!();
            println!("{}", self.renderer.render_summary(&report));
        }

        Ok(report.all_succeeded())
    }

    fn handle_detect(&self, args: DetectArgs, quiet: bool) -> anyhow::Result<bool> {
        let extractor = UnityVersionExtractor::new();

        let reports: Vec<ProbeReport> = args
            .apks
            .iter()
            .map(|path| ProbeReport::new(path, extractor.probe(path)))
            .collect();

        if args.json {
            println!("{}", JsonSerializer::new().serialize(&reports)?);
        } else if !quiet {
            for report in &reports {
                println!("{}", self.renderer.render_probe(report));
            }
        }

        Ok(reports.iter().all(ProbeReport::is_target_engine))
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
