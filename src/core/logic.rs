use crate::config::Config;
use crate::core::archive::{copy_original, create_archive_folder, locate_input, write_report};
use crate::core::processor;
use crate::core::runlog::{Level, RunLog};
use crate::errors::AppResult;
use crate::input::read_table;
use crate::models::TimesheetResult;
use crate::report::ReportFormatter;
use crate::utils::date::{format_datetime, now};
use crate::utils::path::file_name;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Working directory: searched for the input, holds the archive.
    pub dir: PathBuf,
    /// Explicit input file, bypassing the pattern search.
    pub file: Option<PathBuf>,
    pub copy_original: bool,
}

impl RunOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file: None,
            copy_original: true,
        }
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub source: PathBuf,
    pub archive_folder: PathBuf,
    pub report_path: PathBuf,
    pub report: String,
    pub result: TimesheetResult,
    /// `None` when copying was skipped or failed; neither fails the run.
    pub copied_original: Option<PathBuf>,
}

/// A finished run: its outcome, its log and where that log was written.
#[derive(Debug)]
pub struct RunReport {
    pub outcome: AppResult<RunOutcome>,
    pub log: RunLog,
    pub log_path: Option<PathBuf>,
}

pub struct Core;

impl Core {
    /// Runs the whole pipeline and always persists the run log, next to the
    /// report when the archive exists, otherwise in the working directory.
    pub fn execute(cfg: &Config, opts: &RunOptions) -> RunReport {
        let mut log = RunLog::new();
        let started = now();
        let mut archive: Option<PathBuf> = None;

        let outcome = Self::run(cfg, opts, &started, &mut log, &mut archive);
        match &outcome {
            Ok(out) => {
                log.mark_success();
                Self::log_completion(cfg, out, &mut log);
            }
            Err(e) => log.fail(e),
        }

        let log_dir = archive.as_deref().unwrap_or(opts.dir.as_path());
        let log_path = log.save(
            &log_dir.join(cfg.log_file_name()),
            &opts.dir,
            &cfg.log_date_format,
            &cfg.result_date_format,
        );

        RunReport {
            outcome,
            log,
            log_path,
        }
    }

    fn run(
        cfg: &Config,
        opts: &RunOptions,
        started: &NaiveDateTime,
        log: &mut RunLog,
        archive: &mut Option<PathBuf>,
    ) -> AppResult<RunOutcome> {
        let line = "=".repeat(100);
        log.info("system", line.clone());
        log.info("system", "🚀 WORKING TIME TRACKER STARTED");
        log.info("system", format!("  Version: {}", env!("CARGO_PKG_VERSION")));
        log.info(
            "system",
            format!("  Timestamp: {}", format_datetime(started, &cfg.folder_date_format)),
        );
        log.info("system", line);

        // 1️⃣ find input
        let source = match &opts.file {
            Some(f) => {
                log.step("🔍 STEP 1: INPUT FILE GIVEN");
                log.info("file", format!("✅ Using: {}", f.display()));
                f.clone()
            }
            None => locate_input(&opts.dir, &cfg.file_patterns, log)?,
        };

        // 2️⃣ decode
        log.step("📄 STEP 2: READING FILE");
        log.info("file", format!("  File: {}", source.display()));
        let table = read_table(&source)?;
        log.info(
            "file",
            format!("  Rows: {}, Columns: {}", table.row_count(), table.width()),
        );

        // 3️⃣ + 4️⃣ employees and hours
        let result = processor::process(&table, cfg.hours_range(), log)?;

        // 5️⃣ archive folder
        let stamp = format_datetime(started, &cfg.folder_date_format);
        let folder = create_archive_folder(&opts.dir, cfg, &stamp, log)?;
        *archive = Some(folder.clone());

        // 6️⃣ report
        let report = ReportFormatter::new(cfg).format(&result, &file_name(&source), &now());
        let report_path = write_report(&folder, cfg, &report, log)?;

        // 7️⃣ original copy, failure only warns
        let copied_original = if opts.copy_original {
            Self::copy_original_logged(&source, &folder, cfg, log)
        } else {
            None
        };

        Ok(RunOutcome {
            source,
            archive_folder: folder,
            report_path,
            report,
            result,
            copied_original,
        })
    }

    fn copy_original_logged(
        source: &Path,
        folder: &Path,
        cfg: &Config,
        log: &mut RunLog,
    ) -> Option<PathBuf> {
        match copy_original(source, folder, Duration::from_millis(cfg.copy_delay_ms), log) {
            Ok(p) => Some(p),
            Err(e) => {
                let level = if e.is_fatal() { Level::Error } else { Level::Warn };
                log.push(level, "archive", format!("⚠️ {e}"));
                log.info("hint", "📌 Please check if the file is open in another program.");
                None
            }
        }
    }

    fn log_completion(cfg: &Config, out: &RunOutcome, log: &mut RunLog) {
        let line = "=".repeat(100);
        log.info("system", line.clone());
        log.info("system", "✨ ALL STEPS COMPLETED SUCCESSFULLY");
        log.info(
            "system",
            format!("  📁 Archive folder: {}", out.archive_folder.display()),
        );
        log.info("system", format!("  📄 Result: {}", cfg.result_file_name()));
        log.info("system", format!("  📋 Log: {}", cfg.log_file_name()));
        log.info("system", format!("  📦 Original: {}", file_name(&out.source)));
        log.info("system", line);
    }
}
