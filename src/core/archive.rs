//! File-system steps of a run: find the input, create the archive folder,
//! write the report, copy the original.

use crate::config::Config;
use crate::core::runlog::RunLog;
use crate::errors::{AppError, AppResult};
use crate::utils::path::file_name;
use crate::utils::pattern::FilePattern;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Finds the input file in `dir`: patterns are tried in order, matches of one
/// pattern are sorted by name, and the first overall match wins.
pub fn locate_input(dir: &Path, patterns: &[String], log: &mut RunLog) -> AppResult<PathBuf> {
    log.step("🔍 STEP 1: SEARCHING FOR FILE");

    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();

    let mut found: Vec<String> = Vec::new();
    for raw in patterns {
        let pattern = FilePattern::new(raw)?;
        let hits: Vec<&String> = names.iter().filter(|n| pattern.matches(n)).collect();
        log.info("file", format!("Pattern {}: {} found", pattern.as_str(), hits.len()));
        for n in hits {
            if !found.contains(n) {
                found.push(n.clone());
            }
        }
    }

    if found.is_empty() {
        log.info("file", "📁 Files in folder:");
        for n in &names {
            log.info("file", format!("  - {n}"));
        }
        return Err(AppError::NoInputFileFound {
            dir: dir.to_path_buf(),
            patterns: patterns.to_vec(),
        });
    }

    if found.len() > 1 {
        log.info("file", "📁 Multiple files found:");
        for (i, n) in found.iter().enumerate() {
            log.info("file", format!("  {}. {}", i + 1, n));
        }
        log.info("file", format!("✅ Taking first file: {}", found[0]));
    } else {
        log.info("file", format!("✅ Found: {}", found[0]));
    }

    Ok(dir.join(&found[0]))
}

/// Creates `<dir>/<archive_folder_name>/<stamp>` and returns its path.
pub fn create_archive_folder(
    dir: &Path,
    cfg: &Config,
    stamp: &str,
    log: &mut RunLog,
) -> AppResult<PathBuf> {
    log.step("📁 STEP 5: CREATING ARCHIVE FOLDER");

    let main = dir.join(&cfg.archive_folder_name);
    if main.is_dir() {
        log.info("archive", format!("📁 Main archive exists: {}", main.display()));
    } else {
        fs::create_dir_all(&main)
            .map_err(|e| AppError::ArchiveCreation(format!("{}: {e}", main.display())))?;
        log.info("archive", format!("📁 Main archive created: {}", main.display()));
    }

    let sub = main.join(stamp);
    fs::create_dir_all(&sub)
        .map_err(|e| AppError::ArchiveCreation(format!("{}: {e}", sub.display())))?;
    log.info("archive", format!("📁 Subfolder created: {}", sub.display()));

    Ok(sub)
}

pub fn write_report(
    folder: &Path,
    cfg: &Config,
    text: &str,
    log: &mut RunLog,
) -> AppResult<PathBuf> {
    log.step("💾 STEP 6: SAVING RESULTS");

    let path = folder.join(cfg.result_file_name());
    log.info("save", format!("Creating: {}", path.display()));
    fs::write(&path, text)
        .map_err(|e| AppError::ReportWrite(format!("{}: {e}", path.display())))?;
    log.info("save", format!("✅ Results saved: {}", cfg.result_file_name()));

    Ok(path)
}

/// Copies the original next to the report, keeping its name.
///
/// Waits `delay` first; spreadsheet programs sometimes still hold the file.
pub fn copy_original(
    original: &Path,
    folder: &Path,
    delay: Duration,
    log: &mut RunLog,
) -> AppResult<PathBuf> {
    log.step("📦 STEP 7: COPYING ORIGINAL FILE");

    if !delay.is_zero() {
        thread::sleep(delay);
    }

    let name = file_name(original);
    let target = folder.join(&name);
    fs::copy(original, &target).map_err(|e| AppError::OriginalCopy(e.to_string()))?;
    log.info("archive", format!("✅ Original copied: {name}"));
    log.info("archive", format!("→ Destination: {}", target.display()));

    Ok(target)
}
