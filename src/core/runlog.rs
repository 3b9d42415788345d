//! Run context: the ordered log of one processing run plus its outcome.
//!
//! Every entry is also forwarded to `tracing`, so `RUST_LOG=debug` shows the
//! same events live on stderr while the run log is persisted as a text file.

use crate::errors::AppError;
use crate::utils::date::{format_datetime, now};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

pub const EMERGENCY_LOG_FILE: &str = "emergency_log.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: NaiveDateTime,
    pub level: Level,
    pub target: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct RunLog {
    entries: Vec<LogEntry>,
    successful: bool,
    error: Option<String>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: Level, target: &'static str, message: impl Into<String>) {
        let message = message.into();
        match level {
            Level::Debug => tracing::debug!(step = target, "{}", message),
            Level::Info => tracing::info!(step = target, "{}", message),
            Level::Warn => tracing::warn!(step = target, "{}", message),
            Level::Error => tracing::error!(step = target, "{}", message),
        }
        self.entries.push(LogEntry {
            at: now(),
            level,
            target,
            message,
        });
    }

    pub fn debug(&mut self, target: &'static str, message: impl Into<String>) {
        self.push(Level::Debug, target, message);
    }

    pub fn info(&mut self, target: &'static str, message: impl Into<String>) {
        self.push(Level::Info, target, message);
    }

    pub fn warn(&mut self, target: &'static str, message: impl Into<String>) {
        self.push(Level::Warn, target, message);
    }

    pub fn error(&mut self, target: &'static str, message: impl Into<String>) {
        self.push(Level::Error, target, message);
    }

    /// Section header: a rule, the title, a rule.
    pub fn step(&mut self, title: &str) {
        let line = "-".repeat(60);
        self.info("step", line.clone());
        self.info("step", title.to_string());
        self.info("step", line);
    }

    /// Records the top-level failure; the run is no longer successful.
    pub fn fail(&mut self, err: &AppError) {
        let msg = err.to_string();
        self.error("system", format!("❌ ERROR: {msg}"));
        self.error = Some(msg);
        self.successful = false;
    }

    pub fn mark_success(&mut self) {
        self.successful = true;
    }

    pub fn is_successful(&self) -> bool {
        self.successful
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn count(&self, level: Level) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    /// Full text of the log file: status header followed by every entry.
    pub fn render(&self, created: &NaiveDateTime, log_fmt: &str, result_fmt: &str) -> String {
        let mut out = String::new();
        out.push_str(&"=".repeat(100));
        out.push('\n');
        out.push_str("WORKING TIME TRACKER - COMPLETE LOG\n");
        out.push_str(&format!("Created: {}\n", format_datetime(created, result_fmt)));
        out.push_str(&format!(
            "Status: {}\n",
            if self.successful {
                "✅ SUCCESSFUL"
            } else {
                "❌ FAILED"
            }
        ));
        if let Some(err) = &self.error {
            out.push_str(&format!("Error: {err}\n"));
        }
        out.push_str(&"=".repeat(100));
        out.push_str("\n\n");

        for e in &self.entries {
            out.push_str(&format!(
                "[{}] [{:<5}] [{}] {}\n",
                format_datetime(&e.at, log_fmt),
                e.level.as_str(),
                e.target,
                e.message
            ));
        }
        out
    }

    /// Writes the log to `path`; if that fails, to `emergency_log.txt` in
    /// `fallback_dir`. Returns where it landed, if anywhere.
    pub fn save(
        &self,
        path: &Path,
        fallback_dir: &Path,
        log_fmt: &str,
        result_fmt: &str,
    ) -> Option<PathBuf> {
        let created = now();
        let text = self.render(&created, log_fmt, result_fmt);

        match fs::write(path, &text) {
            Ok(()) => Some(path.to_path_buf()),
            Err(e) => {
                tracing::error!("Failed to write run log {}: {}", path.display(), e);
                let emergency = fallback_dir.join(EMERGENCY_LOG_FILE);
                let body = format!(
                    "Emergency log - {}\nError: {}\n{}",
                    format_datetime(&created, log_fmt),
                    AppError::LogWrite(e.to_string()),
                    text
                );
                fs::write(&emergency, body).ok().map(|_| emergency)
            }
        }
    }
}
