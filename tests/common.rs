#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworktime::config::Config;
use std::fs;
use std::path::{Path, PathBuf};

pub fn rwt() -> Command {
    cargo_bin_cmd!("rworktime")
}

/// Defaults, but without the pause before copying the original.
pub fn fast_config() -> Config {
    Config {
        copy_delay_ms: 0,
        ..Config::default()
    }
}

/// Write `fast_config()` into `dir` and return its path (for `--config`).
pub fn write_fast_config(dir: &Path) -> PathBuf {
    let path = dir.join("rworktime.conf");
    fast_config().save(&path).expect("save config");
    path
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path
}

/// Two employees, three days: a normal day, a blank day for Bob and an
/// overnight shift for Alice.
pub const SAMPLE_CSV: &str = "\
Alice,,Bob,
09:00,17:30,08:15,16:45
0800,1200,,
22:00,06:00,9.5,18
";

/// The single archive subfolder created by one run.
pub fn only_archive_run(dir: &Path) -> PathBuf {
    let mut runs: Vec<PathBuf> = fs::read_dir(dir.join("Archive"))
        .expect("archive folder")
        .filter_map(Result::ok)
        .map(|e| e.path())
        .collect();
    assert_eq!(runs.len(), 1, "expected exactly one archived run");
    runs.remove(0)
}
