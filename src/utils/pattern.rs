//! Shell-style file name patterns (`*`, `?`) compiled to anchored regexes.

use crate::errors::{AppError, AppResult};
use regex::Regex;

pub struct FilePattern {
    raw: String,
    re: Regex,
}

impl FilePattern {
    pub fn new(pattern: &str) -> AppResult<Self> {
        let mut src = String::from(if cfg!(windows) { "(?i)^" } else { "^" });
        for c in pattern.chars() {
            match c {
                '*' => src.push_str(".*"),
                '?' => src.push('.'),
                other => src.push_str(&regex::escape(&other.to_string())),
            }
        }
        src.push('$');

        let re = Regex::new(&src)
            .map_err(|e| AppError::Config(format!("invalid file pattern '{pattern}': {e}")))?;
        Ok(Self {
            raw: pattern.to_string(),
            re,
        })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.re.is_match(file_name)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}
