use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Write;

const FALLBACK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// True when `fmt` parses and can actually render a naive timestamp.
///
/// Timezone specifiers (`%Z`, `%z`, `%:z`, `%+`) parse fine but fail at
/// render time, since a `NaiveDateTime` carries no offset.
pub fn is_valid_format(fmt: &str) -> bool {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .is_some_and(|sample| try_format(&sample, fmt).is_some())
}

/// Formats `dt`; an unusable format string falls back to ISO-like output
/// instead of panicking inside `Display`.
pub fn format_datetime(dt: &NaiveDateTime, fmt: &str) -> String {
    try_format(dt, fmt)
        .or_else(|| try_format(dt, FALLBACK_FORMAT))
        .unwrap_or_default()
}

fn try_format(dt: &NaiveDateTime, fmt: &str) -> Option<String> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut out = String::new();
    write!(out, "{}", dt.format(fmt)).ok()?;
    Some(out)
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
