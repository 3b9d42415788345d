//! Hour conversions: decimal hours to h/m/s, minutes, seconds and their text forms.

/// Splits decimal hours into whole hours, minutes and seconds (two decimals).
///
/// Works on centiseconds so carries (59.999s → next minute) happen in one place.
pub fn hours_to_hms(hours: f64) -> (u64, u32, f64) {
    let centis = (hours.max(0.0) * 360_000.0).round() as u64;
    let h = centis / 360_000;
    let m = ((centis % 360_000) / 6_000) as u32;
    let s = (centis % 6_000) as f64 / 100.0;
    (h, m, s)
}

/// `8h30m00s`, or `8h30m05.5s` when the seconds are not whole.
pub fn format_hms(hours: f64) -> String {
    let (h, m, s) = hours_to_hms(hours);
    format!("{}h{:02}m{}s", h, m, format_clock_seconds(s))
}

pub fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

pub fn hours_to_seconds(hours: f64) -> f64 {
    hours * 3600.0
}

/// Whole seconds print as an integer, anything else with at most two decimals.
pub fn format_seconds(secs: f64) -> String {
    if (secs - secs.round()).abs() < 0.001 {
        format!("{}", secs.round() as i64)
    } else {
        trim_decimals(&format!("{:.2}", secs))
    }
}

fn format_clock_seconds(s: f64) -> String {
    if (s - s.round()).abs() < 0.001 {
        format!("{:02}", s.round() as u32)
    } else {
        trim_decimals(&format!("{:05.2}", s))
    }
}

fn trim_decimals(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
