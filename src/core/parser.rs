//! Time-of-day parser for the heterogeneous notations found in timesheets.
//!
//! A cell is normalised once and then offered to an ordered list of rules;
//! the first rule that yields a value wins. The order is part of the contract:
//! `1705.0` must be read as 17:05 before anyone tries it as a decimal number,
//! and `9.5` must be read as 9h30m before anyone strips its dot into `95`.
//!
//! Parsing never fails loudly: anything that no rule accepts is `None`.

use crate::models::{ParsedTime, RawCell};
use serde::Serialize;
use std::fmt;

/// Spellings that mean "no value" rather than "bad value".
const NO_DATA: [&str; 4] = ["nan", "none", "null", "n/a"];

/// Which rule resolved a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notation {
    /// `H:M:S` or `H:M`
    Colon,
    /// `1705.0` / `905.0`: a spreadsheet integer read back as float
    FixedWidthDotZero,
    /// `9.5` / `9,5`: decimal hours
    Decimal,
    /// `170500`, `1705`, `905`, `9` after removing separators
    DigitRun,
    /// anything else `f64` accepts, in `[0, 24]`
    RawFloat,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Notation::Colon => "colon",
            Notation::FixedWidthDotZero => "fixed-width .0",
            Notation::Decimal => "decimal",
            Notation::DigitRun => "digit run",
            Notation::RawFloat => "raw float",
        };
        f.write_str(s)
    }
}

/// A trimmed, comma-normalised cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// A decimal comma was rewritten to a dot.
    pub comma_decimal: bool,
}

type Rule = fn(&Normalized) -> Option<ParsedTime>;

/// Resolution order. Do not reorder.
const RULES: [(Notation, Rule); 5] = [
    (Notation::Colon, colon),
    (Notation::FixedWidthDotZero, fixed_width_dot_zero),
    (Notation::Decimal, decimal),
    (Notation::DigitRun, digit_run),
    (Notation::RawFloat, raw_float),
];

pub fn parse(raw: &RawCell) -> Option<ParsedTime> {
    parse_with_notation(raw).map(|(t, _)| t)
}

pub fn parse_str(raw: &str) -> Option<ParsedTime> {
    parse_with_notation(&RawCell::text(raw)).map(|(t, _)| t)
}

pub fn parse_with_notation(raw: &RawCell) -> Option<(ParsedTime, Notation)> {
    let normalized = normalize(raw)?;
    RULES
        .iter()
        .find_map(|(notation, rule)| rule(&normalized).map(|t| (t, *notation)))
}

/// Trims the cell, rejects empty and "no data" values, and turns a lone
/// decimal comma convention (`9,5`) into a dot.
pub fn normalize(raw: &RawCell) -> Option<Normalized> {
    let text = raw.trimmed()?;
    if NO_DATA.iter().any(|n| text.eq_ignore_ascii_case(n)) {
        return None;
    }

    if text.contains(',') && !text.contains('.') {
        return Some(Normalized {
            text: text.replace(',', "."),
            comma_decimal: true,
        });
    }

    Some(Normalized {
        text,
        comma_decimal: false,
    })
}

// -----------------------------
// Rules
// -----------------------------

fn colon(n: &Normalized) -> Option<ParsedTime> {
    if !n.text.contains(':') {
        return None;
    }

    let parts: Vec<&str> = n.text.split(':').collect();
    match parts.as_slice() {
        [h, m, s] => ParsedTime::from_hms(number(h)?, number(m)?, number(s)?),
        [h, m] => ParsedTime::from_hms(number(h)?, number(m)?, 0),
        _ => None,
    }
}

fn fixed_width_dot_zero(n: &Normalized) -> Option<ParsedTime> {
    let base = n.text.strip_suffix(".0")?;
    if !is_digits(base) {
        return None;
    }
    clock_digits(base)
}

fn decimal(n: &Normalized) -> Option<ParsedTime> {
    if n.text.matches('.').count() != 1 && !n.comma_decimal {
        return None;
    }

    let value = in_day_range(n.text.parse::<f64>().ok()?)?;
    let mut h = value.trunc() as u32;
    let mut m = ((value - value.trunc()) * 60.0).round() as u32;
    if m == 60 {
        h += 1;
        m = 0;
    }
    ParsedTime::from_hms(h, m, 0)
}

fn digit_run(n: &Normalized) -> Option<ParsedTime> {
    let clean: String = n.text.chars().filter(|c| *c != '.' && *c != ',').collect();
    if !is_digits(&clean) {
        return None;
    }

    match clean.len() {
        6 => ParsedTime::from_hms(
            number(&clean[0..2])?,
            number(&clean[2..4])?,
            number(&clean[4..6])?,
        ),
        3 | 4 => clock_digits(&clean),
        1 | 2 => ParsedTime::from_hms(number(&clean)?, 0, 0),
        _ => None,
    }
}

/// Spreadsheet-style number: the fraction is split into minutes (with a tiny
/// bias against `0.999..` float noise) and rounded seconds.
fn raw_float(n: &Normalized) -> Option<ParsedTime> {
    let value = in_day_range(n.text.parse::<f64>().ok()?)?;
    if value.fract() == 0.0 {
        return ParsedTime::from_hours(value);
    }

    let mut h = value.trunc() as u32;
    let minutes = (value - value.trunc()) * 60.0;
    let mut m = (minutes + 0.0001).floor().max(0.0) as u32;
    let mut s = ((minutes - m as f64) * 60.0 + 0.5).floor().max(0.0) as u32;
    if s >= 60 {
        s = 0;
        m += 1;
    }
    if m >= 60 {
        m = 0;
        h += 1;
    }
    ParsedTime::from_hms(h, m, s)
}

// -----------------------------
// Helpers
// -----------------------------

/// `HHMM` (4 digits) or `HMM` (3 digits).
fn clock_digits(digits: &str) -> Option<ParsedTime> {
    let split = match digits.len() {
        4 => 2,
        3 => 1,
        _ => return None,
    };
    ParsedTime::from_hms(number(&digits[..split])?, number(&digits[split..])?, 0)
}

fn number(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn in_day_range(value: f64) -> Option<f64> {
    (value.is_finite() && (0.0..=ParsedTime::DAY_HOURS).contains(&value)).then_some(value)
}
