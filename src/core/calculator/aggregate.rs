use super::duration::compute;
use crate::core::parser::parse_with_notation;
use crate::core::runlog::RunLog;
use crate::models::{DayRecord, DurationOutcome, EmployeeResult, HoursRange, ParsedTime, RawCell};
use crate::utils::formatting::pad_right;
use crate::utils::time::{format_hms, format_seconds, hours_to_minutes, hours_to_seconds};

/// Walks one employee's days in order and accumulates the valid ones.
///
/// Blank days are skipped without a trace line. Invalid and unparseable days
/// get an "unresolved" line but never touch the totals.
pub fn aggregate(
    name: &str,
    column: usize,
    days: &[DayRecord],
    range: HoursRange,
    log: &mut RunLog,
) -> EmployeeResult {
    let mut result = EmployeeResult::new(name, column);
    log.info("calc", format!("👤 {name}:"));

    for day in days {
        if day.is_empty() {
            continue;
        }

        let start_txt = cell_text(&day.start);
        let end_txt = cell_text(&day.end);
        log.debug("calc", format!("Day {}: {} - {}", day.index, start_txt, end_txt));

        let start = parse_logged(&day.start, log);
        let end = parse_logged(&day.end, log);

        match compute(start, end, range) {
            DurationOutcome::Valid { hours, rolled_over } => {
                if rolled_over {
                    log.debug("calc", "→ Night shift detected (end before start), +24h");
                }
                result.total_hours += hours;
                result.days_worked += 1;

                let line = day_line(day.index, &start_txt, &end_txt, hours, rolled_over);
                log.info("calc", format!("✅ {}", line.trim_start()));
                result.details.push(line);
            }
            DurationOutcome::Invalid { reason, raw_diff } => {
                log.warn(
                    "calc",
                    format!(
                        "⚠️ Day {}: invalid difference {:.2}h ({})",
                        day.index,
                        raw_diff,
                        reason.as_str()
                    ),
                );
                result.details.push(format!(
                    "  Day {:>4}: {:>10} - {:>10} = ? (invalid: {:.2}h)",
                    day.index, start_txt, end_txt, raw_diff
                ));
            }
            DurationOutcome::Unparseable => {
                log.warn("calc", format!("⚠️ Day {}: unparseable", day.index));
                result.details.push(format!(
                    "  Day {:>4}: {:>10} - {:>10} = ? (unparseable)",
                    day.index, start_txt, end_txt
                ));
            }
        }
    }

    finalize(&mut result);
    log.info(
        "result",
        format!(
            "📊 {}: {} in {} days ({:.2}h)",
            name,
            format_hms(result.total_hours),
            result.days_worked,
            result.total_hours
        ),
    );
    result
}

/// Average and summary lines, derived from the final decimal totals.
fn finalize(result: &mut EmployeeResult) {
    if result.days_worked == 0 {
        result.average_hours = 0.0;
        result
            .details
            .push("  📊 Total: 0h00m00s / 0 days (daily average: 0h00m00s)".to_string());
        return;
    }

    result.average_hours = result.total_hours / result.days_worked as f64;
    result.details.push(summary_line(
        &format!("📊 Total {:>4} days:", result.days_worked),
        result.total_hours,
    ));
    result
        .details
        .push(summary_line("📊 Daily average:", result.average_hours));
}

fn day_line(index: usize, start: &str, end: &str, hours: f64, rolled_over: bool) -> String {
    let mut line = format!(
        "  Day {:>4}: {:>10} - {:>10} = {:>12}  {:>10.6}h  {:>7}m  {:>9}s",
        index,
        start,
        end,
        format_hms(hours),
        hours,
        hours_to_minutes(hours),
        format_seconds(hours_to_seconds(hours))
    );
    if rolled_over {
        line.push_str(" (overnight)");
    }
    line
}

fn summary_line(label: &str, hours: f64) -> String {
    format!(
        "  {} {:>12}  {:>10.6}h  {:>7}m  {:>9}s",
        pad_right(label, 32),
        format_hms(hours),
        hours,
        hours_to_minutes(hours),
        format_seconds(hours_to_seconds(hours))
    )
}

fn parse_logged(cell: &RawCell, log: &mut RunLog) -> Option<ParsedTime> {
    match parse_with_notation(cell) {
        Some((t, notation)) => {
            log.debug(
                "parse",
                format!("⏱️ '{}' → {} = {:.6}h", cell_text(cell), notation, t.hours()),
            );
            Some(t)
        }
        None => {
            log.warn("parse", format!("❌ Could not parse '{}'", cell_text(cell)));
            None
        }
    }
}

fn cell_text(cell: &RawCell) -> String {
    cell.to_string().trim().to_string()
}
