use crate::models::{DurationOutcome, HoursRange, InvalidReason, ParsedTime};

/// Elapsed time between two clock readings of the same day.
///
/// An end before the start is an overnight shift: 24h is added to the end.
/// The result must lie strictly inside `range`; a zero-length or full-day
/// shift is a data error.
pub fn compute(
    start: Option<ParsedTime>,
    end: Option<ParsedTime>,
    range: HoursRange,
) -> DurationOutcome {
    let (Some(start), Some(end)) = (start, end) else {
        return DurationOutcome::Unparseable;
    };

    let start = start.hours();
    let mut end = end.hours();
    let rolled_over = end < start;
    if rolled_over {
        end += ParsedTime::DAY_HOURS;
    }

    let diff = end - start;
    if range.contains(diff) {
        DurationOutcome::Valid {
            hours: diff,
            rolled_over,
        }
    } else {
        let reason = if diff <= range.min_hours {
            InvalidReason::TooShort
        } else {
            InvalidReason::TooLong
        };
        DurationOutcome::Invalid {
            reason,
            raw_diff: diff,
        }
    }
}
