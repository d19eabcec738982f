//! Rolling vehicle quality score over the trailing calendar month.

use time::{Date, Duration, Month, OffsetDateTime};

use super::entities::Vehicle;

/// Average grade over a non-empty set of recent inspections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityScore {
    /// Mean grade rounded half-up to one decimal.
    pub average: f64,
    pub inspections: usize,
}

/// Start of the scoring window: `as_of` with its month field decreased by one.
///
/// The day is kept as-is and overflows into the following month when the
/// earlier month is shorter, so Dec 31 maps to Dec 1 and Mar 31 to Mar 3
/// (Mar 2 in leap years). Time of day and offset are preserved.
pub fn one_month_before(as_of: OffsetDateTime) -> OffsetDateTime {
    let date = as_of.date();
    let year = if date.month() == Month::January {
        date.year() - 1
    } else {
        date.year()
    };
    let first = Date::from_calendar_date(year, date.month().previous(), 1).unwrap_or(Date::MIN);
    let shifted = first
        .checked_add(Duration::days(i64::from(date.day()) - 1))
        .unwrap_or(first);
    as_of.replace_date(shifted)
}

/// Mean grade of inspections passed strictly after [`one_month_before`]`(as_of)`.
pub fn recent_grade(vehicle: &Vehicle, as_of: OffsetDateTime) -> Option<QualityScore> {
    let since = one_month_before(as_of);
    let (sum, count) = vehicle
        .inspections
        .iter()
        .filter(|inspection| inspection.passed_at > since)
        .fold((0_u64, 0_usize), |(sum, count), inspection| {
            (sum + u64::from(inspection.grade), count + 1)
        });

    if count == 0 {
        return None;
    }

    Some(QualityScore {
        average: round_tenths(sum as f64 / count as f64),
        inspections: count,
    })
}

/// Rounded recent average, or `0.0` when there is no recent inspection.
pub fn average_recent_grade(vehicle: &Vehicle, as_of: OffsetDateTime) -> f64 {
    recent_grade(vehicle, as_of)
        .map(|score| score.average)
        .unwrap_or(0.0)
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
