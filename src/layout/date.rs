use chrono::{DateTime, Datelike, Months, NaiveDate};

/// Error produced when a date string cannot be interpreted as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("unparseable date: {0:?}")]
    Unparseable(String),
}

/// Parse a date string as a local calendar date, ignoring any time-of-day or
/// offset information.
///
/// Accepted formats:
/// - strings containing `T`: the `YYYY-MM-DD` portion before the `T`
/// - strings containing `/`: `MM/DD/YYYY`
/// - otherwise: plain `YYYY-MM-DD`, then RFC 2822 as a last resort
///
/// Out-of-range components (month 13, day 32) are parse failures, not
/// rollovers.
pub fn parse_date_local(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    let fail = || DateError::Unparseable(input.to_string());

    if let Some((date_part, _)) = trimmed.split_once('T') {
        return parse_dashed_ymd(date_part).ok_or_else(fail);
    }
    if trimmed.contains('/') {
        return parse_slashed_mdy(trimmed).ok_or_else(fail);
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.date_naive());
    }
    Err(fail())
}

/// `YYYY-MM-DD` with 1-based month.
fn parse_dashed_ymd(s: &str) -> Option<NaiveDate> {
    let mut parts = s.splitn(3, '-');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `MM/DD/YYYY` with 1-based month.
fn parse_slashed_mdy(s: &str) -> Option<NaiveDate> {
    let mut parts = s.splitn(3, '/');
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First day of the month containing `d`.
pub fn start_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

/// First day of the month `n` calendar months after the month containing `d`.
/// True month stepping: respects month lengths and year rollover.
pub fn add_months(d: NaiveDate, n: u32) -> NaiveDate {
    let first = start_of_month(d);
    first
        .checked_add_months(Months::new(n))
        .unwrap_or(first)
}

/// Number of days in the month containing `d`.
pub fn days_in_month(d: NaiveDate) -> u32 {
    let first = start_of_month(d);
    let next = add_months(first, 1);
    (next - first).num_days() as u32
}

/// Short date label, e.g. "Jan 5, 2025".
pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

/// Month header label, e.g. "Jan 2025".
pub fn fmt_month(d: NaiveDate) -> String {
    d.format("%b %Y").to_string()
}
