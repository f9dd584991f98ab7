use chrono::NaiveDate;
use serde::Serialize;

use super::calendar::Day;

/// The contiguous sub-range of the flat day sequence belonging to one
/// calendar month: columns `[start_index, start_index + days)`. Consumed by
/// the renderer to merge month labels across their day columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSpan {
    /// First day of the month.
    pub month: NaiveDate,
    /// Column index of the month's first day in the flat sequence.
    pub start_index: usize,
    /// Number of day columns in the span.
    pub days: usize,
}

/// Compute per-month column spans over the flat day sequence, in month order.
///
/// The start index is found by first occurrence rather than assumed from
/// month-length arithmetic, and a month with no matching days contributes no
/// span. The grid construction never produces either irregularity today; this
/// just stays correct if it ever does.
pub fn month_spans(months: &[NaiveDate], days: &[Day]) -> Vec<MonthSpan> {
    months
        .iter()
        .filter_map(|&month| {
            let count = days.iter().filter(|d| d.month == month).count();
            if count == 0 {
                return None;
            }
            let start_index = days.iter().position(|d| d.month == month)?;
            Some(MonthSpan {
                month,
                start_index,
                days: count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::calendar::{day_grid, months_between};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn spans_tile_the_flat_sequence() {
        let months = months_between(date(2024, 12, 10), date(2025, 2, 10));
        let days = day_grid(&months);
        let spans = month_spans(&months, &days);

        assert_eq!(spans.len(), 3);
        assert_eq!(
            spans[0],
            MonthSpan {
                month: date(2024, 12, 1),
                start_index: 0,
                days: 31
            }
        );
        assert_eq!(
            spans[1],
            MonthSpan {
                month: date(2025, 1, 1),
                start_index: 31,
                days: 31
            }
        );
        assert_eq!(
            spans[2],
            MonthSpan {
                month: date(2025, 2, 1),
                start_index: 62,
                days: 28
            }
        );
        // Contiguous tiling, no gaps or overlap
        let total: usize = spans.iter().map(|s| s.days).sum();
        assert_eq!(total, days.len());
    }

    #[test]
    fn month_without_days_contributes_no_span() {
        let months = vec![date(2025, 1, 1), date(2025, 2, 1)];
        // Grid built from January only; February must be tolerated, not spanned
        let days = day_grid(&months[..1]);
        let spans = month_spans(&months, &days);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].month, date(2025, 1, 1));
    }

    #[test]
    fn no_months_no_spans() {
        assert!(month_spans(&[], &[]).is_empty());
    }
}
