use crate::models::{DateWindow, RawRow, Series};
use chrono::{Duration, NaiveDate, Utc};

/// How many days the default slider window covers.
const WINDOW_DAYS: usize = 30;

/// Fixed civil timezone for the window policy (UTC+8).
const CIVIL_OFFSET_HOURS: i64 = 8;

impl Series {
    /// Restrict the series to the inclusive index range `[start, end]`,
    /// keeping the three sequences in lockstep. Out-of-range ends are
    /// clamped; an inverted or fully out-of-range pair yields an empty
    /// series.
    pub fn slice(&self, start: usize, end: usize) -> Series {
        if self.is_empty() || start > end || start >= self.len() {
            return Series::default();
        }
        let end = end.min(self.len() - 1);
        Series {
            labels: self.labels[start..=end].to_vec(),
            actual: self.actual[start..=end].to_vec(),
            target: self.target[start..=end].to_vec(),
        }
    }
}

/// Sort rows ascending by calendar date and project them column-wise into
/// a `Series`. The sort is stable, so same-day rows keep their upstream
/// order; rows whose date does not parse sort before all dated rows but
/// are passed through.
pub fn from_rows(mut rows: Vec<RawRow>) -> Series {
    rows.sort_by_key(|row| parse_label(&row.date));
    Series {
        labels: rows.iter().map(|row| row.date.clone()).collect(),
        actual: rows.iter().map(|row| row.actual).collect(),
        target: rows.iter().map(|row| row.target).collect(),
    }
}

/// Default date window over `labels`: a rolling window of `WINDOW_DAYS`
/// entries ending at tomorrow's label, or at the last label when tomorrow
/// is not present. Pure function of its inputs.
pub fn default_window(today: NaiveDate, labels: &[String]) -> DateWindow {
    if labels.is_empty() {
        return DateWindow { start: 0, end: 0 };
    }
    let tomorrow = (today + Duration::days(1)).format("%Y-%m-%d").to_string();
    let end = labels
        .iter()
        .position(|label| *label == tomorrow)
        .unwrap_or(labels.len() - 1);
    DateWindow {
        start: end.saturating_sub(WINDOW_DAYS - 1),
        end,
    }
}

/// Today's civil date in the dashboard's fixed timezone.
pub fn civil_today() -> NaiveDate {
    (Utc::now() + Duration::hours(CIVIL_OFFSET_HOURS)).date_naive()
}

fn parse_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, actual: f64, target: f64) -> RawRow {
        RawRow {
            date: date.to_string(),
            actual,
            target,
        }
    }

    fn labels(dates: &[&str]) -> Vec<String> {
        dates.iter().map(|date| date.to_string()).collect()
    }

    #[test]
    fn from_rows_sorts_by_date() {
        let series = from_rows(vec![
            row("2024-01-02", 5.0, 10.0),
            row("2024-01-01", 3.0, 10.0),
        ]);
        assert_eq!(series.labels, labels(&["2024-01-01", "2024-01-02"]));
        assert_eq!(series.actual, vec![3.0, 5.0]);
        assert_eq!(series.target, vec![10.0, 10.0]);
    }

    #[test]
    fn from_rows_keeps_sequences_aligned() {
        let series = from_rows(vec![
            row("2024-03-03", 1.0, 2.0),
            row("2024-03-01", 3.0, 4.0),
            row("2024-03-02", 5.0, 6.0),
        ]);
        assert_eq!(series.labels.len(), 3);
        assert_eq!(series.actual.len(), 3);
        assert_eq!(series.target.len(), 3);
    }

    #[test]
    fn sort_is_stable_for_same_day_rows() {
        let series = from_rows(vec![
            row("2024-01-01", 1.0, 0.0),
            row("2024-01-01", 2.0, 0.0),
            row("2024-01-01", 3.0, 0.0),
        ]);
        assert_eq!(series.actual, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn sort_is_idempotent_on_sorted_input() {
        let rows = vec![
            row("2024-01-01", 1.0, 9.0),
            row("2024-01-02", 2.0, 9.0),
            row("2024-01-03", 3.0, 9.0),
        ];
        let once = from_rows(rows.clone());
        let twice = from_rows(
            once.labels
                .iter()
                .zip(once.actual.iter().zip(once.target.iter()))
                .map(|(date, (actual, target))| row(date, *actual, *target))
                .collect(),
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_rows_yield_empty_series() {
        let series = from_rows(Vec::new());
        assert!(series.is_empty());
        assert!(series.actual.is_empty());
        assert!(series.target.is_empty());
    }

    #[test]
    fn slice_returns_inclusive_range_in_lockstep() {
        let series = from_rows(vec![
            row("2024-01-01", 1.0, 10.0),
            row("2024-01-02", 2.0, 10.0),
            row("2024-01-03", 3.0, 10.0),
            row("2024-01-04", 4.0, 10.0),
        ]);
        let window = series.slice(1, 2);
        assert_eq!(window.len(), 2);
        assert_eq!(window.labels, labels(&["2024-01-02", "2024-01-03"]));
        assert_eq!(window.actual, vec![2.0, 3.0]);
        assert_eq!(window.target, vec![10.0, 10.0]);
    }

    #[test]
    fn slice_clamps_end_past_length() {
        let series = from_rows(vec![row("2024-01-01", 1.0, 2.0), row("2024-01-02", 3.0, 4.0)]);
        let window = series.slice(0, 99);
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn slice_out_of_range_start_is_empty() {
        let series = from_rows(vec![row("2024-01-01", 1.0, 2.0)]);
        assert!(series.slice(5, 9).is_empty());
    }

    #[test]
    fn default_window_ends_at_tomorrow_when_present() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let dates = labels(&["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"]);
        let window = default_window(today, &dates);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 2);
    }

    #[test]
    fn default_window_falls_back_to_last_index() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let dates = labels(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        let window = default_window(today, &dates);
        assert_eq!(window.end, 2);
        assert_eq!(window.start, 0);
    }

    #[test]
    fn default_window_spans_at_most_thirty_entries() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        let dates: Vec<String> = (0..40)
            .map(|offset| {
                (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset))
                    .format("%Y-%m-%d")
                    .to_string()
            })
            .collect();
        let window = default_window(today, &dates);
        // tomorrow (2024-02-10) is absent, so the window ends at the last label
        assert_eq!(window.end, 39);
        assert_eq!(window.start, 10);
        assert_eq!(window.end - window.start + 1, 30);
    }

    #[test]
    fn default_window_on_empty_labels() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let window = default_window(today, &[]);
        assert_eq!((window.start, window.end), (0, 0));
    }
}
