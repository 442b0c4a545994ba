use serde::{Deserialize, Serialize};

/// One parsed table line; folded into a `Series` and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub date: String,
    pub actual: f64,
    pub target: f64,
}

/// Which CSV column holds which field. The upstream sheet also carries a
/// "day" label column that is never mapped.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    pub date: usize,
    pub actual: usize,
    pub target: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            date: 0,
            actual: 2,
            target: 3,
        }
    }
}

/// Aligned labels/actual/target sequences for one progress metric.
/// Invariant: all three are the same length and `labels` is sorted
/// ascending by calendar date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub actual: Vec<f64>,
    pub target: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombinedData {
    pub daily: Series,
    pub cumulative: Series,
}

/// Default slider window, stamped into each progress response so the
/// client applies the range policy once per refresh.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub daily: Series,
    pub cumulative: Series,
    pub window: DateWindow,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote: String,
}
