use crate::config::Config;
use crate::errors::FetchError;
use crate::models::{ColumnMap, CombinedData, RawRow};
use crate::series;
use rand::Rng;
use reqwest::Client;
use tracing::warn;

pub const DAILY_TABLE: &str = "daily";
pub const CUMULATIVE_TABLE: &str = "cumulative";
pub const QUOTES_TABLE: &str = "inspiration";

/// Served whenever the quote pool is unreachable or empty.
pub const FALLBACK_QUOTE: &str = "Keep pushing forward!";

/// Fetch both progress tables concurrently and shape them into sorted
/// series. Either fetch failing fails the whole call; there is no
/// partial result.
pub async fn fetch_all_data(client: &Client, config: &Config) -> Result<CombinedData, FetchError> {
    let (daily, cumulative) = tokio::join!(
        fetch_table(client, config, DAILY_TABLE),
        fetch_table(client, config, CUMULATIVE_TABLE),
    );
    Ok(CombinedData {
        daily: series::from_rows(daily?),
        cumulative: series::from_rows(cumulative?),
    })
}

/// Fetch the quote table and pick one line at random. Upstream failures
/// are absorbed here: the dashboard gets the fallback string instead of
/// an error.
pub async fn fetch_random_quote(client: &Client, config: &Config) -> String {
    match fetch_csv(client, &config.table_url(QUOTES_TABLE)).await {
        Ok(text) => pick_quote(&text),
        Err(err) => {
            warn!("quote fetch failed, serving fallback: {err}");
            FALLBACK_QUOTE.to_string()
        }
    }
}

async fn fetch_table(
    client: &Client,
    config: &Config,
    table: &str,
) -> Result<Vec<RawRow>, FetchError> {
    let text = fetch_csv(client, &config.table_url(table)).await?;
    Ok(parse_table(&text, config.columns))
}

async fn fetch_csv(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    Ok(response.text().await?)
}

/// Parse one CSV payload into rows. The first line is a header and is
/// discarded. Fields are trimmed and de-quoted; `actual`/`target` values
/// that fail numeric parsing (including fields missing from short lines)
/// become `0.0`. Rows with an empty date are dropped.
pub fn parse_table(text: &str, columns: ColumnMap) -> Vec<RawRow> {
    text.lines()
        .skip(1)
        .map(|line| {
            let cells: Vec<&str> = line.split(',').map(clean_cell).collect();
            RawRow {
                date: cells.get(columns.date).copied().unwrap_or("").to_string(),
                actual: numeric_cell(cells.get(columns.actual)),
                target: numeric_cell(cells.get(columns.target)),
            }
        })
        .filter(|row| !row.date.is_empty())
        .collect()
}

/// Pick one non-empty line (header excluded) uniformly at random.
pub fn pick_quote(text: &str) -> String {
    let pool: Vec<&str> = text
        .lines()
        .skip(1)
        .map(clean_cell)
        .filter(|line| !line.is_empty())
        .collect();
    if pool.is_empty() {
        return FALLBACK_QUOTE.to_string();
    }
    let index = rand::thread_rng().gen_range(0..pool.len());
    pool[index].to_string()
}

fn clean_cell(cell: &str) -> &str {
    let cell = cell.trim();
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    cell.strip_suffix('"').unwrap_or(cell)
}

fn numeric_cell(cell: Option<&&str>) -> f64 {
    cell.and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(0.0)
}
