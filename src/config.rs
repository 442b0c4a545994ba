use crate::models::ColumnMap;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Server configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Identifier of the published spreadsheet to read.
    pub sheet_id: String,
    /// Upstream base URL; overridable so tests can point at a local stub.
    pub base_url: String,
    pub columns: ColumnMap,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let sheet_id = env::var("SHEET_ID")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or("SHEET_ID must be set to the spreadsheet identifier")?;

        let base_url = env::var("SHEETS_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            sheet_id,
            base_url: base_url.trim_end_matches('/').to_string(),
            columns: ColumnMap::default(),
        })
    }

    /// URL that returns the named table as CSV text.
    pub fn table_url(&self, table: &str) -> String {
        format!(
            "{}/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.base_url, self.sheet_id, table
        )
    }
}

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080)
}
