use crate::config::Config;
use reqwest::Client;
use std::{sync::Arc, time::Duration};

/// Shared, read-only per-process state. Nothing mutable crosses requests,
/// so no locking is involved.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            config: Arc::new(config),
            client,
        }
    }
}
