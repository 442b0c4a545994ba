pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod series;
pub mod sheets;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
