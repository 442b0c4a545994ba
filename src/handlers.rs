use crate::errors::AppError;
use crate::models::{ProgressResponse, QuoteResponse};
use crate::series;
use crate::sheets;
use crate::state::AppState;
use crate::ui;
use axum::{extract::State, response::Html, Json};
use tracing::error;

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn get_progress(
    State(state): State<AppState>,
) -> Result<Json<ProgressResponse>, AppError> {
    let data = sheets::fetch_all_data(&state.client, &state.config)
        .await
        .map_err(|err| {
            error!("progress fetch failed: {err}");
            AppError::internal("failed to fetch progress data")
        })?;

    let window = series::default_window(series::civil_today(), &data.daily.labels);
    Ok(Json(ProgressResponse {
        daily: data.daily,
        cumulative: data.cumulative,
        window,
    }))
}

pub async fn get_quote(State(state): State<AppState>) -> Json<QuoteResponse> {
    let quote = sheets::fetch_random_quote(&state.client, &state.config).await;
    Json(QuoteResponse { quote })
}
