use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use leaderboard_core::{load_leaderboard, LeaderboardSnapshot, LoadError};
use serde::Serialize;
use tracing::{error, warn};

use crate::AppState;

const MISSING_DISPLAY_PAGE: &str =
    "display.html not found on server. Place the provided display.html in the same folder.";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    SourceNotFound(String),
    Processing(String),
}

impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        if err.is_not_found() {
            ApiError::SourceNotFound(err.to_string())
        } else {
            ApiError::Processing(format!("Failed to parse spreadsheet: {err}"))
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::SourceNotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Processing(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

pub async fn data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LeaderboardSnapshot>, ApiError> {
    let source = state.source.clone();
    let outcome = tokio::task::spawn_blocking(move || load_leaderboard(&source))
        .await
        .map_err(|err| {
            error!("leaderboard load task failed: {err}");
            ApiError::Processing(format!("Failed to parse spreadsheet: {err}"))
        })?;

    match outcome {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(err) => {
            if err.is_not_found() {
                warn!("leaderboard source missing: {err}");
            } else {
                error!("leaderboard load failed: {err}");
            }
            Err(err.into())
        }
    }
}

pub async fn display(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read(&state.display_page).await {
        Ok(page) => ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], page).into_response(),
        Err(err) => {
            warn!(
                path = %state.display_page.display(),
                "display page unavailable: {err}"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, MISSING_DISPLAY_PAGE).into_response()
        }
    }
}
