use axum::{
    Json,
    extract::{Path, State},
};
use smartcast_model::VideoRecord;
use tracing::debug;

use crate::{AppError, AppResult, AppState};

pub const VIDEO_NOT_FOUND: &str = "Video not found";

/// `GET /api/videos`
pub async fn list_videos_handler(
    State(state): State<AppState>,
) -> Json<Vec<VideoRecord>> {
    Json(state.catalog().list().to_vec())
}

/// `GET /api/videos/{id}`
pub async fn get_video_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<VideoRecord>> {
    match state.catalog().get(&id) {
        Some(record) => Ok(Json(record.clone())),
        None => {
            debug!(video_id = %id, "catalog miss");
            Err(AppError::not_found(VIDEO_NOT_FOUND))
        }
    }
}
