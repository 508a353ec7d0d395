use axum::{Router, routing::get};

use crate::{
    AppState,
    handlers::{health, videos},
};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api", create_api_router())
}

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/videos", get(videos::list_videos_handler))
        .route("/videos/{id}", get(videos::get_video_handler))
}
