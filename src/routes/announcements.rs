use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Local;
use serde_json::{json, Value};

use crate::{
    error::AppError,
    middleware::auth::TeacherAuth,
    models::announcement::{Announcement, CreateAnnouncementRequest, UpdateAnnouncementRequest},
    services::metrics,
    AppState,
};

// Auth and body rejections are taken as `Result`s so that every outcome,
// including a 401, passes through `metrics::record`.

/// GET /announcements — public endpoint, announcements whose range contains today.
pub async fn list_active(
    State(state): State<AppState>,
) -> Result<Json<Vec<Announcement>>, AppError> {
    let today = Local::now().date_naive();
    let result = state.announcements.list_active(today).await;
    metrics::record("list_active", &result);
    result.map(Json)
}

/// GET /announcements/all — management view, teachers only.
pub async fn list_all(
    State(state): State<AppState>,
    auth: Result<TeacherAuth, AppError>,
) -> Result<Json<Vec<Announcement>>, AppError> {
    let result = async {
        let TeacherAuth(auth) = auth?;
        state.announcements.list_all(&auth).await
    }
    .await;
    metrics::record("list_all", &result);
    result.map(Json)
}

/// POST /announcements
pub async fn create_announcement(
    State(state): State<AppState>,
    auth: Result<TeacherAuth, AppError>,
    body: Result<Json<CreateAnnouncementRequest>, JsonRejection>,
) -> Result<Json<Announcement>, AppError> {
    let result = async {
        let TeacherAuth(auth) = auth?;
        let Json(body) = body?;
        state.announcements.create(&auth, body).await
    }
    .await;
    metrics::record("create", &result);
    result.map(Json)
}

/// PUT /announcements/{id} — partial update, omitted fields are kept.
pub async fn update_announcement(
    State(state): State<AppState>,
    auth: Result<TeacherAuth, AppError>,
    Path(id): Path<String>,
    body: Result<Json<UpdateAnnouncementRequest>, JsonRejection>,
) -> Result<Json<Announcement>, AppError> {
    let result = async {
        let TeacherAuth(auth) = auth?;
        let Json(body) = body?;
        state.announcements.update(&auth, &id, body).await
    }
    .await;
    metrics::record("update", &result);
    result.map(Json)
}

/// DELETE /announcements/{id}
pub async fn delete_announcement(
    State(state): State<AppState>,
    auth: Result<TeacherAuth, AppError>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let result = async {
        let TeacherAuth(auth) = auth?;
        state.announcements.delete(&auth, &id).await
    }
    .await;
    metrics::record("delete", &result);
    result.map(|_| Json(json!({ "message": "Announcement deleted successfully" })))
}
