use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use crate::{
    error::AppError,
    models::{announcement::TeacherQuery, auth::AuthContext},
    services::auth::AuthService,
    AppState,
};

/// Extractor resolving the `teacher_username` query parameter against the teacher directory.
///
/// This is an identity lookup only: no password, token or role is checked.
pub struct TeacherAuth(pub AuthContext);

impl FromRequestParts<AppState> for TeacherAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let query = Query::<TeacherQuery>::try_from_uri(&parts.uri)
            .map(|Query(q)| q)
            .unwrap_or_default();

        let auth = AuthService::resolve(state.teachers.as_ref(), query.teacher_username.as_deref())
            .await?;
        Ok(TeacherAuth(auth))
    }
}
