use crate::{error::AppError, models::auth::AuthContext, store::TeacherDirectory};

pub struct AuthService;

impl AuthService {
    /// Resolve a caller-supplied username against the teacher directory.
    /// A missing or blank username is treated the same as an unknown one.
    pub async fn resolve(
        directory: &dyn TeacherDirectory,
        username: Option<&str>,
    ) -> Result<AuthContext, AppError> {
        let username = match username {
            Some(u) if !u.is_empty() => u,
            _ => return Err(AppError::Unauthorized),
        };

        match directory.find_by_username(username).await? {
            Some(teacher) => Ok(AuthContext::new(teacher)),
            None => {
                tracing::debug!("Unknown teacher_username: {}", username);
                Err(AppError::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::teacher::Teacher, store::InMemoryTeacherDirectory};

    fn directory() -> std::sync::Arc<InMemoryTeacherDirectory> {
        InMemoryTeacherDirectory::with_teachers([Teacher {
            username: "t1".into(),
            display_name: "Ms. Lee".into(),
        }])
    }

    #[tokio::test]
    async fn resolves_known_teacher() {
        let dir = directory();
        let auth = AuthService::resolve(dir.as_ref(), Some("t1")).await.unwrap();
        assert_eq!(auth.username(), "t1");
        assert_eq!(auth.display_name(), "Ms. Lee");
    }

    #[tokio::test]
    async fn rejects_unknown_missing_and_blank_callers() {
        let dir = directory();
        for username in [Some("nobody"), None, Some("")] {
            let result = AuthService::resolve(dir.as_ref(), username).await;
            assert!(matches!(result, Err(AppError::Unauthorized)), "{username:?}");
        }
    }

    #[tokio::test]
    async fn lookup_is_exact_match() {
        let dir = directory();
        let result = AuthService::resolve(dir.as_ref(), Some("T1")).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
