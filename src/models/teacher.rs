use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Entry of the teacher directory. `username` is the identity callers pass as `teacher_username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub username: String,
    pub display_name: String,
}
