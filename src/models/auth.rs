use super::teacher::Teacher;

/// Caller identity resolved against the teacher directory, available via the
/// `TeacherAuth` extractor. Presence in the directory is the only check made.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub teacher: Teacher,
}

impl AuthContext {
    pub fn new(teacher: Teacher) -> Self {
        Self { teacher }
    }

    pub fn username(&self) -> &str {
        &self.teacher.username
    }

    pub fn display_name(&self) -> &str {
        &self.teacher.display_name
    }
}
