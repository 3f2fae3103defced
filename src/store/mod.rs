pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    announcement::{Announcement, AnnouncementId},
    teacher::Teacher,
};

pub use memory::{InMemoryAnnouncementStore, InMemoryTeacherDirectory};
pub use postgres::{PgAnnouncementStore, PgTeacherDirectory};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Fields written when an announcement is first persisted. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub message: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub created_by_name: String,
}

/// Merged changes for an existing announcement. `None` leaves a column untouched;
/// `start_date: Some(None)` clears the start date.
#[derive(Debug, Clone)]
pub struct AnnouncementChanges {
    pub message: Option<String>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

/// Persistence for announcements. Listings are ordered by `created_at`, newest first.
#[async_trait]
pub trait AnnouncementStore: Send + Sync {
    /// Announcements whose range contains `today`.
    async fn find_active(&self, today: NaiveDate) -> Result<Vec<Announcement>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Announcement>, StoreError>;

    async fn find_by_id(&self, id: AnnouncementId) -> Result<Option<Announcement>, StoreError>;

    async fn insert(&self, new: NewAnnouncement) -> Result<Announcement, StoreError>;

    /// Applies `changes` and returns the stored record, or `None` when no row was modified.
    async fn update(
        &self,
        id: AnnouncementId,
        changes: AnnouncementChanges,
    ) -> Result<Option<Announcement>, StoreError>;

    /// Returns the number of records removed.
    async fn delete(&self, id: AnnouncementId) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Read-only view of the teacher directory.
#[async_trait]
pub trait TeacherDirectory: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Teacher>, StoreError>;
}
