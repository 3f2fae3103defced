use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::{AnnouncementChanges, AnnouncementStore, NewAnnouncement, StoreError, TeacherDirectory};
use crate::models::{
    announcement::{Announcement, AnnouncementId},
    teacher::Teacher,
};

const ANNOUNCEMENT_COLUMNS: &str = "id, message, start_date, end_date, created_at, created_by, \
     created_by_name, updated_at, updated_by";

#[derive(Clone)]
pub struct PgAnnouncementStore {
    pool: PgPool,
}

impl PgAnnouncementStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementStore for PgAnnouncementStore {
    async fn find_active(&self, today: NaiveDate) -> Result<Vec<Announcement>, StoreError> {
        let rows = sqlx::query_as::<_, Announcement>(&format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements
             WHERE end_date >= $1
               AND (start_date IS NULL OR start_date <= $1)
             ORDER BY created_at DESC"
        ))
        .bind(today)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_all(&self) -> Result<Vec<Announcement>, StoreError> {
        let rows = sqlx::query_as::<_, Announcement>(&format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: AnnouncementId) -> Result<Option<Announcement>, StoreError> {
        let row = sqlx::query_as::<_, Announcement>(&format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, new: NewAnnouncement) -> Result<Announcement, StoreError> {
        let row = sqlx::query_as::<_, Announcement>(&format!(
            "INSERT INTO announcements
                (message, start_date, end_date, created_at, created_by, created_by_name)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ANNOUNCEMENT_COLUMNS}"
        ))
        .bind(&new.message)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(new.created_at)
        .bind(&new.created_by)
        .bind(&new.created_by_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: AnnouncementId,
        changes: AnnouncementChanges,
    ) -> Result<Option<Announcement>, StoreError> {
        // $2 flags whether start_date was supplied, since NULL is a legitimate new value.
        let row = sqlx::query_as::<_, Announcement>(&format!(
            "UPDATE announcements
             SET message = COALESCE($1, message),
                 start_date = CASE WHEN $2 THEN $3 ELSE start_date END,
                 end_date = COALESCE($4, end_date),
                 updated_at = $5,
                 updated_by = $6
             WHERE id = $7
             RETURNING {ANNOUNCEMENT_COLUMNS}"
        ))
        .bind(&changes.message)
        .bind(changes.start_date.is_some())
        .bind(changes.start_date.flatten())
        .bind(changes.end_date)
        .bind(changes.updated_at)
        .bind(&changes.updated_by)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: AnnouncementId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgTeacherDirectory {
    pool: PgPool,
}

impl PgTeacherDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a teacher or refresh the display name of an existing one.
    pub async fn upsert(&self, teacher: &Teacher) -> Result<Teacher, StoreError> {
        let row = sqlx::query_as::<_, Teacher>(
            "INSERT INTO teachers (username, display_name)
             VALUES ($1, $2)
             ON CONFLICT (username) DO UPDATE SET display_name = EXCLUDED.display_name
             RETURNING username, display_name",
        )
        .bind(&teacher.username)
        .bind(&teacher.display_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

#[async_trait]
impl TeacherDirectory for PgTeacherDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<Teacher>, StoreError> {
        let row = sqlx::query_as::<_, Teacher>(
            "SELECT username, display_name FROM teachers WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
