use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::{
    error::{AppError, INVALID_ID, NOT_FOUND, START_AFTER_END, UPDATE_FAILED},
    models::{
        announcement::{
            Announcement, AnnouncementId, CreateAnnouncementRequest, UpdateAnnouncementRequest,
        },
        auth::AuthContext,
    },
    store::{AnnouncementChanges, AnnouncementStore, NewAnnouncement},
};

pub struct AnnouncementService {
    store: Arc<dyn AnnouncementStore>,
}

impl AnnouncementService {
    pub fn new(store: Arc<dyn AnnouncementStore>) -> Self {
        Self { store }
    }

    /// Announcements whose date range contains `today`, newest first.
    pub async fn list_active(&self, today: NaiveDate) -> Result<Vec<Announcement>, AppError> {
        Ok(self.store.find_active(today).await?)
    }

    /// Every announcement including expired and scheduled ones, newest first.
    pub async fn list_all(&self, _auth: &AuthContext) -> Result<Vec<Announcement>, AppError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn create(
        &self,
        auth: &AuthContext,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement, AppError> {
        ensure_range(req.start_date, req.end_date)?;

        let created = self
            .store
            .insert(NewAnnouncement {
                message: req.message,
                start_date: req.start_date,
                end_date: req.end_date,
                created_at: Utc::now(),
                created_by: auth.username().to_string(),
                created_by_name: auth.display_name().to_string(),
            })
            .await?;

        tracing::info!("Announcement {} created by {}", created.id, auth.username());
        Ok(created)
    }

    /// Merge the supplied fields into the stored announcement. The date range is
    /// checked on the merged values before anything is written.
    ///
    /// `null` for `message` or `end_date` keeps the stored value; `null` for
    /// `start_date` clears it.
    pub async fn update(
        &self,
        auth: &AuthContext,
        id: &str,
        req: UpdateAnnouncementRequest,
    ) -> Result<Announcement, AppError> {
        let id = parse_id(id)?;

        let message = req.message.into_value();
        let end_date = req.end_date.into_value();
        let start_date = req.start_date.into_change();

        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(NOT_FOUND))?;

        let effective_start = start_date.unwrap_or(existing.start_date);
        let effective_end = end_date.unwrap_or(existing.end_date);
        ensure_range(effective_start, effective_end)?;

        let changes = AnnouncementChanges {
            message,
            start_date,
            end_date,
            updated_at: Utc::now(),
            updated_by: auth.username().to_string(),
        };

        // The record existed a moment ago; losing it now is a write conflict, not a 404.
        let updated = self
            .store
            .update(id, changes)
            .await?
            .ok_or(AppError::Internal(UPDATE_FAILED))?;

        tracing::info!("Announcement {} updated by {}", id, auth.username());
        Ok(updated)
    }

    pub async fn delete(&self, auth: &AuthContext, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        if self.store.delete(id).await? == 0 {
            return Err(AppError::NotFound(NOT_FOUND));
        }
        tracing::info!("Announcement {} deleted by {}", id, auth.username());
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        Ok(self.store.ping().await?)
    }
}

fn parse_id(raw: &str) -> Result<AnnouncementId, AppError> {
    raw.parse().map_err(|_| AppError::invalid(INVALID_ID))
}

fn ensure_range(start: Option<NaiveDate>, end: NaiveDate) -> Result<(), AppError> {
    match start {
        Some(start) if start > end => Err(AppError::invalid(START_AFTER_END)),
        _ => Ok(()),
    }
}
