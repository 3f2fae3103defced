use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use super::{AnnouncementChanges, AnnouncementStore, NewAnnouncement, StoreError, TeacherDirectory};
use crate::models::{
    announcement::{Announcement, AnnouncementId},
    teacher::Teacher,
};

/// In-memory adapter for tests and local wiring.
#[derive(Default)]
pub struct InMemoryAnnouncementStore {
    records: RwLock<Vec<Announcement>>,
}

impl InMemoryAnnouncementStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

/// Newest first. Insertion order is reversed before the stable sort so that
/// records sharing a timestamp still come back newest first.
fn newest_first<'a>(
    records: impl DoubleEndedIterator<Item = &'a Announcement>,
) -> Vec<Announcement> {
    let mut out: Vec<Announcement> = records.rev().cloned().collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

#[async_trait]
impl AnnouncementStore for InMemoryAnnouncementStore {
    async fn find_active(&self, today: NaiveDate) -> Result<Vec<Announcement>, StoreError> {
        let guard = self.records.read().await;
        Ok(newest_first(guard.iter().filter(|a| a.is_active_on(today))))
    }

    async fn find_all(&self) -> Result<Vec<Announcement>, StoreError> {
        let guard = self.records.read().await;
        Ok(newest_first(guard.iter()))
    }

    async fn find_by_id(&self, id: AnnouncementId) -> Result<Option<Announcement>, StoreError> {
        let guard = self.records.read().await;
        Ok(guard.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, new: NewAnnouncement) -> Result<Announcement, StoreError> {
        let record = Announcement {
            id: AnnouncementId::new(),
            message: new.message,
            start_date: new.start_date,
            end_date: new.end_date,
            created_at: new.created_at,
            created_by: new.created_by,
            created_by_name: new.created_by_name,
            updated_at: None,
            updated_by: None,
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: AnnouncementId,
        changes: AnnouncementChanges,
    ) -> Result<Option<Announcement>, StoreError> {
        let mut guard = self.records.write().await;
        let Some(existing) = guard.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        if let Some(message) = changes.message {
            existing.message = message;
        }
        if let Some(start_date) = changes.start_date {
            existing.start_date = start_date;
        }
        if let Some(end_date) = changes.end_date {
            existing.end_date = end_date;
        }
        existing.updated_at = Some(changes.updated_at);
        existing.updated_by = Some(changes.updated_by);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: AnnouncementId) -> Result<u64, StoreError> {
        let mut guard = self.records.write().await;
        let before = guard.len();
        guard.retain(|a| a.id != id);
        Ok((before - guard.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryTeacherDirectory {
    teachers: RwLock<HashMap<String, Teacher>>,
}

impl InMemoryTeacherDirectory {
    pub fn with_teachers<I>(teachers: I) -> Arc<Self>
    where
        I: IntoIterator<Item = Teacher>,
    {
        let map = teachers
            .into_iter()
            .map(|t| (t.username.clone(), t))
            .collect();
        Arc::new(Self {
            teachers: RwLock::new(map),
        })
    }
}

#[async_trait]
impl TeacherDirectory for InMemoryTeacherDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<Teacher>, StoreError> {
        Ok(self.teachers.read().await.get(username).cloned())
    }
}
