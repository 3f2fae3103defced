use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Primary key of an announcement, rendered as a plain string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct AnnouncementId(pub Uuid);

impl AnnouncementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnnouncementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AnnouncementId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub message: String,
    /// `None` means the announcement is active as soon as it is created.
    pub start_date: Option<NaiveDate>,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub created_by_name: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl Announcement {
    /// Whether `today` falls inside the announcement's date range.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.end_date >= today && self.start_date.map_or(true, |start| start <= today)
    }
}

/// Body for POST /announcements.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub message: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub end_date: NaiveDate,
}

/// Body for PUT /announcements/{id}. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAnnouncementRequest {
    #[serde(default)]
    pub message: Patch<String>,
    #[serde(default)]
    pub start_date: Patch<NaiveDate>,
    #[serde(default)]
    pub end_date: Patch<NaiveDate>,
}

/// One field of a partial update: left out of the body, sent as `null`, or sent with a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    /// `None` when the field was not supplied, `Some(None)` for an explicit null.
    pub fn into_change(self) -> Option<Option<T>> {
        match self {
            Patch::Missing => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v)),
        }
    }

    /// The supplied value, treating an explicit null the same as a missing field.
    pub fn into_value(self) -> Option<T> {
        match self {
            Patch::Value(v) => Some(v),
            Patch::Missing | Patch::Null => None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

// Only invoked when the key is present; `#[serde(default)]` covers the missing case.
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

/// Query string carrying the caller identity on management endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct TeacherQuery {
    pub teacher_username: Option<String>,
}
