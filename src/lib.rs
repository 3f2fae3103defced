// Library exports for binary tools and tests
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use services::announcements::AnnouncementService;
use store::TeacherDirectory;

pub use routes::app;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub announcements: Arc<AnnouncementService>,
    pub teachers: Arc<dyn TeacherDirectory>,
}
