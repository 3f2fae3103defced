use lazy_static::lazy_static;
use prometheus::{register_counter_vec, CounterVec};

use crate::error::AppError;

lazy_static! {
    pub static ref ANNOUNCEMENT_REQUESTS: CounterVec = register_counter_vec!(
        "api_announcement_requests_total",
        "Announcement requests by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("announcement request counter registers once");
}

/// Count one handled request, labelled `ok` or with the error kind.
pub fn record<T>(operation: &str, result: &Result<T, AppError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    ANNOUNCEMENT_REQUESTS
        .with_label_values(&[operation, outcome])
        .inc();
}
