// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod media;

use super::error::{HttpError, HttpResult};

/// Missing required fields are reported as 400 with the field name.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> HttpResult<T> {
    value.ok_or_else(|| HttpError::bad_request(format!("{field} is required")))
}
