//! Field validation for create and update payloads.

use crate::error::AppError;
use crate::schema::{ResourceCreate, ResourceUpdate};

pub struct RequestValidator;

impl RequestValidator {
    /// A create payload must carry a non-empty `name`; returns it.
    pub fn validate_create(payload: &ResourceCreate) -> Result<&str, AppError> {
        require_name(payload.name.as_deref())
    }

    /// An update payload may omit any field, but a `name` it does carry must
    /// still be a non-empty string.
    pub fn validate_update(patch: &ResourceUpdate) -> Result<(), AppError> {
        if let Some(name) = &patch.name {
            require_name(name.as_deref())?;
        }
        Ok(())
    }
}

fn require_name(name: Option<&str>) -> Result<&str, AppError> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(n),
        Some(_) => Err(AppError::validation("name", "name must not be empty")),
        None => Err(AppError::validation("name", "name is required")),
    }
}
