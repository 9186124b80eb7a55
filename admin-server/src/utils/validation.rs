//! Input validation helpers
//!
//! Boundary checks shared by the handlers: storage ids from the path,
//! numeric coercion of multipart text fields, task dates and titles.

use chrono::{DateTime, NaiveDate, Utc};

use crate::utils::AppError;

// ── Limits ──────────────────────────────────────────────────────────

/// Task titles
pub const MAX_TITLE_LEN: usize = 200;

/// Order status labels
pub const MAX_STATUS_LEN: usize = 64;

/// Storage record keys (SurrealDB generates 20 alphanumeric chars)
pub const MAX_STORAGE_ID_LEN: usize = 64;

// ── Identifiers ─────────────────────────────────────────────────────

/// Whether `raw` has the shape of a storage record key
pub fn is_storage_id(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= MAX_STORAGE_ID_LEN
        && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check a path id, failing with [`AppError::InvalidId`] on a bad format.
pub fn require_storage_id<'a>(raw: &'a str, label: &str) -> Result<&'a str, AppError> {
    if is_storage_id(raw) {
        Ok(raw)
    } else {
        Err(AppError::invalid_id(format!("Invalid {label} ID")))
    }
}

// ── Text ────────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Present and not blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Coerce a form field to a finite decimal
pub fn parse_decimal(raw: &str, field: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::validation(format!("{field} must be a number")))
}

/// Coerce a form field to a whole number
pub fn parse_whole(raw: &str, field: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(format!("{field} must be a whole number")))
}

// ── Dates ───────────────────────────────────────────────────────────

/// Parse a due date: RFC 3339 timestamp or a plain `YYYY-MM-DD` (midnight UTC)
pub fn parse_due(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| AppError::validation(format!("Invalid due date '{raw}'")))
}
