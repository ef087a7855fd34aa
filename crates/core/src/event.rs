//! Event lifecycle rules.
//!
//! An event starts `active` and can only move to `closed` through an admin
//! action. Whether it currently accepts submissions also depends on its end
//! date; the start date is display-only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Minimum word count applied when an event does not specify one, and the
/// fixed minimum of the single-event submission form.
pub const DEFAULT_MIN_WORDS: i32 = 250;

/// Reward label given to events created without one.
pub const DEFAULT_REWARD: &str = "₹0";

/// Image placeholder given to events created without one.
pub const DEFAULT_IMAGE_URL: &str = "🎯";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Event status. The only transition is `Active -> Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Closed,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            other => Err(CoreError::Validation(format!(
                "Unknown event status '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for EventStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Canonical form of a slug: trimmed and lowercased.
///
/// Two slugs that differ only in case normalize to the same value, which is
/// what the uniqueness constraint is checked against.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}

/// Normalize `slug` and check that it is usable in a URL path segment.
pub fn validate_slug(slug: &str) -> Result<String, CoreError> {
    let slug = normalize_slug(slug);
    if slug.is_empty() {
        return Err(CoreError::Validation("slug is required".into()));
    }
    if let Some(bad) = slug
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(CoreError::Validation(format!(
            "slug may only contain letters, digits, '-' and '_' (found {bad:?})"
        )));
    }
    Ok(slug)
}

/// Trim `title` and require it to be non-empty.
pub fn validate_title(title: &str) -> Result<String, CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation("title is required".into()));
    }
    Ok(title.to_string())
}

/// Resolve the minimum word count for a new event.
pub fn resolve_min_words(min_words: Option<i32>) -> Result<i32, CoreError> {
    match min_words {
        None => Ok(DEFAULT_MIN_WORDS),
        Some(n) if n >= 1 => Ok(n),
        Some(n) => Err(CoreError::Validation(format!(
            "minWords must be at least 1, got {n}"
        ))),
    }
}

/// Whether an event with `status` and `end_date` is open at `now`.
///
/// Open means the event was not closed by an admin and `now` has not passed
/// the end date. The start date does not participate.
pub fn is_active(status: EventStatus, end_date: Timestamp, now: Timestamp) -> bool {
    status == EventStatus::Active && now <= end_date
}

/// Whole days left until `end_date`, rounded up. Zero once the end has passed.
pub fn days_remaining(end_date: Timestamp, now: Timestamp) -> i64 {
    let millis = (end_date - now).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
    }
}

/// Fail with [`CoreError::SubmissionsClosed`] unless the event is open at `now`.
pub fn ensure_accepting_submissions(
    slug: &str,
    status: EventStatus,
    end_date: Timestamp,
    now: Timestamp,
) -> Result<(), CoreError> {
    if is_active(status, end_date, now) {
        Ok(())
    } else {
        Err(CoreError::SubmissionsClosed {
            slug: slug.to_string(),
        })
    }
}
