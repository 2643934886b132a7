//! Profile Types
//!
//! Request bodies accepted by the `/api/profile` endpoints and the profile
//! document returned by them. A profile belongs to exactly one user and embeds
//! two ordered collections, education and experience, newest entry first.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::shared::error::{validate_fields, FieldErrors};
use crate::shared::serde_helpers::{empty_as_none, trimmed};

/// Date format used by form date inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Split a comma separated skills string into trimmed, non-empty skills
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Whether a handle is usable as a single URL path segment
///
/// Handles are limited to ASCII letters, digits, `-` and `_`.
pub fn is_valid_handle(handle: &str) -> bool {
    handle
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn validate_handle(handle: &str) -> Result<(), ValidationError> {
    if !is_valid_handle(handle) {
        let mut error = ValidationError::new("slug");
        error.message = Some(Cow::Borrowed(
            "Handle may only contain letters, numbers, dashes and underscores",
        ));
        return Err(error);
    }
    Ok(())
}

fn validate_skills(skills: &str) -> Result<(), ValidationError> {
    if parse_skills(skills).is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed("Skills field is required"));
        return Err(error);
    }
    Ok(())
}

/// Create or update profile request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileRequest {
    /// Unique slug used in profile URLs
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        length(min = 2, max = 40, message = "Handle needs to be between 2 and 40 characters"),
        custom(function = "validate_handle")
    )]
    pub handle: String,
    /// Professional status (Developer, Student, ...)
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Status field is required"))]
    pub status: String,
    /// Comma separated skills
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "validate_skills"))]
    pub skills: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Not a valid URL"))]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub githubusername: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Not a valid URL"))]
    pub youtube: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Not a valid URL"))]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Not a valid URL"))]
    pub facebook: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Not a valid URL"))]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(url(message = "Not a valid URL"))]
    pub instagram: Option<String>,
}

impl ProfileRequest {
    pub fn check(&self) -> Result<(), FieldErrors> {
        validate_fields(self).into_result()
    }

    pub fn skill_list(&self) -> Vec<String> {
        parse_skills(&self.skills)
    }

    pub fn social(&self) -> Social {
        Social {
            youtube: self.youtube.clone(),
            twitter: self.twitter.clone(),
            facebook: self.facebook.clone(),
            linkedin: self.linkedin.clone(),
            instagram: self.instagram.clone(),
        }
    }
}

/// Validated from/to pair of an education or experience entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    /// `None` while the entry is current
    pub to: Option<NaiveDate>,
}

/// Parse the from/to inputs of an entry form
///
/// `to` is ignored when `current` is set.
pub fn parse_date_range(from: &str, to: Option<&str>, current: bool) -> Result<DateRange, FieldErrors> {
    let mut errors = FieldErrors::new();
    let from = match NaiveDate::parse_from_str(from, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert("from", "From date must be a valid date (YYYY-MM-DD)");
            None
        }
    };
    let to = match to.filter(|_| !current) {
        Some(raw) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert("to", "To date must be a valid date (YYYY-MM-DD)");
                None
            }
        },
        None => None,
    };
    if let (Some(from), Some(to)) = (from, to) {
        if to < from {
            errors.insert("to", "To date cannot be before the from date");
        }
    }
    match from {
        Some(from) if errors.is_empty() => Ok(DateRange { from, to }),
        _ => Err(errors),
    }
}

/// Add education request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EducationRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "School field is required"))]
    pub school: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Degree field is required"))]
    pub degree: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Field of study field is required"))]
    pub fieldofstudy: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "From date field is required"))]
    pub from: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
}

impl EducationRequest {
    /// Validate required fields, then the date range
    pub fn check(&self) -> Result<DateRange, FieldErrors> {
        validate_fields(self).into_result()?;
        parse_date_range(&self.from, self.to.as_deref(), self.current)
    }
}

/// Add experience request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ExperienceRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Job title field is required"))]
    pub title: String,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Company field is required"))]
    pub company: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "From date field is required"))]
    pub from: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
}

impl ExperienceRequest {
    pub fn check(&self) -> Result<DateRange, FieldErrors> {
        validate_fields(self).into_result()?;
        parse_date_range(&self.from, self.to.as_deref(), self.current)
    }
}

/// Owner summary attached to every returned profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileOwner {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

/// Social links, all optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Profile document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user: ProfileOwner,
    pub handle: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    #[serde(default)]
    pub social: Social,
    /// Newest first
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Newest first
    #[serde(default)]
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

/// Body returned by `DELETE /api/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAccountResponse {
    pub success: bool,
}
