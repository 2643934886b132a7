//! Shared Error Types
//!
//! This module defines the field-keyed error map that travels between the
//! backend and the client. Every user-facing failure (duplicate email, wrong
//! password, invalid form input) is expressed as a map from form field name to
//! a human-readable message so the client can attach it next to the field.
//!
//! # Usage
//!
//! ```rust
//! use devconnect::shared::error::FieldErrors;
//!
//! let errors = FieldErrors::single("email", "Email already exists");
//! assert_eq!(errors.get("email"), Some("Email already exists"));
//! ```
//!
//! # Wire Format
//!
//! `FieldErrors` serializes transparently as a JSON object:
//!
//! ```json
//! { "email": "Email is invalid", "password": "Password field is required" }
//! ```
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Field name to message map returned for user-facing errors
#[derive(Debug, Error, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[error("invalid fields: {}", .0.keys().map(String::as_str).collect::<Vec<_>>().join(", "))]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Create an empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error map holding exactly one field message
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Record a message for a field
    ///
    /// The first message recorded for a field wins, matching how forms only
    /// show one message per input.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Message for a field, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Merge another map into this one, keeping existing messages
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.insert(field, message);
        }
    }

    /// `Ok(())` when no field failed, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let field = field.to_string();
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            fields.insert(field, message);
        }
        fields
    }
}

/// Run derive-based validation and convert the result into a field map
pub fn validate_fields<T: Validate>(value: &T) -> FieldErrors {
    match value.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors.into(),
    }
}
