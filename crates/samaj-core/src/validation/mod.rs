//! Shared client-side form validation.
//!
//! Every validator returns `Result<(), FieldErrors>`. Error keys follow the
//! form layout: top-level fields use their camelCase wire name
//! (`mukhiyaName`, `pincode`), per-member fields use `member-{index}-{field}`,
//! and poll fields use `question-{i}-text` / `question-{i}-option-{j}`.
//! Family-wide member invariants are reported under `members` and `mukhiya`.

mod family;
mod forms;
mod poll;
pub mod rules;

pub use family::{validate_family, validate_member_addition, validate_member_update};
pub use forms::{
    validate_chanda_entry, validate_chokhla, validate_credentials, validate_password_change,
    validate_profile, validate_village,
};
pub use poll::validate_poll;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Flat map of form field key to a user-facing message.
///
/// Only the first message recorded for a key is kept, so specific checks run
/// before generic ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `key` unless the key already has one.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.entry(key.into()).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (index, (key, message)) in self.0.iter().enumerate() {
            let sep = if index == 0 { ": " } else { "; " };
            write!(f, "{sep}{key}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Error key for a field of the member at `index`.
#[must_use]
pub fn member_key(index: usize, field: &str) -> String {
    format!("member-{index}-{field}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("mobile", "Mobile number is required");
        errors.insert("mobile", "Enter a valid 10-digit mobile number");
        assert_eq!(errors.get("mobile"), Some("Mobile number is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn display_lists_every_field() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "Name is required");
        errors.insert(member_key(0, "firstName"), "First name is required");
        let rendered = errors.to_string();
        assert!(rendered.starts_with("validation failed: "));
        assert!(rendered.contains("member-0-firstName: First name is required"));
        assert!(rendered.contains("name: Name is required"));
    }

    #[test]
    fn serializes_as_flat_map() {
        let mut errors = FieldErrors::new();
        errors.insert("pincode", "Enter a valid 6-digit pincode");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["pincode"], "Enter a valid 6-digit pincode");
    }

    #[test]
    fn empty_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
