//! Field-level validation errors and check composition.
//!
//! Checks are plain functions that append to a shared [`ValidationErrors`]
//! collection. Every check in a list runs, so callers receive all failing
//! fields at once instead of the first one.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single check over a subject, recording failures into the collection.
pub type Check<T> = fn(&T, &mut ValidationErrors);

/// Collection of field name -> human-readable reasons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reason against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// True when no field has failed
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Reasons recorded for a field (empty if the field passed)
    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether a specific reason was recorded for a field
    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.get(field).iter().any(|m| m == message)
    }

    /// Iterate over failing fields and their reasons
    pub fn fields(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// `Ok(value)` when empty, otherwise the collection itself
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Sentence-style messages, e.g. "First name can't be blank"
    pub fn full_messages(&self) -> Vec<String> {
        self.fields()
            .flat_map(|(field, messages)| {
                let label = humanize(field);
                messages
                    .iter()
                    .map(move |message| format!("{} {}", label, message))
            })
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

/// Run every check in order and collect all failures.
pub fn run_checks<T>(subject: &T, checks: &[Check<T>]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for check in checks {
        check(subject, &mut errors);
    }
    errors
}

/// Missing, empty, or whitespace-only
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// "password_confirmation" -> "Password confirmation"
fn humanize(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_multiple_messages_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("password", "can't be blank");
        errors.add("password", "is too short (minimum is 8 characters)");
        errors.add("email", "can't be blank");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("password").len(), 2);
        assert!(errors.contains("email", "can't be blank"));
        assert!(errors.get("first_name").is_empty());
    }

    #[test]
    fn test_full_messages_humanize_field_names() {
        let mut errors = ValidationErrors::new();
        errors.add("password_confirmation", "doesn't match Password");

        assert_eq!(
            errors.full_messages(),
            vec!["Password confirmation doesn't match Password".to_string()]
        );
    }

    #[test]
    fn test_run_checks_does_not_short_circuit() {
        fn first(_: &u8, e: &mut ValidationErrors) {
            e.add("a", "bad");
        }
        fn second(_: &u8, e: &mut ValidationErrors) {
            e.add("b", "bad");
        }

        let errors = run_checks(&0u8, &[first, second]);
        assert!(errors.contains("a", "bad"));
        assert!(errors.contains("b", "bad"));
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "has already been taken");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "email": ["has already been taken"] }));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some("x")));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(5), Ok(5));

        let mut errors = ValidationErrors::new();
        errors.add("name", "can't be blank");
        assert!(errors.into_result(5).is_err());
    }
}
