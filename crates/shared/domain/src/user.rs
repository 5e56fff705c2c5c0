//! User identity entity, its input forms, and the checks that guard them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MIN_PASSWORD_LENGTH, MSG_BLANK, MSG_CONFIRMATION_MISMATCH};
use crate::password::Password;
use crate::validation::{is_blank, run_checks, Check, ValidationErrors};

/// Canonical stored form of an email: trimmed and lower-cased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// User identity entity
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password_digest", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl User {
    /// Create a new identity from an already-derived digest
    pub fn new(
        id: Uuid,
        email: &str,
        first_name: String,
        last_name: String,
        password_digest: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: normalize_email(email),
            first_name,
            last_name,
            password_digest,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stored digest as a value object
    pub fn password(&self) -> Password {
        Password::from_hash(self.password_digest.as_str())
    }
}

// =============================================================================
// Inputs
// =============================================================================

/// Registration input. The plaintext lives only as long as this value.
#[derive(Clone, Default)]
pub struct Registration {
    /// Email address (stored lower-cased)
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Plaintext password (minimum 8 characters)
    pub password: String,
    /// Must equal `password`
    pub password_confirmation: Option<String>,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"[REDACTED]")
            .field("password_confirmation", &"[REDACTED]")
            .finish()
    }
}

/// Checks run on every registration, in order.
///
/// Email uniqueness needs storage and is checked by the credential store
/// after these.
pub const REGISTRATION_CHECKS: &[Check<Registration>] = &[
    registration_email,
    registration_first_name,
    registration_last_name,
    registration_password,
    registration_password_confirmation,
];

fn registration_email(r: &Registration, errors: &mut ValidationErrors) {
    require("email", &r.email, errors);
}

fn registration_first_name(r: &Registration, errors: &mut ValidationErrors) {
    require("first_name", &r.first_name, errors);
}

fn registration_last_name(r: &Registration, errors: &mut ValidationErrors) {
    require("last_name", &r.last_name, errors);
}

fn registration_password(r: &Registration, errors: &mut ValidationErrors) {
    check_password_length(&r.password, errors);
}

fn registration_password_confirmation(r: &Registration, errors: &mut ValidationErrors) {
    check_password_confirmation(&r.password, r.password_confirmation.as_deref(), errors);
}

impl Registration {
    /// Run the storage-independent registration checks.
    pub fn validate(&self) -> ValidationErrors {
        run_checks(self, REGISTRATION_CHECKS)
    }

    /// Normalized email used for lookup and storage
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}

/// Partial profile update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub const PROFILE_UPDATE_CHECKS: &[Check<ProfileUpdate>] = &[profile_email, profile_names];

fn profile_email(u: &ProfileUpdate, errors: &mut ValidationErrors) {
    require_if_present("email", u.email.as_deref(), errors);
}

fn profile_names(u: &ProfileUpdate, errors: &mut ValidationErrors) {
    require_if_present("first_name", u.first_name.as_deref(), errors);
    require_if_present("last_name", u.last_name.as_deref(), errors);
}

impl ProfileUpdate {
    pub fn validate(&self) -> ValidationErrors {
        run_checks(self, PROFILE_UPDATE_CHECKS)
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.first_name.is_none() && self.last_name.is_none()
    }
}

/// Password replacement input.
#[derive(Clone, Default)]
pub struct PasswordChange {
    pub password: String,
    pub password_confirmation: Option<String>,
}

impl std::fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordChange { .. }")
    }
}

pub const PASSWORD_CHANGE_CHECKS: &[Check<PasswordChange>] = &[change_password, change_confirmation];

fn change_password(p: &PasswordChange, errors: &mut ValidationErrors) {
    check_password_length(&p.password, errors);
}

fn change_confirmation(p: &PasswordChange, errors: &mut ValidationErrors) {
    check_password_confirmation(&p.password, p.password_confirmation.as_deref(), errors);
}

impl PasswordChange {
    pub fn validate(&self) -> ValidationErrors {
        run_checks(self, PASSWORD_CHANGE_CHECKS)
    }
}

// =============================================================================
// Individual checks
// =============================================================================

fn require(field: &str, value: &str, errors: &mut ValidationErrors) {
    if is_blank(Some(value)) {
        errors.add(field, MSG_BLANK);
    }
}

fn require_if_present(field: &str, value: Option<&str>, errors: &mut ValidationErrors) {
    if let Some(value) = value {
        require(field, value, errors);
    }
}

fn check_password_length(password: &str, errors: &mut ValidationErrors) {
    if password.is_empty() {
        errors.add("password", MSG_BLANK);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.add(
            "password",
            format!("is too short (minimum is {} characters)", MIN_PASSWORD_LENGTH),
        );
    }
}

fn check_password_confirmation(
    password: &str,
    confirmation: Option<&str>,
    errors: &mut ValidationErrors,
) {
    match confirmation {
        None | Some("") => errors.add("password_confirmation", MSG_BLANK),
        Some(confirmation) if confirmation != password => {
            errors.add("password_confirmation", MSG_CONFIRMATION_MISMATCH)
        }
        Some(_) => {}
    }
}

// =============================================================================
// Responses
// =============================================================================

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// Lower-cased email address
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            email: "test@test.com".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password: "password123".to_string(),
            password_confirmation: Some("password123".to_string()),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(registration().validate().is_empty());
    }

    #[test]
    fn test_blank_confirmation_rejected() {
        let mut r = registration();
        r.password_confirmation = Some(String::new());

        let errors = r.validate();
        assert!(errors.contains("password_confirmation", "can't be blank"));
    }

    #[test]
    fn test_missing_confirmation_rejected() {
        let mut r = registration();
        r.password_confirmation = None;

        assert!(r
            .validate()
            .contains("password_confirmation", "can't be blank"));
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let mut r = registration();
        r.password_confirmation = Some("different".to_string());

        let errors = r.validate();
        assert!(errors.contains("password_confirmation", "doesn't match Password"));
        assert_eq!(errors.get("password_confirmation").len(), 1);
    }

    #[test]
    fn test_required_fields() {
        let r = Registration {
            email: "  ".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            ..registration()
        };

        let errors = r.validate();
        assert!(errors.contains("email", "can't be blank"));
        assert!(errors.contains("first_name", "can't be blank"));
        assert!(errors.contains("last_name", "can't be blank"));
    }

    #[test]
    fn test_short_password_rejected() {
        let mut r = registration();
        r.password = "short".to_string();
        r.password_confirmation = Some("short".to_string());

        let errors = r.validate();
        assert!(errors.contains("password", "is too short (minimum is 8 characters)"));
        assert!(errors.get("password_confirmation").is_empty());
    }

    #[test]
    fn test_all_checks_accumulate() {
        let errors = Registration::default().validate();

        assert!(errors.contains("email", "can't be blank"));
        assert!(errors.contains("first_name", "can't be blank"));
        assert!(errors.contains("last_name", "can't be blank"));
        assert!(errors.contains("password", "can't be blank"));
        assert!(errors.contains("password", "is too short (minimum is 8 characters)"));
        assert!(errors.contains("password_confirmation", "can't be blank"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Test@Example.COM "), "test@example.com");
    }

    #[test]
    fn test_new_user_stores_normalized_email() {
        let user = User::new(
            Uuid::new_v4(),
            "TEST@Example.com",
            "Test".to_string(),
            "User".to_string(),
            "digest".to_string(),
        );
        assert_eq!(user.email, "test@example.com");
    }

    #[test]
    fn test_profile_update_rejects_blank_values_only_when_present() {
        assert!(ProfileUpdate::default().validate().is_empty());

        let update = ProfileUpdate {
            first_name: Some(" ".to_string()),
            ..ProfileUpdate::default()
        };
        assert!(update.validate().contains("first_name", "can't be blank"));
    }

    #[test]
    fn test_user_json_never_contains_digest() {
        let user = User::new(
            Uuid::new_v4(),
            "a@b.com",
            "A".to_string(),
            "B".to_string(),
            "secret-digest".to_string(),
        );
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-digest"));
        assert!(!format!("{:?}", user).contains("secret-digest"));
    }
}
