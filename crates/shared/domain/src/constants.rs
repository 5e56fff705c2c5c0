//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Validation messages
// =============================================================================

/// Required field is missing or only whitespace
pub const MSG_BLANK: &str = "can't be blank";

/// Value collides with an existing record
pub const MSG_TAKEN: &str = "has already been taken";

/// Numeric field is missing or not numeric
pub const MSG_NOT_A_NUMBER: &str = "is not a number";

/// Referenced record does not exist
pub const MSG_MUST_EXIST: &str = "must exist";

/// Confirmation differs from the password
pub const MSG_CONFIRMATION_MISMATCH: &str = "doesn't match Password";

// =============================================================================
// Password hashing (Argon2id)
// =============================================================================

/// Default memory cost in KiB
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;

/// Default number of passes
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

/// Default degree of parallelism
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

// =============================================================================
// Admin gate
// =============================================================================

/// Realm announced in the Basic Auth challenge
pub const ADMIN_REALM: &str = "Administration";
