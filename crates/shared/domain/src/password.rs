//! Password value object - Domain layer password handling.
//!
//! Digests are Argon2id PHC strings carrying their own salt and cost, so a
//! stored digest can be verified without knowing the cost it was created with.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::constants::{
    DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM,
    MIN_PASSWORD_LENGTH,
};
use crate::error::{DomainError, DomainResult};

/// Argon2 cost parameters used when deriving new digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl HashCost {
    /// Check the parameters against Argon2's limits.
    pub fn validate(&self) -> DomainResult<()> {
        self.params().map(|_| ())
    }

    fn params(&self) -> DomainResult<Params> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| DomainError::internal(format!("Invalid hash cost: {}", e)))
    }
}

/// Password digest value object that handles hashing and verification.
///
/// The plaintext is never stored; only the derived digest is kept.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Derive a digest from the plain text with a fresh random salt.
    ///
    /// # Errors
    /// Returns a password error if the plain text is shorter than
    /// [`MIN_PASSWORD_LENGTH`] characters, and an internal error if the cost
    /// is out of range.
    pub fn new(plain_text: &str, cost: HashCost) -> DomainResult<Self> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::password(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, cost.params()?)
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?
            .to_string();

        Ok(Self { hash })
    }

    /// Wrap an existing digest (e.g. loaded from storage).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the digest string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the digest string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this digest.
    ///
    /// A malformed digest never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> HashCost {
        HashCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::new(plain, cheap()).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let password = Password::new(plain, cheap()).unwrap();
        let hash = password.as_str().to_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain, cheap()).unwrap();
        let pass2 = Password::new(plain, cheap()).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_digest_is_argon2id_with_requested_cost() {
        let password = Password::new("password123", cheap()).unwrap();

        assert!(password.as_str().starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
        assert!(!password.as_str().contains("password123"));
    }

    #[test]
    fn test_password_too_short() {
        assert!(Password::new("short", cheap()).is_err());
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(Password::new("12345678", cheap()).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert!(Password::new("ééééééé", cheap()).is_err());
    }

    #[test]
    fn test_invalid_cost_is_internal() {
        let cost = HashCost {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        };
        assert!(cost.validate().is_err());
        assert!(matches!(
            Password::new("password123", cost),
            Err(DomainError::Internal(_))
        ));
    }

    #[test]
    fn test_default_cost_is_valid() {
        assert!(HashCost::default().validate().is_ok());
        assert!(cheap().validate().is_ok());
    }

    #[test]
    fn test_malformed_digest_never_verifies() {
        assert!(!Password::from_hash("not-a-digest").verify("anything"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("password123", cheap()).unwrap();
        assert!(format!("{:?}", password).contains("[REDACTED]"));
    }
}
