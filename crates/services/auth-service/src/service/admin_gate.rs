//! Static-credential check for the admin surface.

use common::AdminConfig;

/// Compares presented Basic Auth credentials with the configured pair.
///
/// Stateless: no sessions, no tokens. An unconfigured pair rejects everything.
#[derive(Debug, Clone)]
pub struct AdminGate {
    config: AdminConfig,
}

impl AdminGate {
    pub fn new(config: AdminConfig) -> Self {
        if !config.is_configured() {
            tracing::warn!("Admin credentials not configured; admin routes will reject every request");
        }
        Self { config }
    }

    /// Exact equality on both halves.
    pub fn authenticate_request(&self, username: &str, password: &str) -> bool {
        match (&self.config.username, &self.config.password) {
            (Some(expected_user), Some(expected_pass)) => {
                expected_user == username && expected_pass == password
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AdminGate {
        AdminGate::new(AdminConfig::new("admin", "secret"))
    }

    #[test]
    fn test_configured_pair_accepted() {
        assert!(gate().authenticate_request("admin", "secret"));
    }

    #[test]
    fn test_single_character_deviation_rejected() {
        let gate = gate();
        assert!(!gate.authenticate_request("admin", "secreT"));
        assert!(!gate.authenticate_request("admin", "secret "));
        assert!(!gate.authenticate_request("Admin", "secret"));
        assert!(!gate.authenticate_request("admi", "secret"));
        assert!(!gate.authenticate_request("", ""));
    }

    #[test]
    fn test_unconfigured_gate_rejects_everything() {
        let gate = AdminGate::new(AdminConfig::default());
        assert!(!gate.authenticate_request("", ""));
        assert!(!gate.authenticate_request("admin", "secret"));
    }
}
